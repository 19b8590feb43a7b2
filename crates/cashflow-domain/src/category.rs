//! Domain types representing user-defined transfer categories ("types").

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A label transfers are grouped under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether transfers of this category let the user record worked hours.
    #[serde(default)]
    pub hours_worked_editable: bool,
    #[serde(default)]
    pub show_in_quick_access: bool,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: None,
            hours_worked_editable: false,
            show_in_quick_access: false,
        }
    }

    pub fn with_hours_worked(mut self) -> Self {
        self.hours_worked_editable = true;
        self
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}
