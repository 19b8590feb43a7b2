//! Domain model for recorded income and expense events.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// An immutable financial event filed under a category.
///
/// `value` is expressed in minor units (cents) and is never negative; the
/// direction is carried by `is_salary` instead of the sign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transfer {
    pub id: Uuid,
    pub category_id: CategoryId,
    pub value: i64,
    pub date: NaiveDate,
    pub is_salary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Transfer {
    pub fn new(category_id: CategoryId, value: i64, date: NaiveDate, is_salary: bool) -> Self {
        debug_assert!(value >= 0, "transfer value must not be negative, got {value}");
        Self {
            id: Uuid::new_v4(),
            category_id,
            value,
            date,
            is_salary,
            hours_worked: None,
            label: None,
        }
    }

    pub fn income(category_id: CategoryId, value: i64, date: NaiveDate) -> Self {
        Self::new(category_id, value, date, true)
    }

    pub fn expense(category_id: CategoryId, value: i64, date: NaiveDate) -> Self {
        Self::new(category_id, value, date, false)
    }

    pub fn with_hours_worked(mut self, hours: u32) -> Self {
        self.hours_worked = Some(hours);
        self
    }

    pub fn direction(&self) -> Direction {
        if self.is_salary {
            Direction::Income
        } else {
            Direction::Expense
        }
    }
}

impl Identifiable for Transfer {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Which side of the books a transfer lands on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Income => "Income",
            Direction::Expense => "Expense",
        };
        f.write_str(label)
    }
}
