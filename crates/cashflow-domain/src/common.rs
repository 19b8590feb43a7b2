//! Shared traits and identifiers for finance tracking primitives.

use uuid::Uuid;

/// Opaque, totally ordered key referencing a user-defined category.
pub type CategoryId = Uuid;

/// Exposes a stable identifier for stored entities.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}
