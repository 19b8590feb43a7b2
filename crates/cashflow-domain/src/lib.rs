//! cashflow-domain
//!
//! Pure domain models (Transfer, Category, Precision).
//! No I/O, no storage, no aggregation. Only data types and core enums.

pub mod category;
pub mod common;
pub mod precision;
pub mod transfer;

pub use category::*;
pub use common::*;
pub use precision::*;
pub use transfer::*;
