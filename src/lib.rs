#![doc(test(attr(deny(warnings))))]

//! Cashflow Core turns flat lists of income and expense transfers into
//! time-bucketed, per-category summaries ready for charts and overview cards.

pub mod analysis;
pub mod core;
pub mod errors;
pub mod utils;

pub use cashflow_config as config;
pub use cashflow_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cashflow Core tracing initialized.");
    });
}
