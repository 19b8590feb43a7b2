//! Orchestration around the aggregation pipeline.

pub mod services;
pub mod time;
