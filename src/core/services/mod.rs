pub mod analysis_service;

pub use analysis_service::{AnalysisRequest, AnalysisService};

use cashflow_config::ConfigError;

use crate::errors::AnalysisError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
