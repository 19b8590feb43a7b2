use std::path::PathBuf;

use cashflow_domain::Precision;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// User-configurable analysis preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub default_precision: Precision,
    /// Number of rows shown in full-size ranked lists, including the "other" row.
    #[serde(default = "Config::default_top_n_limit")]
    pub top_n_limit: usize,
    /// Row limit for compact views such as widgets.
    #[serde(default = "Config::default_compact_top_n_limit")]
    pub compact_top_n_limit: usize,
    #[serde(default = "Config::default_trailing_buckets")]
    pub trailing_buckets: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for application data. Defaults to the platform data dir.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            default_precision: Precision::default(),
            top_n_limit: Self::default_top_n_limit(),
            compact_top_n_limit: Self::default_compact_top_n_limit(),
            trailing_buckets: Self::default_trailing_buckets(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-US".into()
    }

    pub fn default_currency() -> String {
        "EUR".into()
    }

    pub fn default_top_n_limit() -> usize {
        3
    }

    pub fn default_compact_top_n_limit() -> usize {
        2
    }

    pub fn default_trailing_buckets() -> u32 {
        12
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("cashflow")
    }

    /// Rejects values the analysis pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n_limit == 0 || self.compact_top_n_limit == 0 {
            return Err(ConfigError::Invalid(
                "top-n limits must be at least 1".into(),
            ));
        }
        if self.trailing_buckets == 0 {
            return Err(ConfigError::Invalid(
                "trailing_buckets must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
