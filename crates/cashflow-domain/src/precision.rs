//! Time-bucket granularity and date normalization.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Granularity used to bucket transfers over time.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    #[default]
    Month,
    Quarter,
    Year,
}

impl Precision {
    /// Number of calendar months between two consecutive buckets.
    pub fn step_months(self) -> u32 {
        match self {
            Precision::Month => 1,
            Precision::Quarter => 3,
            Precision::Year => 12,
        }
    }

    /// Snaps `date` to the first day of the bucket containing it.
    ///
    /// Normalizing an already normalized date returns it unchanged.
    pub fn normalize(self, date: NaiveDate) -> NaiveDate {
        let month_start = date - Days::new(u64::from(date.day0()));
        match self {
            Precision::Month => month_start,
            Precision::Quarter => {
                let month0 = date.month0();
                month_start - Months::new(month0 - (month0 / 3) * 3)
            }
            Precision::Year => date - Days::new(u64::from(date.ordinal0())),
        }
    }

    /// Returns the start of the bucket following the one that starts at `bucket`.
    pub fn next_bucket(self, bucket: NaiveDate) -> Option<NaiveDate> {
        bucket.checked_add_months(Months::new(self.step_months()))
    }

    /// Short label for the bucket containing `date`, e.g. `2025-02`, `2025-Q3`, `2025`.
    pub fn label(self, date: NaiveDate) -> String {
        match self {
            Precision::Month => format!("{}-{:02}", date.year(), date.month()),
            Precision::Quarter => format!("{}-Q{}", date.year(), date.month0() / 3 + 1),
            Precision::Year => date.year().to_string(),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Precision::Month => "month",
            Precision::Quarter => "quarter",
            Precision::Year => "year",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown precision `{0}` (expected month, quarter or year)")]
pub struct ParsePrecisionError(pub String);

impl FromStr for Precision {
    type Err = ParsePrecisionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "month" | "monthly" => Ok(Precision::Month),
            "quarter" | "quarterly" => Ok(Precision::Quarter),
            "year" | "yearly" => Ok(Precision::Year),
            other => Err(ParsePrecisionError(other.to_string())),
        }
    }
}
