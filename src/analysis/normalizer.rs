//! Date normalization and bucket sequences.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use cashflow_domain::Precision;

use crate::errors::{AnalysisError, AnalysisResult};

/// Snaps `date` to the start of its bucket.
pub fn normalize(date: NaiveDate, precision: Precision) -> NaiveDate {
    precision.normalize(date)
}

/// Every bucket start from `normalize(start)` up to and including `normalize(end)`.
pub fn buckets_between(
    start: NaiveDate,
    end: NaiveDate,
    precision: Precision,
) -> AnalysisResult<Vec<NaiveDate>> {
    Ok(DateRange::new(start, end)?.buckets(precision))
}

/// An inclusive, validated `[start, end]` date range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AnalysisResult<Self> {
        if start > end {
            return Err(AnalysisError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering the `count` most recent buckets, the last one containing `today`.
    pub fn trailing(today: NaiveDate, precision: Precision, count: u32) -> AnalysisResult<Self> {
        if count == 0 {
            return Err(AnalysisError::EmptyRange(
                "trailing range needs at least one bucket".into(),
            ));
        }
        let last = precision.normalize(today);
        let months_back = precision.step_months() * (count - 1);
        let first = last
            .checked_sub_months(chrono::Months::new(months_back))
            .ok_or_else(|| {
                AnalysisError::EmptyRange(format!(
                    "{count} {precision} buckets before {today} leave the calendar"
                ))
            })?;
        Self::new(first, today)
    }

    /// Whether `bucket` lies between the buckets of `start` and `end`, inclusive.
    pub fn covers_bucket(&self, bucket: NaiveDate, precision: Precision) -> bool {
        bucket >= precision.normalize(self.start) && bucket <= precision.normalize(self.end)
    }

    /// Ordered bucket starts covering the range, never empty.
    pub fn buckets(&self, precision: Precision) -> Vec<NaiveDate> {
        let last = precision.normalize(self.end);
        let mut buckets = Vec::with_capacity(self.bucket_count_hint(precision));
        let mut current = Some(precision.normalize(self.start));
        while let Some(bucket) = current.filter(|bucket| *bucket <= last) {
            buckets.push(bucket);
            current = precision.next_bucket(bucket);
        }
        buckets
    }

    fn bucket_count_hint(&self, precision: Precision) -> usize {
        let months = (self.end.year() - self.start.year()) * 12 + self.end.month() as i32
            - self.start.month() as i32;
        (months.max(0) as u32 / precision.step_months()) as usize + 1
    }
}
