//! Reduces one category series into totals, averages and chart series.

use serde::{Deserialize, Serialize};

use cashflow_domain::CategoryId;

use super::transformer::CategorySeries;

/// Total of a quantity plus its averages per transfer and per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueAggregate {
    pub sum: i64,
    pub avg_per_transfer: f64,
    pub avg_per_normalized_date: f64,
}

impl ValueAggregate {
    /// With no transfers the per-transfer average falls back to `sum`;
    /// with no buckets the per-bucket average is zero.
    pub fn from_parts(sum: i64, transfer_count: u64, bucket_count: usize) -> Self {
        let avg_per_transfer = if transfer_count > 0 {
            sum as f64 / transfer_count as f64
        } else {
            sum as f64
        };
        let avg_per_normalized_date = if bucket_count > 0 {
            sum as f64 / bucket_count as f64
        } else {
            0.0
        };
        Self {
            sum,
            avg_per_transfer,
            avg_per_normalized_date,
        }
    }
}

/// A chart line together with its extremes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    pub values: Vec<i64>,
    pub max: i64,
    pub min: i64,
}

impl Diagram {
    pub fn from_values(values: Vec<i64>) -> Self {
        let max = values.iter().copied().max().unwrap_or(0);
        let min = values.iter().copied().min().unwrap_or(0);
        Self { values, max, min }
    }

    /// Running totals of `values`; `max` is the last total and `min` the first.
    pub fn cumulated(values: &[i64]) -> Self {
        let cumulated: Vec<i64> = values
            .iter()
            .scan(0i64, |total, value| {
                *total += value;
                Some(*total)
            })
            .collect();
        let max = cumulated.last().copied().unwrap_or(0);
        let min = cumulated.first().copied().unwrap_or(0);
        Self {
            values: cumulated,
            max,
            min,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeResult {
    pub category_id: CategoryId,
    pub sum: ValueAggregate,
    pub hours_worked: ValueAggregate,
    pub transfer_count: u64,
    pub values_diagram: Diagram,
    pub cumulated_diagram: Diagram,
}

pub struct TypeResultGenerator;

impl TypeResultGenerator {
    pub fn generate(series: &CategorySeries) -> TypeResult {
        let bucket_count = series.points.len();
        let values: Vec<i64> = series.points.iter().map(|point| point.totals.sum).collect();
        let transfer_count: u64 = series.points.iter().map(|point| point.totals.count).sum();
        let sum: i64 = values.iter().sum();
        let hours: u64 = series
            .points
            .iter()
            .map(|point| point.totals.hours_worked)
            .sum();

        TypeResult {
            category_id: series.category_id,
            sum: ValueAggregate::from_parts(sum, transfer_count, bucket_count),
            hours_worked: ValueAggregate::from_parts(hours as i64, transfer_count, bucket_count),
            transfer_count,
            cumulated_diagram: Diagram::cumulated(&values),
            values_diagram: Diagram::from_values(values),
        }
    }
}
