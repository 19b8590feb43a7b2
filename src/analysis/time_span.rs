//! Combines per-category results into span-level totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cashflow_domain::{Direction, Precision};

use super::grouping::rank_by;
use super::normalizer::DateRange;
use super::transformer::{CategorySeries, TransformedSummary};
use super::type_result::{TypeResult, TypeResultGenerator};

/// Totals for one direction, with its category results ranked by sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionResult {
    pub total_sum: i64,
    pub total_avg_per_transfer: f64,
    pub total_avg_per_normalized_date: f64,
    pub type_results: Vec<TypeResult>,
}

impl DirectionResult {
    fn from_series(series: &[CategorySeries], bucket_count: usize) -> Self {
        let mut type_results: Vec<TypeResult> =
            series.iter().map(TypeResultGenerator::generate).collect();
        rank_by(&mut type_results, |result| result.sum.sum);

        let total_sum: i64 = type_results.iter().map(|result| result.sum.sum).sum();
        let transfer_count: u64 = type_results.iter().map(|result| result.transfer_count).sum();
        let total_avg_per_transfer = if transfer_count > 0 {
            total_sum as f64 / transfer_count as f64
        } else {
            0.0
        };
        let total_avg_per_normalized_date = if bucket_count > 0 {
            total_sum as f64 / bucket_count as f64
        } else {
            0.0
        };

        Self {
            total_sum,
            total_avg_per_transfer,
            total_avg_per_normalized_date,
            type_results,
        }
    }

    pub fn transfer_count(&self) -> u64 {
        self.type_results
            .iter()
            .map(|result| result.transfer_count)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSpanResult {
    pub range: DateRange,
    pub precision: Precision,
    pub normalized_dates: Vec<NaiveDate>,
    pub incomes: DirectionResult,
    pub expenses: DirectionResult,
}

impl TimeSpanResult {
    pub fn side(&self, direction: Direction) -> &DirectionResult {
        match direction {
            Direction::Income => &self.incomes,
            Direction::Expense => &self.expenses,
        }
    }

    /// Income total minus expense total.
    pub fn balance(&self) -> i64 {
        self.incomes.total_sum - self.expenses.total_sum
    }

    pub fn labels(&self) -> Vec<String> {
        self.normalized_dates
            .iter()
            .map(|date| self.precision.label(*date))
            .collect()
    }
}

pub struct TimeSpanGenerator;

impl TimeSpanGenerator {
    /// Builds the span result; both directions are computed independently.
    ///
    /// `normalized_dates` is the bucket sequence shared by the category
    /// series, so it is empty when `transformed` holds no series at all.
    pub fn generate(
        range: DateRange,
        precision: Precision,
        transformed: &TransformedSummary,
    ) -> TimeSpanResult {
        let normalized_dates = transformed
            .incomes
            .first()
            .or_else(|| transformed.expenses.first())
            .map(CategorySeries::dates)
            .unwrap_or_default();
        let bucket_count = normalized_dates.len();

        TimeSpanResult {
            range,
            precision,
            incomes: DirectionResult::from_series(&transformed.incomes, bucket_count),
            expenses: DirectionResult::from_series(&transformed.expenses, bucket_count),
            normalized_dates,
        }
    }
}
