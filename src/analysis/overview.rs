//! Display-ready, size-bounded views over a [`TimeSpanResult`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cashflow_domain::Precision;

use super::grouping::{group_top_n, rank_by, Average, CategoryEntry, Series};
use super::normalizer::DateRange;
use super::time_span::{DirectionResult, TimeSpanResult};
use crate::errors::AnalysisResult;

/// One direction of the overview; each list is grouped to at most `limit` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionOverview {
    pub total_sum: i64,
    pub total_avg_per_transfer: f64,
    pub total_avg_per_normalized_date: f64,
    pub totals_by_type: Vec<CategoryEntry<i64>>,
    pub averages_by_type: Vec<CategoryEntry<Average>>,
    pub value_lines: Vec<CategoryEntry<Series>>,
    pub cumulated_lines: Vec<CategoryEntry<Series>>,
}

impl DirectionOverview {
    fn from_direction(direction: &DirectionResult, limit: usize) -> AnalysisResult<Self> {
        let results = &direction.type_results;

        let totals: Vec<CategoryEntry<i64>> = results
            .iter()
            .map(|result| CategoryEntry::named(result.category_id, result.sum.sum))
            .collect();

        let mut averages: Vec<CategoryEntry<Average>> = results
            .iter()
            .map(|result| {
                CategoryEntry::named(result.category_id, Average(result.sum.avg_per_transfer))
            })
            .collect();
        rank_by(&mut averages, |entry| *entry.value());

        let value_lines: Vec<CategoryEntry<Series>> = results
            .iter()
            .map(|result| {
                CategoryEntry::named(
                    result.category_id,
                    Series(result.values_diagram.values.clone()),
                )
            })
            .collect();
        let cumulated_lines: Vec<CategoryEntry<Series>> = results
            .iter()
            .map(|result| {
                CategoryEntry::named(
                    result.category_id,
                    Series(result.cumulated_diagram.values.clone()),
                )
            })
            .collect();

        Ok(Self {
            total_sum: direction.total_sum,
            total_avg_per_transfer: direction.total_avg_per_transfer,
            total_avg_per_normalized_date: direction.total_avg_per_normalized_date,
            totals_by_type: group_top_n(totals, limit)?,
            averages_by_type: group_top_n(averages, limit)?,
            value_lines: group_top_n(value_lines, limit)?,
            cumulated_lines: group_top_n(cumulated_lines, limit)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub range: DateRange,
    pub precision: Precision,
    pub normalized_dates: Vec<NaiveDate>,
    pub labels: Vec<String>,
    pub balance: i64,
    pub incomes: DirectionOverview,
    pub expenses: DirectionOverview,
}

impl Overview {
    /// Groups every ranked list of `span` independently down to `limit` rows.
    pub fn from_time_span(span: &TimeSpanResult, limit: usize) -> AnalysisResult<Self> {
        Ok(Self {
            range: span.range,
            precision: span.precision,
            normalized_dates: span.normalized_dates.clone(),
            labels: span.labels(),
            balance: span.balance(),
            incomes: DirectionOverview::from_direction(&span.incomes, limit)?,
            expenses: DirectionOverview::from_direction(&span.expenses, limit)?,
        })
    }
}
