//! Splits summarized buckets into parallel income and expense series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cashflow_domain::{CategoryId, Direction};

use super::summarizer::{BucketSummary, BucketTotals, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub totals: BucketTotals,
}

/// One category's totals for a single direction, one point per bucket in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub category_id: CategoryId,
    pub points: Vec<SeriesPoint>,
}

impl CategorySeries {
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|point| point.date).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformedSummary {
    pub incomes: Vec<CategorySeries>,
    pub expenses: Vec<CategorySeries>,
}

impl TransformedSummary {
    pub fn side(&self, direction: Direction) -> &[CategorySeries] {
        match direction {
            Direction::Income => &self.incomes,
            Direction::Expense => &self.expenses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }
}

pub struct Transformer;

impl Transformer {
    /// Reshapes `summary` without filtering or ranking; all-zero categories are kept.
    pub fn transform(summary: &Summary) -> TransformedSummary {
        let mut transformed = TransformedSummary::default();
        for (category_id, buckets) in summary {
            transformed
                .incomes
                .push(split(*category_id, buckets, |bucket| bucket.incomes));
            transformed
                .expenses
                .push(split(*category_id, buckets, |bucket| bucket.expenses));
        }
        transformed
    }
}

fn split(
    category_id: CategoryId,
    buckets: &[BucketSummary],
    pick: impl Fn(&BucketSummary) -> BucketTotals,
) -> CategorySeries {
    CategorySeries {
        category_id,
        points: buckets
            .iter()
            .map(|bucket| SeriesPoint {
                date: bucket.date,
                totals: pick(bucket),
            })
            .collect(),
    }
}
