//! Groups raw transfers per category and per normalized bucket.

use std::collections::{BTreeMap, BTreeSet};
use std::ops;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use cashflow_domain::{CategoryId, Precision, Transfer};

use super::normalizer::DateRange;

/// Count, value and worked hours of the transfers that fell into one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotals {
    pub sum: i64,
    pub count: u64,
    pub hours_worked: u64,
}

impl BucketTotals {
    pub fn is_empty(&self) -> bool {
        self.sum == 0 && self.count == 0 && self.hours_worked == 0
    }

    fn record(&mut self, transfer: &Transfer) {
        self.sum += transfer.value;
        self.count += 1;
        self.hours_worked += u64::from(transfer.hours_worked.unwrap_or(0));
    }
}

impl ops::Add for BucketTotals {
    type Output = BucketTotals;

    fn add(self, other: BucketTotals) -> BucketTotals {
        BucketTotals {
            sum: self.sum + other.sum,
            count: self.count + other.count,
            hours_worked: self.hours_worked + other.hours_worked,
        }
    }
}

/// Income and expense totals of one category within one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub date: NaiveDate,
    pub incomes: BucketTotals,
    pub expenses: BucketTotals,
}

impl BucketSummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            incomes: BucketTotals::default(),
            expenses: BucketTotals::default(),
        }
    }

    fn record(&mut self, transfer: &Transfer) {
        if transfer.is_salary {
            self.incomes.record(transfer);
        } else {
            self.expenses.record(transfer);
        }
    }
}

/// Per-category bucket series, each covering the full analyzed range.
pub type Summary = BTreeMap<CategoryId, Vec<BucketSummary>>;

pub struct Summarizer;

impl Summarizer {
    /// Buckets `transfers` by category and normalized date.
    ///
    /// Every id in `categories` gets an entry even without transfers. Series
    /// are zero-filled so each holds one ascending entry per bucket of `range`.
    /// Transfers filed under an unknown category still get their own entry;
    /// a transfer is kept whenever its bucket is one of the range's buckets,
    /// even if its day lies before `range.start` or after `range.end`.
    pub fn summarize(
        transfers: &[Transfer],
        categories: &[CategoryId],
        range: &DateRange,
        precision: Precision,
    ) -> Summary {
        let mut grouped: BTreeMap<CategoryId, BTreeMap<NaiveDate, BucketSummary>> = categories
            .iter()
            .map(|id| (*id, BTreeMap::new()))
            .collect();
        let known: BTreeSet<CategoryId> = grouped.keys().copied().collect();
        let mut unknown = BTreeSet::new();
        let mut out_of_range = 0usize;

        for transfer in transfers {
            let bucket = precision.normalize(transfer.date);
            if !range.covers_bucket(bucket, precision) {
                out_of_range += 1;
                continue;
            }
            if !known.contains(&transfer.category_id) && unknown.insert(transfer.category_id) {
                warn!(
                    "transfer {} references unknown category {}; summarizing it separately",
                    transfer.id, transfer.category_id
                );
            }
            grouped
                .entry(transfer.category_id)
                .or_default()
                .entry(bucket)
                .or_insert_with(|| BucketSummary::empty(bucket))
                .record(transfer);
        }

        if out_of_range > 0 {
            warn!(
                "skipped {} transfer(s) outside the {} buckets of {}..={}",
                out_of_range, precision, range.start, range.end
            );
        }

        let buckets = range.buckets(precision);
        grouped
            .into_iter()
            .map(|(category_id, by_date)| {
                let series = buckets
                    .iter()
                    .map(|date| {
                        by_date
                            .get(date)
                            .copied()
                            .unwrap_or_else(|| BucketSummary::empty(*date))
                    })
                    .collect();
                (category_id, series)
            })
            .collect()
    }
}
