//! Top-N grouping: keeps the leading entries of a ranked list and folds the
//! rest into a single "other" entry so bounded lists stay bounded.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use cashflow_domain::CategoryId;

use crate::errors::{AnalysisError, AnalysisResult};

/// A ranked list row: either a real category or the synthetic "other" aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryEntry<T> {
    Named { category_id: CategoryId, value: T },
    Other { value: T },
}

impl<T> CategoryEntry<T> {
    pub fn named(category_id: CategoryId, value: T) -> Self {
        CategoryEntry::Named { category_id, value }
    }

    pub fn value(&self) -> &T {
        match self {
            CategoryEntry::Named { value, .. } | CategoryEntry::Other { value } => value,
        }
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        match self {
            CategoryEntry::Named { category_id, .. } => Some(*category_id),
            CategoryEntry::Other { .. } => None,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, CategoryEntry::Other { .. })
    }
}

/// Folds several values into the one shown for the "other" row.
pub trait Squash: Sized {
    fn squash(tail: &[Self]) -> Self;
}

impl Squash for i64 {
    fn squash(tail: &[Self]) -> Self {
        tail.iter().sum()
    }
}

/// An average shown per category.
///
/// Squashing takes the mean of the tail's averages rather than dividing the
/// merged totals, so the "other" row reads as a typical tail category.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Average(pub f64);

impl Squash for Average {
    fn squash(tail: &[Self]) -> Self {
        if tail.is_empty() {
            return Average(0.0);
        }
        Average(tail.iter().map(|avg| avg.0).sum::<f64>() / tail.len() as f64)
    }
}

/// A bucket-aligned chart line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series(pub Vec<i64>);

impl Series {
    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }
}

impl Squash for Series {
    /// Element-wise sum; lines are expected to share one bucket alignment,
    /// a shorter line contributes zero past its end.
    fn squash(tail: &[Self]) -> Self {
        let len = tail.iter().map(|series| series.0.len()).max().unwrap_or(0);
        let mut merged = vec![0i64; len];
        for series in tail {
            for (slot, value) in merged.iter_mut().zip(&series.0) {
                *slot += value;
            }
        }
        Series(merged)
    }
}

/// Stable descending sort by `key`; ties keep their encounter order.
pub fn rank_by<T, K, F>(items: &mut [T], key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}

/// Keeps the first `limit - 1` entries and squashes the remainder into one
/// [`CategoryEntry::Other`]. Lists no longer than `limit` are returned unchanged.
pub fn group_top_n<T: Squash>(
    ranked: Vec<CategoryEntry<T>>,
    limit: usize,
) -> AnalysisResult<Vec<CategoryEntry<T>>> {
    if limit == 0 {
        return Err(AnalysisError::InvalidLimit(limit));
    }
    if ranked.len() <= limit {
        return Ok(ranked);
    }

    let mut kept = ranked;
    let tail: Vec<T> = kept
        .split_off(limit - 1)
        .into_iter()
        .map(|entry| match entry {
            CategoryEntry::Named { value, .. } | CategoryEntry::Other { value } => value,
        })
        .collect();
    kept.push(CategoryEntry::Other {
        value: T::squash(&tail),
    });
    Ok(kept)
}
