//! The aggregation pipeline.
//!
//! Stages run strictly forward, each a pure function producing fresh values:
//! [`Summarizer`] → [`Transformer`] → [`TypeResultGenerator`] →
//! [`TimeSpanGenerator`], with [`group_top_n`] applied for bounded displays.

pub mod grouping;
pub mod normalizer;
pub mod overview;
pub mod summarizer;
pub mod time_span;
pub mod transformer;
pub mod type_result;

pub use grouping::{group_top_n, rank_by, Average, CategoryEntry, Series, Squash};
pub use normalizer::{buckets_between, normalize, DateRange};
pub use overview::{DirectionOverview, Overview};
pub use summarizer::{BucketSummary, BucketTotals, Summarizer, Summary};
pub use time_span::{DirectionResult, TimeSpanGenerator, TimeSpanResult};
pub use transformer::{CategorySeries, SeriesPoint, TransformedSummary, Transformer};
pub use type_result::{Diagram, TypeResult, TypeResultGenerator, ValueAggregate};
