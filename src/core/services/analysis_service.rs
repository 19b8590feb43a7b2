use tracing::{debug, info, info_span};

use cashflow_config::Config;
use cashflow_domain::{Category, CategoryId, Identifiable, Precision, Transfer};

use crate::analysis::{
    DateRange, Overview, Summarizer, TimeSpanGenerator, TimeSpanResult, Transformer,
};
use crate::core::time::Clock;
use crate::errors::AnalysisError;

use super::ServiceResult;

/// Parameters of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequest {
    range: DateRange,
    precision: Precision,
    limit: usize,
}

impl AnalysisRequest {
    pub fn new(range: DateRange, precision: Precision, limit: usize) -> ServiceResult<Self> {
        if limit == 0 {
            return Err(AnalysisError::InvalidLimit(limit).into());
        }
        Ok(Self {
            range,
            precision,
            limit,
        })
    }

    /// Uses the configured precision and full-size list limit.
    pub fn from_config(config: &Config, range: DateRange) -> ServiceResult<Self> {
        config.validate()?;
        Self::new(range, config.default_precision, config.top_n_limit)
    }

    /// The configured number of trailing buckets up to today, with the compact list limit.
    pub fn trailing(clock: &dyn Clock, config: &Config) -> ServiceResult<Self> {
        config.validate()?;
        let range = DateRange::trailing(
            clock.today(),
            config.default_precision,
            config.trailing_buckets,
        )?;
        Self::new(range, config.default_precision, config.compact_top_n_limit)
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Runs the aggregation pipeline. Stateless; every call builds fresh results.
pub struct AnalysisService;

impl AnalysisService {
    pub fn analyze(
        request: &AnalysisRequest,
        transfers: &[Transfer],
        categories: &[Category],
    ) -> TimeSpanResult {
        let span = info_span!(
            "analysis",
            precision = %request.precision,
            start = %request.range.start,
            end = %request.range.end
        );
        let _guard = span.enter();
        debug!(
            transfers = transfers.len(),
            categories = categories.len(),
            "starting analysis"
        );

        let category_ids: Vec<CategoryId> =
            categories.iter().map(|category| category.id()).collect();
        let summary = Summarizer::summarize(
            transfers,
            &category_ids,
            &request.range,
            request.precision,
        );
        let transformed = Transformer::transform(&summary);
        let result = TimeSpanGenerator::generate(request.range, request.precision, &transformed);

        info!(
            buckets = result.normalized_dates.len(),
            income_types = result.incomes.type_results.len(),
            expense_types = result.expenses.type_results.len(),
            "analysis finished"
        );
        result
    }

    /// Analyzes and groups every ranked list down to the request's limit.
    pub fn overview(
        request: &AnalysisRequest,
        transfers: &[Transfer],
        categories: &[Category],
    ) -> ServiceResult<Overview> {
        let span = Self::analyze(request, transfers, categories);
        Ok(Overview::from_time_span(&span, request.limit)?)
    }

    /// Compact overview of the trailing buckets, as shown by home-screen widgets.
    pub fn widget_overview(
        clock: &dyn Clock,
        config: &Config,
        transfers: &[Transfer],
        categories: &[Category],
    ) -> ServiceResult<Overview> {
        let request = AnalysisRequest::trailing(clock, config)?;
        Self::overview(&request, transfers, categories)
    }
}
