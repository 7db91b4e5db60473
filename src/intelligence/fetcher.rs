// TrendFetcher: the placeholder trend source plus the validation hook.
//
// fetch_trend always yields an empty mapping, so anything downstream that
// validates it fails with every schema field missing. validate_trend is the
// real entry point for checking externally supplied trend data.

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::record::{TrendRecord, ValidationError};
use super::traits::TrendSource;
use crate::Payload;

#[derive(Debug, Clone, Copy, Default)]
pub struct TrendFetcher;

impl TrendFetcher {
    pub fn new() -> Self {
        Self
    }

    /// Parse an input mapping into a TrendRecord.
    pub fn validate_trend(&self, data: &Payload) -> Result<TrendRecord, ValidationError> {
        TrendRecord::validate(data)
    }
}

impl TrendSource for TrendFetcher {
    fn fetch_trend(&self, query: &str) -> Result<Payload> {
        warn!(query, "TrendFetcher has no backing source, returning an empty trend");
        Ok(Payload::new())
    }
}

/// Fetch a trend and validate it in one step.
///
/// A ValidationError surfaces through anyhow and can be recovered with
/// `err.downcast_ref::<ValidationError>()`.
pub fn fetch_validated(source: &dyn TrendSource, query: &str) -> Result<TrendRecord> {
    let raw = source
        .fetch_trend(query)
        .with_context(|| format!("Failed to fetch trend for query {query:?}"))?;

    let record = TrendRecord::validate(&raw)?;

    info!(
        trend_id = record.trend_id(),
        topic = record.topic(),
        confidence_score = record.confidence_score(),
        "Fetched trend"
    );
    Ok(record)
}
