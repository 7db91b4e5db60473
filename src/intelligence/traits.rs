// Trend source trait: swap-ready abstraction.
//
// Like the Skill trait, this lets a real trend provider replace the
// placeholder without touching validation or the CLI.

use anyhow::Result;

use crate::Payload;

/// Something that can look up a raw trend for a query.
///
/// The returned mapping is unvalidated. Run it through
/// `TrendRecord::validate` (or `fetcher::fetch_validated`) before use.
pub trait TrendSource: Send + Sync {
    fn fetch_trend(&self, query: &str) -> Result<Payload>;
}
