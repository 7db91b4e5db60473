// Trend intelligence: schema validation for trend observations.
//
// The TrendSource trait is where trends come from; TrendFetcher is the
// placeholder source until a real one is designed. TrendRecord is the only
// validated shape the rest of the crate accepts.

pub mod fetcher;
pub mod record;
pub mod traits;
