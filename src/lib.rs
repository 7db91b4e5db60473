// Trendgate: trend record validation and skill contracts
//
// This is the library root. `intelligence` owns the trend schema and the
// trend source seam; `skills` owns the uniform `run(payload)` capability that
// media downloading and transcription plug into.

pub mod config;
pub mod intelligence;
pub mod output;
pub mod skills;

/// A JSON object passed into and out of sources and skills.
pub type Payload = serde_json::Map<String, serde_json::Value>;
