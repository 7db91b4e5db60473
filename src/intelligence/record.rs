// TrendRecord: the validated representation of a trend observation.
//
// Records only come out of `TrendRecord::validate`. Every schema field is
// checked and all violations are reported together.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::Payload;

/// Schema field names, in declaration order.
pub const TREND_FIELDS: [&str; 4] = ["trend_id", "topic", "confidence_score", "timestamp"];

/// A trend observation that passed schema validation.
///
/// Fields are private: the only way to build one is through validation,
/// and nothing can change it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRecord {
    trend_id: String,
    topic: String,
    confidence_score: f64,
    /// Free-form text. No format is enforced.
    timestamp: String,
}

impl TrendRecord {
    /// Validate an input mapping against the trend schema.
    ///
    /// String fields must be JSON strings. `confidence_score` accepts JSON
    /// numbers and strings that parse as a finite float; NaN and infinities
    /// (including overflowing literals like "1e400") are rejected. Booleans
    /// are rejected for `confidence_score` rather than read as 0.0/1.0.
    /// `null` is a wrong type, not a missing field. Unknown keys are ignored.
    pub fn validate(data: &Payload) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let trend_id = string_field(data, "trend_id", &mut errors);
        let topic = string_field(data, "topic", &mut errors);
        let confidence_score = float_field(data, "confidence_score", &mut errors);
        let timestamp = string_field(data, "timestamp", &mut errors);

        match (trend_id, topic, confidence_score, timestamp) {
            (Some(trend_id), Some(topic), Some(confidence_score), Some(timestamp)) => {
                debug!(trend_id = %trend_id, confidence_score, "Trend record validated");
                Ok(Self {
                    trend_id,
                    topic,
                    confidence_score,
                    timestamp,
                })
            }
            _ => {
                debug!(error_count = errors.len(), "Trend record rejected");
                Err(ValidationError { errors })
            }
        }
    }

    pub fn trend_id(&self) -> &str {
        &self.trend_id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The timestamp as UTC, if it happens to be RFC 3339.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// The four schema fields as a mapping.
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("trend_id".to_string(), Value::from(self.trend_id.as_str()));
        payload.insert("topic".to_string(), Value::from(self.topic.as_str()));
        payload.insert(
            "confidence_score".to_string(),
            Value::from(self.confidence_score),
        );
        payload.insert("timestamp".to_string(), Value::from(self.timestamp.as_str()));
        payload
    }
}

impl TryFrom<&Payload> for TrendRecord {
    type Error = ValidationError;

    fn try_from(data: &Payload) -> Result<Self, Self::Error> {
        Self::validate(data)
    }
}

/// The type a schema field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    String,
    Float,
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedType::String => write!(f, "string"),
            ExpectedType::Float => write!(f, "float"),
        }
    }
}

/// Why a single field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    Missing,
    /// `found` is the JSON type of the rejected value ("null", "boolean", ...).
    /// An unparseable or non-finite numeric string reports "string".
    WrongType {
        expected: ExpectedType,
        found: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl FieldError {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Missing,
        }
    }

    fn wrong_type(field: &'static str, expected: ExpectedType, found: &Value) -> Self {
        Self {
            field,
            kind: FieldErrorKind::WrongType {
                expected,
                found: json_type(found),
            },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldErrorKind::Missing => write!(f, "{}: field required", self.field),
            FieldErrorKind::WrongType { expected, found } => {
                write!(f, "{}: expected {expected}, found {found}", self.field)
            }
        }
    }
}

/// Every field that failed validation, in schema declaration order.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Names of the failing fields.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn is_missing(&self, field: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.field == field && e.kind == FieldErrorKind::Missing)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.errors.len() == 1 { "" } else { "s" };
        write!(
            f,
            "{} validation error{plural} for TrendRecord",
            self.errors.len()
        )?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

fn string_field(
    data: &Payload,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match data.get(field) {
        None => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::wrong_type(field, ExpectedType::String, other));
            None
        }
    }
}

fn float_field(
    data: &Payload,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = match data.get(field) {
        None => {
            errors.push(FieldError::missing(field));
            return None;
        }
        Some(value) => value,
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|score| score.is_finite());

    if parsed.is_none() {
        errors.push(FieldError::wrong_type(field, ExpectedType::Float, value));
    }
    parsed
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_display_lists_each_field() {
        let err = TrendRecord::validate(&payload(json!({ "topic": 7 }))).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.starts_with("4 validation errors for TrendRecord"));
        assert!(rendered.contains("trend_id: field required"));
        assert!(rendered.contains("topic: expected string, found number"));
        assert!(rendered.contains("confidence_score: field required"));
        assert!(rendered.contains("timestamp: field required"));
    }

    #[test]
    fn test_display_singular() {
        let err = TrendRecord::validate(&payload(json!({
            "trend_id": "t-1",
            "topic": "example",
            "timestamp": "2026-02-06T00:00:00Z",
        })))
        .unwrap_err();
        assert!(err.to_string().starts_with("1 validation error for TrendRecord"));
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type(&json!(null)), "null");
        assert_eq!(json_type(&json!(true)), "boolean");
        assert_eq!(json_type(&json!([1])), "array");
        assert_eq!(json_type(&json!({})), "object");
    }

    #[test]
    fn test_timestamp_utc_parses_rfc3339() {
        let record = TrendRecord::validate(&payload(json!({
            "trend_id": "t-1",
            "topic": "example",
            "confidence_score": 0.9,
            "timestamp": "2026-02-06T01:00:00+01:00",
        })))
        .unwrap();
        let utc = record.timestamp_utc().unwrap();
        assert_eq!(utc.to_rfc3339(), "2026-02-06T00:00:00+00:00");
    }

    #[test]
    fn test_timestamp_utc_none_for_free_form() {
        let record = TrendRecord::validate(&payload(json!({
            "trend_id": "t-1",
            "topic": "example",
            "confidence_score": 0.9,
            "timestamp": "yesterday afternoon",
        })))
        .unwrap();
        assert!(record.timestamp_utc().is_none());
    }
}
