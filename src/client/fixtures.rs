//! Test fixtures and builders for backend payloads
//!
//! Provides builder patterns for creating backend JSON with sensible
//! defaults. Import via `use crate::client::fixtures::*` in test modules.

use serde_json::{Map, Value, json};

// ============================================================================
// RecordBuilder
// ============================================================================

/// Builder for a loosely-typed backend record.
///
/// # Example
/// ```ignore
/// let cert = RecordBuilder::certificate("C1")
///     .field("title", "Yellow Belt")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    /// Create a record with only an `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(id.into()));
        Self { fields }
    }

    /// A certificate with every field the backend usually sends.
    pub fn certificate(id: impl Into<String>) -> Self {
        Self::new(id)
            .field("title", "Yellow Belt Certificate")
            .field("studentName", "Aiko Tanaka")
            .field("beltLevel", "Yellow Belt")
            .field("issueDate", "2024-03-15")
            .field("status", "Active")
            .field("issuedBy", "Sensei Kato")
    }

    /// A student record.
    pub fn student(id: impl Into<String>) -> Self {
        Self::new(id)
            .field("name", "Aiko Tanaka")
            .field("email", "aiko@dojo.test")
            .field("beltLevel", "Yellow Belt")
            .field("joinDate", "2023-09-01")
    }

    /// An attendance entry.
    pub fn attendance(id: impl Into<String>, status: &str) -> Self {
        Self::new(id)
            .field("studentId", "S1")
            .field("studentName", "Aiko Tanaka")
            .field("date", "2024-05-20")
            .field("status", status)
    }

    /// A fee record.
    pub fn fee(id: impl Into<String>, amount: f64, status: &str) -> Self {
        Self::new(id)
            .field("studentId", "S1")
            .field("description", "Monthly Fee")
            .field("amount", amount)
            .field("dueDate", "2024-06-01")
            .field("status", status)
    }

    /// An event on `date`.
    pub fn event(id: impl Into<String>, date: &str) -> Self {
        Self::new(id)
            .field("title", "Spring Tournament")
            .field("date", date)
            .field("location", "City Arena")
    }

    /// Set a field.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Build the JSON object.
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// Serialized success envelope with `records` under `data.<key>`, for
/// mockito bodies.
pub fn list_body(key: &str, records: Vec<Value>) -> String {
    json!({ "status": "success", "data": { key: records } }).to_string()
}
