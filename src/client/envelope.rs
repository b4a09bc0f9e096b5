//! Response envelope shared by every backend endpoint
//!
//! ```json
//! { "status": "success", "data": { ... }, "message": "optional" }
//! ```
//!
//! The executor hands envelopes back as received. Callers decide what a
//! valid envelope means for them via [`ApiEnvelope::data`] and
//! [`ApiEnvelope::records`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Envelope status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

/// Raw backend response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: Option<EnvelopeStatus>,

    #[serde(default)]
    pub data: Option<Value>,

    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    /// Build a success envelope around `data`
    pub fn success(data: Value) -> Self {
        Self {
            status: Some(EnvelopeStatus::Success),
            data: Some(data),
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(EnvelopeStatus::Success)
    }

    /// The `data` payload of a success envelope.
    pub fn data(&self) -> ApiResult<&Value> {
        if !self.is_success() {
            return Err(ApiError::InvalidResponseShape(format!(
                "status is not \"success\"{}",
                self.message
                    .as_deref()
                    .map(|m| format!(": {m}"))
                    .unwrap_or_default()
            )));
        }
        match &self.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(ApiError::InvalidResponseShape("missing data".to_string())),
        }
    }

    /// A required key under `data`.
    pub fn data_field(&self, key: &str) -> ApiResult<&Value> {
        self.data()?
            .get(key)
            .filter(|value| !value.is_null())
            .ok_or_else(|| ApiError::InvalidResponseShape(format!("missing data.{key}")))
    }

    /// The record list for a collection endpoint.
    ///
    /// Accepted shapes, in order:
    /// - `data.<key>` is an array
    /// - `data` itself is an array
    pub fn records(&self, key: &str) -> ApiResult<&[Value]> {
        let data = self.data()?;
        if let Some(Value::Array(items)) = data.get(key) {
            return Ok(items);
        }
        if let Value::Array(items) = data {
            return Ok(items);
        }
        Err(ApiError::InvalidResponseShape(format!(
            "data.{key} is missing or not a list"
        )))
    }
}
