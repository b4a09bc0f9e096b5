//! JSON output formatting

use chrono::Utc;
use dojo_client::Provenance;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Where the data came from, when it came through a facade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Provenance>,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T, source: Option<Provenance>) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                source,
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data, None))
}

/// Format facade data as pretty-printed JSON, recording its provenance
pub fn format_sourced_json<T: Serialize + ?Sized>(
    data: &T,
    source: Provenance,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data, Some(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Clone)]
    struct TestItem {
        id: String,
        name: String,
    }

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new(vec!["item1", "item2"], None);

        assert_eq!(output.data, vec!["item1", "item2"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_basic() {
        let items = vec![TestItem {
            id: "1".to_string(),
            name: "Test".to_string(),
        }];

        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"id\": \"1\""));
        assert!(result.contains("\"timestamp\""));
        assert!(!result.contains("\"source\""));
    }

    #[test]
    fn test_format_sourced_json() {
        let items: Vec<TestItem> = vec![];
        let result = format_sourced_json(&items, Provenance::MockData).unwrap();

        assert!(result.contains("\"data\": []"));
        assert!(result.contains("\"source\": \"mock_data\""));
    }
}
