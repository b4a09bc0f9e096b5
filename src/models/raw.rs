//! Lenient field access over loosely-typed backend JSON
//!
//! Backend records are not consistent about key names or value types: ids
//! arrive as numbers or strings, amounts as numbers or decimal strings, and
//! related records are sometimes nested (`student.name`) and sometimes flat
//! (`studentName`). Every lookup here takes an ordered list of accepted keys
//! and never fails; callers supply the default.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate};
use log::warn;
use serde_json::Value;

/// Look up the first present, non-null value among `keys`.
///
/// A key containing a dot (`student.name`) is resolved as a nested path.
pub fn field<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| {
            key.split('.')
                .try_fold(raw, |value, part| value.get(part))
        })
        .find(|value| !value.is_null())
}

/// Text value: strings are trimmed, numbers and booleans are rendered.
/// Empty strings count as absent.
pub fn text(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| field(raw, &[key]).and_then(scalar_text))
}

fn scalar_text(value: &Value) -> Option<String> {
    let rendered = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!rendered.is_empty()).then_some(rendered)
}

/// Text value with a default.
pub fn text_or(raw: &Value, keys: &[&str], default: &str) -> String {
    text(raw, keys).unwrap_or_else(|| default.to_string())
}

/// Numeric value: numbers, or strings that parse as a decimal.
pub fn number(raw: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match field(raw, &[key])? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    })
}

/// Boolean value: booleans, `"true"`/`"false"`/`"yes"`/`"no"`, or 0/1.
pub fn flag(raw: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| match field(raw, &[key])? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// List of strings: an array of scalars, or a single comma-separated string.
pub fn string_list(raw: &Value, keys: &[&str]) -> Vec<String> {
    match field(raw, keys) {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Date rendering for normalized records.
///
/// Holds "today" and the output format so normalization stays a pure
/// function of its inputs.
#[derive(Debug, Clone)]
pub struct DateContext {
    today: NaiveDate,
    format: String,
}

impl DateContext {
    pub fn new(today: NaiveDate, format: impl Into<String>) -> Self {
        Self {
            today,
            format: format.into(),
        }
    }

    /// Context for the current local date.
    pub fn now(format: impl Into<String>) -> Self {
        Self::new(chrono::Local::now().date_naive(), format)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Today rendered in the configured format.
    pub fn today_text(&self) -> String {
        self.render(self.today)
    }

    /// `date` in the configured format; ISO format if the pattern cannot
    /// be rendered.
    pub fn render(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.format)).is_err() {
            warn!("Cannot render dates as {:?}, using ISO format", self.format);
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }

    /// Parse a date in any accepted input form: RFC 3339 timestamps,
    /// `YYYY-MM-DD` (optionally followed by a time), or the configured format.
    pub fn parse(&self, input: &str) -> Option<NaiveDate> {
        let input = input.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
            return Some(ts.date_naive());
        }
        if let Some(prefix) = input.get(..10)
            && let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        {
            return Some(date);
        }
        NaiveDate::parse_from_str(input, &self.format).ok()
    }

    /// Date field rendered in the configured format.
    ///
    /// Missing or non-text values become today; unparseable text is kept
    /// verbatim so nothing the backend sent is silently lost.
    pub fn date_field(&self, raw: &Value, keys: &[&str]) -> String {
        match field(raw, keys) {
            Some(Value::String(s)) if !s.trim().is_empty() => self
                .parse(s)
                .map(|date| self.render(date))
                .unwrap_or_else(|| s.trim().to_string()),
            _ => self.today_text(),
        }
    }

    /// Optional date field; absent stays absent.
    pub fn optional_date_field(&self, raw: &Value, keys: &[&str]) -> Option<String> {
        match field(raw, keys) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(
                self.parse(s)
                    .map(|date| self.render(date))
                    .unwrap_or_else(|| s.trim().to_string()),
            ),
            _ => None,
        }
    }
}
