//! Request description passed down to the executor

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::endpoint::Endpoint;

/// One logical backend call.
///
/// # Example
/// ```ignore
/// let request = ApiRequest::get(Endpoint::Attendance)
///     .query("studentId", "S1")
///     .context("attendance");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: Endpoint,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Send without the bearer token even if one is stored
    pub skip_auth: bool,
    /// Attempt budget; `None` uses the configured default
    pub retries: Option<u32>,
    /// Label used in log lines
    pub context: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            endpoint,
            query: Vec::new(),
            body: None,
            skip_auth: !endpoint.requires_auth(),
            retries: None,
            context: None,
        }
    }

    pub fn get(endpoint: Endpoint) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: Endpoint) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn put(endpoint: Endpoint) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    /// Add a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a query parameter when a value is present
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body. Serialization failures leave the body empty.
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        self.body = serde_json::to_value(body).ok();
        self
    }

    pub fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Whether the method carries a body
    pub fn has_body_method(&self) -> bool {
        matches!(self.method, Method::POST | Method::PUT | Method::PATCH)
    }

    /// Label for log lines: the context, or `METHOD endpoint`
    pub fn label(&self) -> String {
        self.context
            .clone()
            .unwrap_or_else(|| format!("{} {:?}", self.method, self.endpoint))
    }
}
