//! Mock backend for facade tests
//!
//! Scripts one response per endpoint and records every request, so facade
//! logic can be tested without sockets.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{ApiEnvelope, ApiRequest, DojoApi, Endpoint, Route, Routed};
use crate::error::{ApiError, ApiResult};

/// Mock API for testing.
///
/// # Example
/// ```ignore
/// let mock = MockDojoApi::new()
///     .with_data(Endpoint::Certificates, json!({ "certificates": [] }))
///     .await;
/// let routed = mock.call(ApiRequest::get(Endpoint::Certificates)).await?;
/// ```
#[derive(Default)]
pub struct MockDojoApi {
    /// Scripted responses keyed by endpoint
    responses: Arc<Mutex<HashMap<Endpoint, ApiResult<Routed<ApiEnvelope>>>>>,
    /// Error returned for every endpoint without a scripted response
    fallback_error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockDojoApi {
    /// Create a mock where every unscripted call fails with a transport error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `endpoint` with a success envelope on the authenticated route.
    pub async fn with_data(self, endpoint: Endpoint, data: Value) -> Self {
        self.with_envelope(endpoint, ApiEnvelope::success(data), Route::Authenticated)
            .await
    }

    /// Answer `endpoint` with a success envelope served by the public route.
    pub async fn with_public_data(self, endpoint: Endpoint, data: Value) -> Self {
        self.with_envelope(endpoint, ApiEnvelope::success(data), Route::Public)
            .await
    }

    /// Answer `endpoint` with an arbitrary envelope.
    pub async fn with_envelope(self, endpoint: Endpoint, envelope: ApiEnvelope, route: Route) -> Self {
        self.responses.lock().await.insert(
            endpoint,
            Ok(Routed {
                value: envelope,
                route,
                base_url: "http://mock".to_string(),
            }),
        );
        self
    }

    /// Fail `endpoint` with `error`.
    pub async fn with_error(self, endpoint: Endpoint, error: ApiError) -> Self {
        self.responses.lock().await.insert(endpoint, Err(error));
        self
    }

    /// Fail every unscripted endpoint with `error`.
    pub async fn failing_with(self, error: ApiError) -> Self {
        *self.fallback_error.lock().await = Some(error);
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<ApiRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Number of calls made to `endpoint`
    pub async fn calls_to(&self, endpoint: Endpoint) -> usize {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.endpoint == endpoint)
            .count()
    }
}

#[async_trait]
impl DojoApi for MockDojoApi {
    async fn call(&self, request: ApiRequest) -> ApiResult<Routed<ApiEnvelope>> {
        let endpoint = request.endpoint;
        self.captured_requests.lock().await.push(request);

        if let Some(response) = self.responses.lock().await.get(&endpoint) {
            return response.clone();
        }

        Err(self
            .fallback_error
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| ApiError::Transport("Failed to connect to API".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_scripted_and_unscripted_calls() {
        let mock = MockDojoApi::new()
            .with_data(Endpoint::Events, json!({ "events": [] }))
            .await;

        let ok = mock.call(ApiRequest::get(Endpoint::Events)).await.unwrap();
        assert_eq!(ok.route, Route::Authenticated);

        let err = mock.call(ApiRequest::get(Endpoint::Fees)).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));

        assert_eq!(mock.calls_to(Endpoint::Events).await, 1);
        assert_eq!(mock.captured_requests().await.len(), 2);
    }
}
