//! Single-attempt HTTP request execution
//!
//! Builds the HTTP request, attaches the bearer token, and classifies the
//! response into an envelope or an [`ApiError`]. There are no retries here.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, StatusCode};

use super::envelope::ApiEnvelope;
use super::request::ApiRequest;
use super::session::SessionStore;
use crate::error::{ApiError, ApiResult};

/// Sends one request against one base URL.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    http: HttpClient,
    session: Arc<SessionStore>,
}

impl RequestExecutor {
    /// Create an executor whose requests time out after `timeout`
    pub fn new(timeout: Duration, session: Arc<SessionStore>) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self { http, session })
    }

    /// Execute `request` at `{base_url}{path}`.
    ///
    /// A 401 purges the stored token before returning
    /// [`ApiError::Authentication`].
    pub async fn execute(
        &self,
        base_url: &str,
        path: &str,
        request: &ApiRequest,
    ) -> ApiResult<ApiEnvelope> {
        let url = join_url(base_url, path);
        debug!("{} {} ({})", request.method, url, request.label());

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if !request.skip_auth
            && let Some(token) = self.session.token()
        {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if request.has_body_method()
            && let Some(body) = &request.body
        {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to encode body: {}", e)))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await.map_err(|e| {
            let err = ApiError::from(e);
            warn!("{} failed before a response: {}", request.label(), err);
            err
        })?;

        let status = response.status();
        if status.is_success() {
            let text = response.text().await.map_err(ApiError::from)?;
            return serde_json::from_str::<ApiEnvelope>(&text).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            });
        }

        if status == StatusCode::UNAUTHORIZED {
            warn!("{} rejected with 401, discarding token", request.label());
            self.session.remove_token();
            return Err(ApiError::Authentication);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_string()
        });
        debug!("{} returned {}: {}", request.label(), status, message);

        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

/// Join a base URL and a rooted path without doubling the slash
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Pull a human-readable message out of an error body, if it has one
fn error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .or_else(|| json.get("error"))
            .and_then(|m| m.as_str())
            .map(str::to_string),
        Err(_) => Some(body.trim().chars().take(200).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Endpoint;
    use mockito::Matcher;
    use serde_json::json;

    fn executor(session: Arc<SessionStore>) -> RequestExecutor {
        RequestExecutor::new(Duration::from_millis(500), session).unwrap()
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h/api/", "/students"), "http://h/api/students");
        assert_eq!(join_url("http://h/api", "students"), "http://h/api/students");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"status":"error","message":"Not found"}"#).as_deref(),
            Some("Not found")
        );
        assert_eq!(error_message("plain text").as_deref(), Some("plain text"));
        assert_eq!(error_message(""), None);
    }

    #[tokio::test]
    async fn test_attaches_bearer_and_content_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/certificates")
            .match_header("authorization", "Bearer tok1")
            .match_header("content-type", "application/json")
            .match_query(Matcher::UrlEncoded("studentId".into(), "S1".into()))
            .with_status(200)
            .with_body(r#"{"status":"success","data":{"certificates":[]}}"#)
            .create_async()
            .await;

        let session = Arc::new(SessionStore::new());
        session.save_token("tok1");
        let request = ApiRequest::get(Endpoint::Certificates).query("studentId", "S1");

        let envelope = executor(session)
            .execute(&server.url(), "/certificates", &request)
            .await
            .unwrap();

        assert!(envelope.is_success());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_skip_auth_omits_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/certificates/public")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"status":"success","data":{}}"#)
            .create_async()
            .await;

        let session = Arc::new(SessionStore::new());
        session.save_token("tok1");
        let request = ApiRequest::get(Endpoint::Certificates).skip_auth();

        executor(session)
            .execute(&server.url(), "/certificates/public", &request)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/certificates/verify")
            .match_body(Matcher::Json(json!({ "certificateId": "C1" })))
            .with_status(200)
            .with_body(r#"{"status":"success","data":{"valid":true}}"#)
            .create_async()
            .await;

        let request = ApiRequest::post(Endpoint::VerifyCertificate)
            .json(&json!({ "certificateId": "C1" }));
        executor(Arc::new(SessionStore::new()))
            .execute(&server.url(), "/certificates/verify", &request)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_401_purges_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/students")
            .with_status(401)
            .create_async()
            .await;

        let session = Arc::new(SessionStore::new());
        session.save_token("stale");
        let result = executor(Arc::clone(&session))
            .execute(&server.url(), "/students", &ApiRequest::get(Endpoint::Students))
            .await;

        assert_eq!(result.unwrap_err(), ApiError::Authentication);
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_http_error_carries_status_and_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/fees")
            .with_status(503)
            .with_body(r#"{"status":"error","message":"Maintenance"}"#)
            .create_async()
            .await;

        let result = executor(Arc::new(SessionStore::new()))
            .execute(&server.url(), "/fees", &ApiRequest::get(Endpoint::Fees))
            .await;

        assert_eq!(
            result.unwrap_err(),
            ApiError::Http {
                status: 503,
                message: "Maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_success_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/events")
            .with_status(200)
            .with_body("<html>captive portal</html>")
            .create_async()
            .await;

        let result = executor(Arc::new(SessionStore::new()))
            .execute(&server.url(), "/events", &ApiRequest::get(Endpoint::Events))
            .await;

        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener to get a port nobody is listening on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let result = executor(Arc::new(SessionStore::new()))
            .execute(
                &format!("http://127.0.0.1:{port}"),
                "/events",
                &ApiRequest::get(Endpoint::Events),
            )
            .await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let executor = RequestExecutor::new(
            Duration::from_millis(150),
            Arc::new(SessionStore::new()),
        )
        .unwrap();
        let result = executor
            .execute(
                &format!("http://{addr}"),
                "/events",
                &ApiRequest::get(Endpoint::Events),
            )
            .await;

        assert_eq!(result.unwrap_err(), ApiError::Timeout);
    }
}
