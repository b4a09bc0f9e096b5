//! Retry and fallback orchestration
//!
//! Drives one logical call through the stages in [`super::fallback`]:
//! retried attempts on the authenticated path, a public-path attempt after a
//! 401, and one attempt on an alternate host when the current one stops
//! answering. Sample data is the facades' business; the orchestrator only
//! ever returns a backend envelope or the last error.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;

use super::DojoApi;
use super::endpoint::EndpointPaths;
use super::envelope::ApiEnvelope;
use super::executor::RequestExecutor;
use super::fallback::{Outcome, Route, Stage, next_stage};
use super::request::ApiRequest;
use super::resolver::EndpointResolver;
use super::session::SessionStore;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// A value together with the route and host that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Routed<T> {
    pub value: T,
    pub route: Route,
    pub base_url: String,
}

impl<T> Routed<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Routed<U> {
        Routed {
            value: f(self.value),
            route: self.route,
            base_url: self.base_url,
        }
    }
}

/// The single entry point facades use to reach the backend.
#[derive(Debug)]
pub struct Orchestrator {
    config: Arc<Config>,
    resolver: Arc<EndpointResolver>,
    executor: RequestExecutor,
}

impl Orchestrator {
    pub fn new(
        config: Arc<Config>,
        session: Arc<SessionStore>,
        resolver: Arc<EndpointResolver>,
    ) -> ApiResult<Self> {
        let executor = RequestExecutor::new(config.timeout(), session)?;
        Ok(Self {
            config,
            resolver,
            executor,
        })
    }

    /// Run `request` through the fallback stages.
    pub async fn call(&self, request: ApiRequest) -> ApiResult<Routed<ApiEnvelope>> {
        let paths = self.config.paths(request.endpoint);
        let has_public = paths.public.is_some();

        let mut stage = Stage::Attempt(Route::Authenticated);
        let mut last_host = self.resolver.base_url();
        let mut last_error = ApiError::Transport("backend unreachable".to_string());

        loop {
            let (route, result, host) = match stage {
                Stage::Attempt(route) => {
                    let (result, host) = self.attempt(&request, route, &paths).await;
                    (route, result, host)
                }
                Stage::AlternateHost(route) => match self.alternate_host(&last_host).await {
                    Some(host) => {
                        info!("{}: trying alternate host {}", request.label(), host);
                        (route, self.send(&host, &request, route, &paths).await, host)
                    }
                    None => {
                        debug!("{}: no alternate host available", request.label());
                        return Err(last_error);
                    }
                },
                Stage::Done(_) | Stage::Exhausted => return Err(last_error),
            };
            last_host = host;

            let error = match result {
                Ok(envelope) => {
                    if route == Route::Public {
                        info!("{}: served by public endpoint", request.label());
                    }
                    return Ok(Routed {
                        value: envelope,
                        route,
                        base_url: last_host,
                    });
                }
                Err(error) => error,
            };

            let next = next_stage(stage, Outcome::of(&error), has_public);
            debug!("{}: {:?} -> {:?} ({})", request.label(), stage, next, error);

            match next {
                Stage::Exhausted => {
                    warn!("{}: all attempts failed: {}", request.label(), error);
                    return Err(error);
                }
                Stage::Attempt(Route::Public) => {
                    // One re-resolution before switching to the public path
                    self.resolver.resolve().await;
                }
                _ => {}
            }
            stage = next;
            last_error = error;
        }
    }

    /// Retried attempts against the current base URL. Returns the result of
    /// the last attempt and the host it was sent to.
    async fn attempt(
        &self,
        request: &ApiRequest,
        route: Route,
        paths: &EndpointPaths,
    ) -> (ApiResult<ApiEnvelope>, String) {
        let attempts = request.retries.unwrap_or(self.config.retries).max(1);
        let mut host = self.resolver.base_url();
        let mut attempt = 1;

        loop {
            let result = self.send(&host, request, route, paths).await;
            let error = match result {
                Ok(envelope) => return (Ok(envelope), host),
                Err(error) if !error.is_retryable() => return (Err(error), host),
                Err(error) => error,
            };

            warn!(
                "{}: attempt {}/{} against {} failed: {}",
                request.label(),
                attempt,
                attempts,
                host,
                error
            );

            // Report the host this attempt was sent to
            if attempt >= attempts {
                return (Err(error), host);
            }

            if matches!(error, ApiError::Transport(_)) {
                self.resolver.invalidate();
                match self.resolver.resolve().await {
                    Some(next) => host = next,
                    None => return (Err(error), host),
                }
            }

            let delay = self.config.retry_delay() * attempt;
            if !delay.is_zero() {
                debug!("{}: retrying in {:?}", request.label(), delay);
                tokio::time::sleep(delay).await;
            }
            attempt += 1;
        }
    }

    /// Resolve afresh and return the new host only if it differs from the
    /// one that just failed.
    async fn alternate_host(&self, failed_host: &str) -> Option<String> {
        self.resolver.invalidate();
        self.resolver
            .resolve()
            .await
            .filter(|host| host != failed_host)
    }

    /// One executor call for `route`
    async fn send(
        &self,
        host: &str,
        request: &ApiRequest,
        route: Route,
        paths: &EndpointPaths,
    ) -> ApiResult<ApiEnvelope> {
        match route {
            Route::Authenticated => {
                self.executor
                    .execute(host, &paths.authenticated, request)
                    .await
            }
            Route::Public => {
                let path = paths.public.as_deref().ok_or_else(|| {
                    ApiError::InvalidResponse(format!(
                        "{:?} has no public endpoint",
                        request.endpoint
                    ))
                })?;
                let public = request.clone().skip_auth();
                self.executor.execute(host, path, &public).await
            }
        }
    }
}

#[async_trait]
impl DojoApi for Orchestrator {
    async fn call(&self, request: ApiRequest) -> ApiResult<Routed<ApiEnvelope>> {
        Orchestrator::call(self, request).await
    }
}
