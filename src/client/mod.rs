//! Academy backend client
//!
//! Layers, leaf first: [`SessionStore`] holds the token, [`EndpointResolver`]
//! finds a reachable host, [`RequestExecutor`] sends one request, and
//! [`Orchestrator`] adds retries and the public/alternate-host fallbacks.

use async_trait::async_trait;

pub mod endpoint;
pub mod envelope;
pub mod executor;
pub mod fallback;
pub mod orchestrator;
pub mod request;
pub mod resolver;
pub mod session;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;

pub use endpoint::{Endpoint, EndpointPaths};
pub use envelope::{ApiEnvelope, EnvelopeStatus};
pub use executor::RequestExecutor;
pub use fallback::{Route, Stage};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockDojoApi;
pub use orchestrator::{Orchestrator, Routed};
pub use request::ApiRequest;
pub use resolver::EndpointResolver;
pub use session::SessionStore;

use crate::error::ApiResult;

/// Backend access as seen by the domain facades
#[async_trait]
pub trait DojoApi: Send + Sync {
    /// Send one logical request, with whatever retries and fallbacks the
    /// implementation applies.
    async fn call(&self, request: ApiRequest) -> ApiResult<Routed<ApiEnvelope>>;
}
