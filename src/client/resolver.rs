//! Working base URL discovery
//!
//! Probes candidate base URLs with a short health request and remembers the
//! first one that answers. The remembered URL is dropped whenever a request
//! through it fails at the transport level.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client as HttpClient;

use super::endpoint::Endpoint;
use super::executor::join_url;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Finds and caches a reachable backend base URL.
#[derive(Debug)]
pub struct EndpointResolver {
    http: HttpClient,
    config: Arc<Config>,
    working_url: Mutex<Option<String>>,
}

impl EndpointResolver {
    pub fn new(config: Arc<Config>) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            config,
            working_url: Mutex::new(None),
        })
    }

    /// The cached working URL, if any
    pub fn current(&self) -> Option<String> {
        self.working_url
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Base URL to use for the next request: the cached URL, else the primary
    pub fn base_url(&self) -> String {
        self.current()
            .unwrap_or_else(|| self.config.base_url.clone())
    }

    /// Forget the cached URL so the next resolution probes from scratch
    pub fn invalidate(&self) {
        let mut guard = self.working_url.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(url) = guard.take() {
            debug!("Dropping cached base URL {}", url);
        }
    }

    /// Candidate order: cached URL, primary, then fallbacks as listed.
    /// Duplicates are probed once.
    pub fn candidates(&self) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        let ordered = self
            .current()
            .into_iter()
            .chain(std::iter::once(self.config.base_url.clone()))
            .chain(self.config.fallback_urls.iter().cloned());
        for url in ordered {
            if !candidates.contains(&url) {
                candidates.push(url);
            }
        }
        candidates
    }

    /// Probe candidates in order and cache the first healthy one.
    ///
    /// Returns `None` when nothing answers; the cache is left empty.
    pub async fn resolve(&self) -> Option<String> {
        let candidates = self.candidates();
        self.invalidate();

        for candidate in candidates {
            if self.probe(&candidate).await {
                info!("Using backend {}", candidate);
                *self.working_url.lock().unwrap_or_else(PoisonError::into_inner) =
                    Some(candidate.clone());
                return Some(candidate);
            }
        }

        warn!("No backend answered a health check");
        None
    }

    /// One bounded health request against `base_url`
    async fn probe(&self, base_url: &str) -> bool {
        let path = self.config.paths(Endpoint::Health).authenticated;
        let url = join_url(base_url, &path);
        let timeout: Duration = self.config.health_timeout();

        match self.http.get(&url).timeout(timeout).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!("Health check {} returned {}", url, response.status());
                false
            }
            Err(e) => {
                debug!("Health check {} failed: {}", url, ApiError::from(e));
                false
            }
        }
    }
}
