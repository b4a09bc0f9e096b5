//! Dojo client - API client for the martial-arts academy management backend
//!
//! The crate resolves a reachable backend, authenticates requests, retries
//! transient failures, falls back to public endpoints when a token is
//! rejected, and finally substitutes bundled sample data so callers always
//! have something to render.

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod services;

pub use client::{ApiRequest, DojoApi, Endpoint, Orchestrator, SessionStore};
pub use config::Config;
pub use context::SessionContext;
pub use error::{ApiError, ApiResult, Error, Result};
pub use services::{Provenance, Sourced};
