//! Domain service facades
//!
//! Each facade turns backend envelopes into records and never hands an
//! error to the caller for reads: when every remote path fails, it returns
//! the bundled sample set for its domain and says so through [`Provenance`].

use std::fmt;

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiRequest, DojoApi, Route};
use crate::error::ApiResult;
use crate::models::DateContext;

pub mod attendance;
pub mod auth;
pub mod belts;
pub mod certificates;
pub mod dashboard;
pub mod events;
pub mod fees;
pub mod samples;
pub mod students;

pub use attendance::{AttendanceQuery, AttendanceService};
pub use auth::AuthService;
pub use belts::BeltService;
pub use certificates::CertificateService;
pub use dashboard::{Dashboard, DashboardData};
pub use events::EventService;
pub use fees::FeeService;
pub use students::StudentService;

/// Where a facade result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Authenticated backend endpoint
    Backend,
    /// Public backend endpoint after the authenticated one refused
    PublicApi,
    /// Copy kept in the session from an earlier login
    Session,
    /// Bundled sample records
    MockData,
}

impl Provenance {
    pub fn is_sample(&self) -> bool {
        matches!(self, Provenance::MockData)
    }
}

impl From<Route> for Provenance {
    fn from(route: Route) -> Self {
        match route {
            Route::Authenticated => Provenance::Backend,
            Route::Public => Provenance::PublicApi,
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Provenance::Backend => "backend",
            Provenance::PublicApi => "public_api",
            Provenance::Session => "session",
            Provenance::MockData => "mock_data",
        };
        f.write_str(label)
    }
}

/// Facade result tagged with its provenance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub data: T,
    pub source: Provenance,
}

impl<T> Sourced<T> {
    pub fn new(data: T, source: Provenance) -> Self {
        Self { data, source }
    }

    pub fn samples(data: T) -> Self {
        Self::new(data, Provenance::MockData)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            data: f(self.data),
            source: self.source,
        }
    }
}

/// Record normalizer signature shared by every model
pub type Normalize<T> = fn(&Value, &DateContext) -> T;

/// Fetch a record list, normalize it, and fall back to `samples` on any
/// failure.
pub(crate) async fn fetch_list<T>(
    api: &dyn DojoApi,
    request: ApiRequest,
    key: &str,
    dates: &DateContext,
    normalize: Normalize<T>,
    samples: fn(&DateContext) -> Vec<T>,
) -> Sourced<Vec<T>> {
    let label = request.label();
    match try_fetch_list(api, request, key, dates, normalize).await {
        Ok(sourced) => {
            debug!("{}: {} records from {}", label, sourced.data.len(), sourced.source);
            sourced
        }
        Err(e) => {
            warn!("{}: using sample data ({})", label, e);
            Sourced::samples(samples(dates))
        }
    }
}

async fn try_fetch_list<T>(
    api: &dyn DojoApi,
    request: ApiRequest,
    key: &str,
    dates: &DateContext,
    normalize: Normalize<T>,
) -> ApiResult<Sourced<Vec<T>>> {
    let routed = api.call(request).await?;
    let records = routed
        .value
        .records(key)?
        .iter()
        .map(|raw| normalize(raw, dates))
        .collect();
    Ok(Sourced::new(records, routed.route.into()))
}
