//! Session context
//!
//! Owns the shared pieces of one client session: configuration, token store,
//! endpoint resolver and orchestrator. Facades are built from it on demand
//! and share its state through `Arc`s.

use std::sync::Arc;

use crate::client::{DojoApi, EndpointResolver, Orchestrator, SessionStore};
use crate::config::Config;
use crate::error::Result;
use crate::models::DateContext;
use crate::services::{
    AttendanceService, AuthService, BeltService, CertificateService, Dashboard, EventService,
    FeeService, StudentService,
};

/// Everything one session of the client needs.
///
/// # Example
/// ```ignore
/// let ctx = SessionContext::new(Config::load_at(None)?)?;
/// let certificates = ctx.certificates().certificates().await;
/// ```
pub struct SessionContext {
    pub config: Arc<Config>,
    pub session: Arc<SessionStore>,
    pub resolver: Arc<EndpointResolver>,
    api: Arc<dyn DojoApi>,
}

impl SessionContext {
    /// Build a fresh, signed-out session for `config`.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let session = Arc::new(SessionStore::new());
        let resolver = Arc::new(EndpointResolver::new(Arc::clone(&config))?);
        let orchestrator =
            Orchestrator::new(Arc::clone(&config), Arc::clone(&session), Arc::clone(&resolver))?;

        Ok(Self {
            config,
            session,
            resolver,
            api: Arc::new(orchestrator),
        })
    }

    /// Backend access shared by every facade
    pub fn api(&self) -> Arc<dyn DojoApi> {
        Arc::clone(&self.api)
    }

    /// Today's date with the configured output format
    pub fn dates(&self) -> DateContext {
        DateContext::now(self.config.date_format.clone())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.api(), Arc::clone(&self.session))
    }

    pub fn certificates(&self) -> CertificateService {
        CertificateService::new(self.api(), self.dates())
    }

    pub fn students(&self) -> StudentService {
        StudentService::new(self.api(), self.dates())
    }

    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(self.api(), self.dates())
    }

    pub fn fees(&self) -> FeeService {
        FeeService::new(self.api(), self.dates())
    }

    pub fn events(&self) -> EventService {
        EventService::new(self.api(), self.dates())
    }

    pub fn belts(&self) -> BeltService {
        BeltService::new(self.api(), self.dates())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            certificates: self.certificates(),
            attendance: self.attendance(),
            fees: self.fees(),
            events: self.events(),
            belts: self.belts(),
        }
    }
}
