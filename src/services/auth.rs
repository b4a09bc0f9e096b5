//! Authentication facade
//!
//! Unlike the read-only facades, login and profile updates surface their
//! errors: a wrong password has to reach the user.

use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::Value;

use super::{Provenance, Sourced, samples};
use crate::client::{ApiEnvelope, ApiRequest, DojoApi, Endpoint, SessionStore};
use crate::error::{ApiError, ApiResult, Error, Result};
use crate::models::{Credentials, UserRecord};

pub struct AuthService {
    api: Arc<dyn DojoApi>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<dyn DojoApi>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    /// Sign in and store the returned token and user.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserRecord> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(Error::Other("Email and password are required".to_string()));
        }

        let request = ApiRequest::post(Endpoint::Login)
            .json(credentials)
            .context("login");
        let envelope = self.api.call(request).await?.value;

        let token = envelope
            .data_field("token")?
            .as_str()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::InvalidResponseShape("data.token is not a string".into()))?
            .to_string();
        let mut user = parse_user(envelope.data_field("user")?)?;

        // The session owns the token; the record keeps server fields only
        user.token = None;
        self.session.save_token(token);
        self.session.save_user_data(user.clone());
        info!("Signed in as {}", user.display_name());

        Ok(user)
    }

    /// Tell the backend the session is over, then forget it locally.
    ///
    /// The local session is cleared even if the backend cannot be reached.
    pub async fn logout(&self) {
        if self.session.is_authenticated() {
            let request = ApiRequest::post(Endpoint::Logout)
                .retries(1)
                .context("logout");
            if let Err(e) = self.api.call(request).await {
                warn!("Logout request failed, clearing local session anyway: {}", e);
            }
        }
        self.session.clear_all_data();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Current user profile.
    ///
    /// Falls back to the record stored at login, then to a guest profile.
    pub async fn profile(&self) -> Sourced<UserRecord> {
        let request = ApiRequest::get(Endpoint::Profile).context("profile");
        match self.fetch_user(request).await {
            Ok(sourced) => sourced,
            Err(e) => match self.session.user_data() {
                Some(user) => {
                    debug!("profile: using stored user record ({})", e);
                    Sourced::new(user, Provenance::Session)
                }
                None => {
                    warn!("profile: using sample profile ({})", e);
                    Sourced::samples(samples::profile())
                }
            },
        }
    }

    /// Send profile changes and refresh the stored record.
    pub async fn update_profile(&self, changes: &Value) -> Result<UserRecord> {
        let request = ApiRequest::put(Endpoint::Profile)
            .json(changes)
            .retries(1)
            .context("update profile");
        let user = self.fetch_user(request).await?.data;
        if self.session.is_authenticated() {
            self.session.save_user_data(user.clone());
        }
        Ok(user)
    }

    async fn fetch_user(&self, request: ApiRequest) -> ApiResult<Sourced<UserRecord>> {
        let routed = self.api.call(request).await?;
        let user = parse_user(user_payload(&routed.value)?)?;
        Ok(Sourced::new(user, routed.route.into()))
    }
}

/// `data.user` when present, else `data` itself
fn user_payload(envelope: &ApiEnvelope) -> ApiResult<&Value> {
    let data = envelope.data()?;
    Ok(data.get("user").filter(|u| u.is_object()).unwrap_or(data))
}

fn parse_user(raw: &Value) -> ApiResult<UserRecord> {
    if !raw.is_object() {
        return Err(ApiError::InvalidResponseShape("user is not an object".to_string()));
    }
    serde_json::from_value(raw.clone())
        .map_err(|e| ApiError::InvalidResponseShape(format!("user: {e}")))
}
