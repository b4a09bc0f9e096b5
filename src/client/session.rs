//! In-memory session state
//!
//! Holds the bearer token and the signed-in user for the lifetime of the
//! process. Nothing is persisted; a restart starts unauthenticated.

use std::sync::{PoisonError, RwLock};

use log::{debug, warn};

use crate::models::UserRecord;

/// Token and user record for the current session.
///
/// Reads never panic: a poisoned lock is logged and treated as empty.
/// Writes recover the lock so clearing the session always succeeds.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<String>>,
    user: RwLock<Option<UserRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token, replacing any previous one
    pub fn save_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(token.into());
        self.token.clear_poison();
    }

    /// Current token, or `None` when signed out or unreadable
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone().filter(|t| !t.is_empty()),
            Err(_) => {
                warn!("Session token unreadable, treating session as signed out");
                None
            }
        }
    }

    /// Forget the token. Safe to call when no token is stored.
    pub fn remove_token(&self) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            debug!("Session token removed");
        }
        self.token.clear_poison();
    }

    /// Store the user record. A token embedded in the record is saved too.
    pub fn save_user_data(&self, user: UserRecord) {
        if let Some(token) = user.token.as_deref().filter(|t| !t.is_empty()) {
            self.save_token(token);
        }
        let mut guard = self.user.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(user);
        self.user.clear_poison();
    }

    /// Stored user record.
    ///
    /// A record without a token is left over from a broken session; it is
    /// purged and `None` is returned.
    pub fn user_data(&self) -> Option<UserRecord> {
        let user = match self.user.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                warn!("Session user unreadable, treating session as signed out");
                return None;
            }
        };
        if user.is_some() && self.token().is_none() {
            warn!("User record present without a token, purging");
            self.remove_user();
            return None;
        }
        user
    }

    /// Whether a non-empty token is present
    pub fn is_authenticated(&self) -> bool {
        let authenticated = self.token().is_some();
        if !authenticated {
            // Drop any orphaned user record
            let _ = self.user_data();
        }
        authenticated
    }

    /// Forget both token and user record.
    ///
    /// The token goes first, so the session reads as signed out even if
    /// removing the user record runs into a poisoned lock.
    pub fn clear_all_data(&self) {
        self.remove_token();
        self.remove_user();
        debug!("Session cleared");
    }

    fn remove_user(&self) {
        let mut guard = self.user.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
        self.user.clear_poison();
    }
}
