//! Logical backend endpoints
//!
//! Every path the client talks to is named here. Endpoints that require a
//! bearer token may have a public counterpart that serves a reduced view of
//! the same data without authentication.

use serde::{Deserialize, Serialize};

/// Closed set of logical endpoints exposed by the academy backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Login,
    Logout,
    Profile,
    Students,
    Certificates,
    VerifyCertificate,
    Events,
    Attendance,
    Fees,
    BeltLevels,
    BeltPromotions,
    BeltTests,
    Health,
}

impl Endpoint {
    /// All endpoints, in table order.
    pub const ALL: [Endpoint; 13] = [
        Endpoint::Login,
        Endpoint::Logout,
        Endpoint::Profile,
        Endpoint::Students,
        Endpoint::Certificates,
        Endpoint::VerifyCertificate,
        Endpoint::Events,
        Endpoint::Attendance,
        Endpoint::Fees,
        Endpoint::BeltLevels,
        Endpoint::BeltPromotions,
        Endpoint::BeltTests,
        Endpoint::Health,
    ];

    /// Default path of the endpoint, relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "/auth/login",
            Endpoint::Logout => "/auth/logout",
            Endpoint::Profile => "/auth/profile",
            Endpoint::Students => "/students",
            Endpoint::Certificates => "/certificates",
            Endpoint::VerifyCertificate => "/certificates/verify",
            Endpoint::Events => "/events",
            Endpoint::Attendance => "/attendance",
            Endpoint::Fees => "/fees",
            Endpoint::BeltLevels => "/belts/levels",
            Endpoint::BeltPromotions => "/belts/promotions",
            Endpoint::BeltTests => "/belts/tests",
            Endpoint::Health => "/health",
        }
    }

    /// Default path of the unauthenticated counterpart, if the backend has one.
    pub fn public_path(&self) -> Option<&'static str> {
        match self {
            Endpoint::Students => Some("/students/public"),
            Endpoint::Certificates => Some("/certificates/public"),
            Endpoint::Events => Some("/events/public"),
            Endpoint::Attendance => Some("/attendance/public"),
            Endpoint::BeltLevels => Some("/belts/levels-public"),
            Endpoint::BeltPromotions => Some("/belts/promotions-public"),
            Endpoint::BeltTests => Some("/belts/tests-public"),
            _ => None,
        }
    }

    /// Whether calls to this endpoint carry the bearer token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Health)
    }
}

/// Concrete paths for one logical endpoint after config overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPaths {
    /// Path used with the bearer token
    pub authenticated: String,
    /// Path used without a token when the authenticated call is rejected
    pub public: Option<String>,
}

impl From<Endpoint> for EndpointPaths {
    fn from(endpoint: Endpoint) -> Self {
        Self {
            authenticated: endpoint.path().to_string(),
            public: endpoint.public_path().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_counterparts() {
        assert_eq!(
            Endpoint::Students.public_path(),
            Some("/students/public")
        );
        assert_eq!(
            Endpoint::BeltTests.public_path(),
            Some("/belts/tests-public")
        );
        assert_eq!(Endpoint::Fees.public_path(), None);
        assert_eq!(Endpoint::VerifyCertificate.public_path(), None);
        assert_eq!(Endpoint::Login.public_path(), None);
    }

    #[test]
    fn test_auth_requirements() {
        assert!(!Endpoint::Login.requires_auth());
        assert!(!Endpoint::Health.requires_auth());
        assert!(Endpoint::Logout.requires_auth());
        assert!(Endpoint::Certificates.requires_auth());
    }

    #[test]
    fn test_paths_are_rooted_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for endpoint in Endpoint::ALL {
            assert!(endpoint.path().starts_with('/'));
            assert!(seen.insert(endpoint.path()), "duplicate {:?}", endpoint);
        }
    }

    #[test]
    fn test_endpoint_names_deserialize() {
        let endpoint: Endpoint = serde_yaml::from_str("belt_levels").unwrap();
        assert_eq!(endpoint, Endpoint::BeltLevels);
    }
}
