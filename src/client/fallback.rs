//! Fallback stages for one logical call
//!
//! ```text
//! Attempt(Authenticated) --ok--> Done(Authenticated)
//!        | 401 (public path known)      | unreachable
//!        v                              v
//! Attempt(Public) --unreachable--> AlternateHost(route) --ok--> Done(route)
//!        |ok                            | anything else
//!        v                              v
//!   Done(Public)                     Exhausted
//! ```
//!
//! [`next_stage`] is a pure function so every path can be tested without a
//! network.

use serde::Serialize;

use crate::error::ApiError;

/// Which path variant served a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// The authenticated path, with the bearer token if one is stored
    Authenticated,
    /// The public counterpart, without a token
    Public,
}

/// Where a call currently is in its fallback sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Retried attempts against the current base URL
    Attempt(Route),
    /// One attempt against a freshly resolved, different base URL
    AlternateHost(Route),
    /// A response was received
    Done(Route),
    /// Every option failed; the last error surfaces
    Exhausted,
}

/// Classified result of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// HTTP 401
    AuthRejected,
    /// Timeout, transport failure, 5xx or 429 that survived retries
    Transient,
    /// Anything retrying cannot fix
    Failed,
}

impl Outcome {
    pub fn of(error: &ApiError) -> Self {
        match error {
            ApiError::Authentication => Outcome::AuthRejected,
            e if e.is_retryable() => Outcome::Transient,
            _ => Outcome::Failed,
        }
    }
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done(_) | Stage::Exhausted)
    }
}

/// Transition function. `has_public` says whether the endpoint has a
/// public counterpart.
pub fn next_stage(stage: Stage, outcome: Outcome, has_public: bool) -> Stage {
    use Outcome::*;
    use Route::*;
    use Stage::*;

    match (stage, outcome) {
        (Done(_) | Exhausted, _) => stage,

        (Attempt(route) | AlternateHost(route), Success) => Done(route),

        (Attempt(Authenticated) | AlternateHost(Authenticated), AuthRejected) if has_public => {
            Attempt(Public)
        }
        (_, AuthRejected) => Exhausted,

        (Attempt(route), Transient) => AlternateHost(route),
        (AlternateHost(_), Transient) => Exhausted,

        (_, Failed) => Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(outcomes: &[Outcome], has_public: bool) -> Vec<Stage> {
        let mut stage = Stage::Attempt(Route::Authenticated);
        let mut trail = vec![stage];
        for outcome in outcomes {
            stage = next_stage(stage, *outcome, has_public);
            trail.push(stage);
        }
        trail
    }

    #[test]
    fn test_direct_success() {
        assert_eq!(
            run(&[Outcome::Success], true).last(),
            Some(&Stage::Done(Route::Authenticated))
        );
    }

    #[test]
    fn test_401_goes_public() {
        assert_eq!(
            run(&[Outcome::AuthRejected, Outcome::Success], true),
            vec![
                Stage::Attempt(Route::Authenticated),
                Stage::Attempt(Route::Public),
                Stage::Done(Route::Public),
            ]
        );
    }

    #[test]
    fn test_401_without_public_is_exhausted() {
        assert_eq!(
            run(&[Outcome::AuthRejected], false).last(),
            Some(&Stage::Exhausted)
        );
    }

    #[test]
    fn test_public_rejected_is_exhausted() {
        assert_eq!(
            run(&[Outcome::AuthRejected, Outcome::AuthRejected], true).last(),
            Some(&Stage::Exhausted)
        );
    }

    #[test]
    fn test_public_unreachable_tries_alternate_host() {
        assert_eq!(
            run(
                &[Outcome::AuthRejected, Outcome::Transient, Outcome::Success],
                true
            ),
            vec![
                Stage::Attempt(Route::Authenticated),
                Stage::Attempt(Route::Public),
                Stage::AlternateHost(Route::Public),
                Stage::Done(Route::Public),
            ]
        );
    }

    #[test]
    fn test_alternate_host_failure_is_exhausted() {
        assert_eq!(
            run(&[Outcome::Transient, Outcome::Transient], true).last(),
            Some(&Stage::Exhausted)
        );
    }

    #[test]
    fn test_alternate_host_401_goes_public_once() {
        assert_eq!(
            run(
                &[
                    Outcome::Transient,
                    Outcome::AuthRejected,
                    Outcome::Transient,
                    Outcome::Transient
                ],
                true
            ),
            vec![
                Stage::Attempt(Route::Authenticated),
                Stage::AlternateHost(Route::Authenticated),
                Stage::Attempt(Route::Public),
                Stage::AlternateHost(Route::Public),
                Stage::Exhausted,
            ]
        );
    }

    #[test]
    fn test_hard_failure_is_exhausted() {
        assert_eq!(run(&[Outcome::Failed], true).last(), Some(&Stage::Exhausted));
    }

    #[test]
    fn test_every_sequence_terminates() {
        let outcomes = [
            Outcome::Success,
            Outcome::AuthRejected,
            Outcome::Transient,
            Outcome::Failed,
        ];
        // Any sequence of non-success outcomes reaches a terminal stage
        // within four transitions.
        for a in outcomes {
            for b in outcomes {
                for c in outcomes {
                    for d in outcomes {
                        for has_public in [true, false] {
                            let trail = run(&[a, b, c, d], has_public);
                            assert!(
                                trail.last().unwrap().is_terminal(),
                                "{:?} did not terminate",
                                trail
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(Outcome::of(&ApiError::Authentication), Outcome::AuthRejected);
        assert_eq!(Outcome::of(&ApiError::Timeout), Outcome::Transient);
        assert_eq!(
            Outcome::of(&ApiError::Http {
                status: 502,
                message: String::new()
            }),
            Outcome::Transient
        );
        assert_eq!(
            Outcome::of(&ApiError::Http {
                status: 404,
                message: String::new()
            }),
            Outcome::Failed
        );
    }
}
