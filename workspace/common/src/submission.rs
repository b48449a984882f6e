//! Per-panel submission state machine.
//!
//! `Idle -> Submitting -> (Succeeded | Failed)`, back to `Idle` on the next field
//! edit, or straight to `Submitting` on a re-submit. Only one request may be in
//! flight per panel: `begin` refuses while `Submitting`.

use serde_json::Value;
use thiserror::Error;

use crate::error::ApiError;
use crate::outcome::service_error;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState<T> {
    #[default]
    Idle,
    Submitting,
    Succeeded(T),
    Failed(String),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a request is already in flight")]
    InFlight,
}

impl<T> SubmissionState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin(&mut self) -> Result<(), SubmitRejected> {
        if self.is_submitting() {
            tracing::debug!("Submission rejected: request already in flight");
            return Err(SubmitRejected::InFlight);
        }
        *self = Self::Submitting;
        Ok(())
    }

    pub fn succeed(&mut self, payload: T) {
        if !self.is_submitting() {
            tracing::warn!("Ignoring result for a panel that is not submitting");
            return;
        }
        *self = Self::Succeeded(payload);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        if !self.is_submitting() {
            tracing::warn!("Ignoring failure for a panel that is not submitting");
            return;
        }
        *self = Self::Failed(message.into());
    }

    /// A field edit discards a resolved result. An in-flight request is left alone.
    pub fn edit(&mut self) {
        if !self.is_submitting() {
            *self = Self::Idle;
        }
    }
}

impl SubmissionState<Value> {
    /// Settles a `Submitting` panel from the raw service outcome.
    ///
    /// A body carrying an `error` field is a service-side failure and is shown as
    /// such; every transport failure collapses to the panel's generic notice.
    pub fn resolve(&mut self, kind: SubmissionKind, outcome: Result<Value, ApiError>) {
        match outcome {
            Ok(body) => match service_error(&body) {
                Some(message) => {
                    tracing::warn!("{} rejected by service: {}", kind.endpoint(), message);
                    self.fail(message);
                }
                None => self.succeed(body),
            },
            Err(err) => {
                tracing::error!("{} failed: {}", kind.endpoint(), err);
                self.fail(kind.failure_message());
            }
        }
    }
}

/// Which form panel a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Analysis,
    Scenario,
}

impl SubmissionKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            SubmissionKind::Analysis => "/analysis",
            SubmissionKind::Scenario => "/simulate",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            SubmissionKind::Analysis => "Failed to fetch analysis. Please check your connection.",
            SubmissionKind::Scenario => "Failed to simulate scenario. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_happy_path() {
        let mut state = SubmissionState::<Value>::default();
        assert!(state.is_idle());

        state.begin().unwrap();
        assert!(state.is_submitting());

        state.resolve(SubmissionKind::Analysis, Ok(json!({"yield": 4000})));
        assert_eq!(state.payload(), Some(&json!({"yield": 4000})));
    }

    #[test]
    fn test_begin_rejected_while_in_flight() {
        let mut state = SubmissionState::<Value>::default();
        state.begin().unwrap();
        assert_eq!(state.begin(), Err(SubmitRejected::InFlight));
        assert!(state.is_submitting());
    }

    #[test]
    fn test_transport_failure_uses_generic_message() {
        let mut state = SubmissionState::<Value>::default();
        state.begin().unwrap();
        state.resolve(
            SubmissionKind::Scenario,
            Err(ApiError::Network("connection refused".to_string())),
        );
        assert_eq!(
            state.error(),
            Some("Failed to simulate scenario. Please try again.")
        );
    }

    #[test]
    fn test_service_error_field_is_a_failure() {
        let mut state = SubmissionState::<Value>::default();
        state.begin().unwrap();
        state.resolve(
            SubmissionKind::Analysis,
            Ok(json!({"error": "No model found for crop: Tea"})),
        );
        assert_eq!(state.error(), Some("No model found for crop: Tea"));
        assert!(state.payload().is_none());
    }

    #[test]
    fn test_falsy_error_field_keeps_the_result() {
        for body in [
            json!({"yield": 4000, "error": false}),
            json!({"yield": 4000, "error": ""}),
        ] {
            let mut state = SubmissionState::<Value>::default();
            state.begin().unwrap();
            state.resolve(SubmissionKind::Analysis, Ok(body.clone()));
            assert_eq!(state.error(), None, "body {}", body);
            assert_eq!(state.payload(), Some(&body));
        }
    }

    #[test]
    fn test_retry_after_failure() {
        let mut state = SubmissionState::<Value>::default();
        state.begin().unwrap();
        state.resolve(SubmissionKind::Analysis, Err(ApiError::Status(502)));
        assert!(state.error().is_some());

        state.begin().unwrap();
        assert!(state.is_submitting());
        state.resolve(SubmissionKind::Analysis, Ok(json!({"yield": 1})));
        assert!(state.payload().is_some());
    }

    #[test]
    fn test_edit_returns_to_idle_but_not_mid_flight() {
        let mut state = SubmissionState::<Value>::default();
        state.begin().unwrap();
        state.edit();
        assert!(state.is_submitting());

        state.resolve(SubmissionKind::Analysis, Ok(json!({})));
        state.edit();
        assert!(state.is_idle());
    }

    #[test]
    fn test_late_results_do_not_resurrect_idle_panel() {
        let mut state = SubmissionState::<Value>::default();
        state.succeed(json!({"yield": 1}));
        assert!(state.is_idle());
        state.fail("boom");
        assert!(state.is_idle());
    }
}
