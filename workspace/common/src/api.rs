//! The seam between form panels and the yield service.
//!
//! The browser implements [`YieldApi`] over `fetch`; tests substitute a fake.
//! `submit_*` run one panel submission end to end: validate the draft, claim
//! the panel's single in-flight slot, call the service and settle the panel.

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::error::ApiError;
use crate::request::{AnalysisDraft, AnalysisRequest, FormError, ScenarioDraft, ScenarioRequest};
use crate::submission::{SubmissionKind, SubmissionState, SubmitRejected};

/// State of one form panel; the payload is the raw response body.
pub type PanelState = SubmissionState<Value>;

#[async_trait(?Send)]
pub trait YieldApi {
    /// `POST /analysis`
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, ApiError>;
    /// `POST /simulate`
    async fn simulate(&self, request: &ScenarioRequest) -> Result<Value, ApiError>;
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Rejected(#[from] SubmitRejected),
}

/// `on_change` is called after every state transition so the view can re-render.
pub async fn submit_analysis(
    api: &dyn YieldApi,
    panel: &RefCell<PanelState>,
    draft: &AnalysisDraft,
    on_change: &dyn Fn(),
) -> Result<(), SubmitError> {
    let request = draft.to_request()?;
    panel.borrow_mut().begin()?;
    on_change();

    tracing::info!(
        "Submitting analysis: {} / {} / {}",
        request.state,
        request.crop,
        request.year
    );
    let outcome = api.analyze(&request).await;
    panel.borrow_mut().resolve(SubmissionKind::Analysis, outcome);
    on_change();
    Ok(())
}

pub async fn submit_scenario(
    api: &dyn YieldApi,
    panel: &RefCell<PanelState>,
    analysis: &AnalysisDraft,
    scenario: &ScenarioDraft,
    on_change: &dyn Fn(),
) -> Result<(), SubmitError> {
    let request = scenario.to_request(analysis)?;
    panel.borrow_mut().begin()?;
    on_change();

    tracing::info!(
        "Submitting scenario: rainfall {:+}%, fertilizer {:+}%, pesticides {:+}%",
        request.rainfall,
        request.fertilizer,
        request.pesticides
    );
    let outcome = api.simulate(&request).await;
    panel.borrow_mut().resolve(SubmissionKind::Scenario, outcome);
    on_change();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::Notify;

    /// Replays canned outcomes and counts calls. With a gate, every call parks
    /// until the gate is notified.
    #[derive(Default)]
    struct FakeApi {
        calls: Cell<usize>,
        outcomes: RefCell<VecDeque<Result<Value, ApiError>>>,
        last_body: RefCell<Option<Value>>,
        gate: Option<Rc<Notify>>,
    }

    impl FakeApi {
        fn replying(outcomes: Vec<Result<Value, ApiError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                ..Default::default()
            }
        }

        fn gated(outcome: Result<Value, ApiError>, gate: Rc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::replying(vec![outcome])
            }
        }

        async fn respond(&self, body: Value) -> Result<Value, ApiError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_body.borrow_mut() = Some(body);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no canned outcome".into())))
        }
    }

    #[async_trait(?Send)]
    impl YieldApi for FakeApi {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, ApiError> {
            self.respond(serde_json::to_value(request).unwrap()).await
        }

        async fn simulate(&self, request: &ScenarioRequest) -> Result<Value, ApiError> {
            self.respond(serde_json::to_value(request).unwrap()).await
        }
    }

    fn punjab_wheat() -> AnalysisDraft {
        AnalysisDraft {
            state: "Punjab".into(),
            crop: "Wheat".into(),
            year: "2020".into(),
        }
    }

    #[tokio::test]
    async fn test_empty_field_never_reaches_the_network() {
        let api = FakeApi::replying(vec![Ok(json!({}))]);
        let panel = RefCell::new(PanelState::default());
        let mut draft = punjab_wheat();
        draft.crop.clear();

        let result = submit_analysis(&api, &panel, &draft, &|| {}).await;

        assert_eq!(result, Err(SubmitError::Form(FormError::Missing("crop"))));
        assert_eq!(api.calls.get(), 0);
        assert!(panel.borrow().is_idle());
    }

    #[tokio::test]
    async fn test_empty_scenario_delta_never_reaches_the_network() {
        let api = FakeApi::replying(vec![Ok(json!({}))]);
        let panel = RefCell::new(PanelState::default());
        let scenario = ScenarioDraft {
            rainfall: "10".into(),
            fertilizer: "".into(),
            pesticides: "0".into(),
        };

        let result = submit_scenario(&api, &panel, &punjab_wheat(), &scenario, &|| {}).await;

        assert!(matches!(result, Err(SubmitError::Form(FormError::Missing("fertilizer")))));
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_end_to_end_analysis() {
        let api = FakeApi::replying(vec![Ok(json!({"yield": 4000, "confidence": 0.9}))]);
        let panel = RefCell::new(PanelState::default());
        let renders = Cell::new(0);

        submit_analysis(&api, &panel, &punjab_wheat(), &|| renders.set(renders.get() + 1))
            .await
            .unwrap();

        assert_eq!(
            *api.last_body.borrow(),
            Some(json!({"state": "Punjab", "crop": "Wheat", "year": 2020}))
        );
        assert_eq!(renders.get(), 2);

        let state = panel.borrow();
        let summary = crate::outcome::YieldSummary::from_json(state.payload().unwrap());
        assert_eq!(
            crate::outcome::format_yield(summary.yield_kg_per_ha.unwrap()),
            "4,000 kg/ha"
        );
        assert_eq!(crate::outcome::format_confidence(summary.confidence.unwrap()), "90%");
        assert_eq!(summary.risk().label(), "Low Risk");
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let api = FakeApi::replying(vec![
            Err(ApiError::Network("offline".into())),
            Ok(json!({"yield": 3100})),
        ]);
        let panel = RefCell::new(PanelState::default());

        submit_analysis(&api, &panel, &punjab_wheat(), &|| {}).await.unwrap();
        assert_eq!(
            panel.borrow().error(),
            Some("Failed to fetch analysis. Please check your connection.")
        );

        submit_analysis(&api, &panel, &punjab_wheat(), &|| {}).await.unwrap();
        assert_eq!(panel.borrow().payload(), Some(&json!({"yield": 3100})));
        assert_eq!(api.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_resubmit_while_in_flight_is_rejected() {
        let gate = Rc::new(Notify::new());
        let api = Rc::new(FakeApi::gated(Ok(json!({"yield": 1})), gate.clone()));
        let panel = Rc::new(RefCell::new(PanelState::default()));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let first = tokio::task::spawn_local({
                    let api = api.clone();
                    let panel = panel.clone();
                    async move { submit_analysis(&*api, &panel, &punjab_wheat(), &|| {}).await }
                });

                while api.calls.get() == 0 {
                    tokio::task::yield_now().await;
                }
                assert!(panel.borrow().is_submitting());

                let second = submit_analysis(&*api, &panel, &punjab_wheat(), &|| {}).await;
                assert_eq!(second, Err(SubmitError::Rejected(SubmitRejected::InFlight)));
                assert_eq!(api.calls.get(), 1);

                gate.notify_one();
                first.await.unwrap().unwrap();
            })
            .await;

        assert_eq!(panel.borrow().payload(), Some(&json!({"yield": 1})));
        assert_eq!(api.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_scenario_payload_and_service_error() {
        let api = FakeApi::replying(vec![Ok(json!({"error": "No model found for crop: Wheat"}))]);
        let panel = RefCell::new(PanelState::default());
        let scenario = ScenarioDraft {
            rainfall: "15".into(),
            fertilizer: "-10".into(),
            pesticides: "5".into(),
        };

        submit_scenario(&api, &panel, &punjab_wheat(), &scenario, &|| {})
            .await
            .unwrap();

        assert_eq!(
            *api.last_body.borrow(),
            Some(json!({
                "state": "Punjab",
                "crop": "Wheat",
                "year": 2020,
                "rainfall": 15,
                "fertilizer": -10,
                "pesticides": 5
            }))
        );
        assert_eq!(panel.borrow().error(), Some("No model found for crop: Wheat"));
    }
}
