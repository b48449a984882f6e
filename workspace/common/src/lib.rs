//! Shared CropVision logic, free of any browser or server dependency.
//!
//! The frontend renders what these modules decide: request validation, the
//! per-panel submission state machine, reading service responses, landing-page
//! section tracking and the list of client-side routes. The host server reuses
//! the route list for its SPA fallback.

pub mod api;
pub mod catalog;
pub mod error;
pub mod history;
pub mod navigation;
pub mod outcome;
pub mod request;
pub mod routes;
pub mod submission;

pub use api::{PanelState, SubmitError, YieldApi, submit_analysis, submit_scenario};
pub use error::ApiError;
pub use history::{HistoricalPoint, IllustrativeHistory, illustrative_history};
pub use navigation::{NavigationAction, NavigationState, SectionBounds};
pub use outcome::{RiskBucket, YieldSummary};
pub use request::{
    AnalysisDraft, AnalysisField, AnalysisRequest, FormError, ScenarioDraft, ScenarioField,
    ScenarioRequest,
};
pub use submission::{SubmissionKind, SubmissionState, SubmitRejected};
