use common::catalog::{CROPS, STATES, YEAR_MAX, YEAR_MIN};
use common::{illustrative_history, AnalysisDraft, AnalysisField, AnalysisRequest, PanelState, YieldSummary};
use serde_json::Value;
use yew::prelude::*;

use super::history::HistoryComparison;
use crate::components::result::{ResultPanel, SummaryStats};
use crate::components::selection::SelectionFields;
use crate::hooks::{use_submission_panel, use_yield_api};
use crate::shared::json_view::JsonView;
use crate::shared::loading::ButtonSpinner;
use crate::shared::toast::use_toast;

#[function_component(PredictiveAnalysis)]
pub fn predictive_analysis() -> Html {
    let api = use_yield_api();
    let toast = use_toast();
    let selection = use_state(AnalysisDraft::default);
    let submitted = use_state(|| None::<AnalysisRequest>);
    let panel = use_submission_panel();
    let state = panel.state();

    let on_change = {
        let selection = selection.clone();
        let panel = panel.clone();
        Callback::from(move |(field, value): (AnalysisField, String)| {
            let mut next = (*selection).clone();
            next.set(field, value);
            selection.set(next);
            panel.edit();
        })
    };

    let on_submit = {
        let selection = selection.clone();
        let submitted = submitted.clone();
        let panel = panel.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if panel.is_submitting() {
                return;
            }

            let draft = (*selection).clone();
            submitted.set(draft.to_request().ok());
            log::info!("Requesting prediction for {} / {} / {}", draft.state, draft.crop, draft.year);
            let message = format!("Prediction ready for {} {}", draft.crop, draft.year);
            let toast = toast.clone();
            panel.submit_analysis(
                api.clone(),
                draft,
                Callback::from(move |_: Value| toast.show_success(message.clone())),
            );
        })
    };

    let can_submit = selection.to_request().is_ok() && !state.is_submitting();

    html! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title text-[#956346]">{"Forecast Parameters"}</h2>
                    <p class="text-sm text-[#956346]/70">
                        {format!(
                            "Covers {} states, {} crops and the years {}-{}.",
                            STATES.len(),
                            CROPS.len(),
                            YEAR_MIN,
                            YEAR_MAX
                        )}
                    </p>
                    <form onsubmit={on_submit} class="space-y-4">
                        <SelectionFields
                            draft={(*selection).clone()}
                            {on_change}
                            disabled={state.is_submitting()}
                        />
                        <div class="card-actions justify-end">
                            <button
                                type="submit"
                                class="btn bg-[#99b83b] hover:bg-[#956346] text-white border-none"
                                disabled={!can_submit}
                            >
                                if state.is_submitting() {
                                    <ButtonSpinner />
                                    {"Predicting..."}
                                } else {
                                    <i class="fas fa-magic"></i>
                                    {"Predict Yield"}
                                }
                            </button>
                        </div>
                    </form>
                </div>
            </div>

            {match (&state, (*submitted).as_ref()) {
                (PanelState::Succeeded(body), Some(request)) => html! {
                    <PredictionResult body={body.clone()} request={request.clone()} />
                },
                _ => html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <ResultPanel
                                state={state.clone()}
                                placeholder="Choose a state, crop and year to forecast the yield."
                                loading_text="Running the yield model..."
                            />
                        </div>
                    </div>
                },
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PredictionResultProps {
    body: Value,
    request: AnalysisRequest,
}

#[function_component(PredictionResult)]
fn prediction_result(props: &PredictionResultProps) -> Html {
    let summary = YieldSummary::from_json(&props.body);
    let history = summary
        .yield_kg_per_ha
        .and_then(|value| illustrative_history(&props.request, value).map(|history| (value, history)));

    html! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body space-y-4">
                    <h2 class="card-title text-[#956346]">
                        {format!("{} in {}, {}", props.request.crop, props.request.state, props.request.year)}
                    </h2>
                    <SummaryStats {summary} />
                </div>
            </div>
            if let Some((predicted_yield, history)) = history {
                <HistoryComparison {history} {predicted_yield} year={props.request.year} />
            }
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <JsonView value={props.body.clone()} title={AttrValue::from("Raw Response")} />
                </div>
            </div>
        </div>
    }
}
