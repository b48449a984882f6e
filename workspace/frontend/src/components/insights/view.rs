use common::{AnalysisDraft, AnalysisField, ScenarioDraft, ScenarioField, YieldSummary};
use serde_json::Value;
use yew::prelude::*;

use super::scenario_fields::ScenarioFields;
use crate::components::result::ResultPanel;
use crate::components::selection::SelectionFields;
use crate::hooks::{use_submission_panel, use_yield_api};
use crate::shared::loading::ButtonSpinner;
use crate::shared::toast::use_toast;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Tab {
    Analysis,
    Scenario,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Analysis => "Yield Analysis",
            Tab::Scenario => "What-If Scenario",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tab::Analysis => "fas fa-search",
            Tab::Scenario => "fas fa-flask",
        }
    }
}

#[function_component(Insights)]
pub fn insights() -> Html {
    let api = use_yield_api();
    let toast = use_toast();
    let tab = use_state(|| Tab::Analysis);
    let selection = use_state(AnalysisDraft::default);
    let deltas = use_state(ScenarioDraft::default);
    let analysis = use_submission_panel();
    let scenario = use_submission_panel();

    let analysis_state = analysis.state();
    let scenario_state = scenario.state();
    let busy = analysis_state.is_submitting() || scenario_state.is_submitting();

    // Both panels are relative to the same selection, so an edit invalidates both.
    let on_selection = {
        let selection = selection.clone();
        let analysis = analysis.clone();
        let scenario = scenario.clone();
        Callback::from(move |(field, value): (AnalysisField, String)| {
            let mut next = (*selection).clone();
            next.set(field, value);
            selection.set(next);
            analysis.edit();
            scenario.edit();
        })
    };

    let on_delta = {
        let deltas = deltas.clone();
        let scenario = scenario.clone();
        Callback::from(move |(field, value): (ScenarioField, String)| {
            let mut next = (*deltas).clone();
            next.set(field, value);
            deltas.set(next);
            scenario.edit();
        })
    };

    let on_analyze = {
        let api = api.clone();
        let toast = toast.clone();
        let selection = selection.clone();
        let analysis = analysis.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if analysis.is_submitting() {
                return;
            }

            let draft = (*selection).clone();
            log::info!("Requesting analysis for {} / {} / {}", draft.state, draft.crop, draft.year);
            let message = format!("Analysis ready for {} in {}", draft.crop, draft.state);
            let toast = toast.clone();
            analysis.submit_analysis(
                api.clone(),
                draft,
                Callback::from(move |_: Value| toast.show_success(message.clone())),
            );
        })
    };

    let on_simulate = {
        let api = api.clone();
        let toast = toast.clone();
        let selection = selection.clone();
        let deltas = deltas.clone();
        let scenario = scenario.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if scenario.is_submitting() {
                return;
            }

            log::info!("Requesting scenario simulation");
            let toast = toast.clone();
            scenario.submit_scenario(
                api.clone(),
                (*selection).clone(),
                (*deltas).clone(),
                Callback::from(move |_: Value| toast.show_success("Scenario simulated".to_string())),
            );
        })
    };

    let analysis_valid = selection.to_request().is_ok();
    let scenario_valid = deltas.to_request(&selection).is_ok();
    let baseline_yield = analysis_state
        .payload()
        .and_then(|body| YieldSummary::from_json(body).yield_kg_per_ha);

    let tab_button = |which: Tab| {
        let tab = tab.clone();
        let active = *tab == which;
        html! {
            <button
                type="button"
                role="tab"
                aria-selected={active.to_string()}
                class={classes!("tab", "gap-2", active.then_some("tab-active"))}
                onclick={Callback::from(move |_: MouseEvent| tab.set(which))}
            >
                <i class={which.icon()}></i>
                {which.label()}
            </button>
        }
    };

    html! {
        <div class="space-y-6">
            <p class="text-[#956346]/80 max-w-3xl">
                {"Pick a state, crop and year to get a yield analysis, then explore how changes in rainfall, fertilizer and pesticide use would move the prediction."}
            </p>

            <div role="tablist" class="tabs tabs-boxed bg-base-100 w-fit">
                {tab_button(Tab::Analysis)}
                {tab_button(Tab::Scenario)}
            </div>

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        if *tab == Tab::Analysis {
                            <h2 class="card-title text-[#956346]">{"Analysis Parameters"}</h2>
                            <form onsubmit={on_analyze} class="space-y-4">
                                <SelectionFields draft={(*selection).clone()} on_change={on_selection.clone()} disabled={busy} />
                                <div class="card-actions justify-end">
                                    <button
                                        type="submit"
                                        class="btn bg-[#99b83b] hover:bg-[#956346] text-white border-none"
                                        disabled={!analysis_valid || analysis_state.is_submitting()}
                                    >
                                        if analysis_state.is_submitting() {
                                            <ButtonSpinner />
                                            {"Analyzing..."}
                                        } else {
                                            <i class="fas fa-chart-line"></i>
                                            {"Analyze Yield"}
                                        }
                                    </button>
                                </div>
                            </form>
                        } else {
                            <h2 class="card-title text-[#956346]">{"Scenario Parameters"}</h2>
                            <form onsubmit={on_simulate} class="space-y-4">
                                <SelectionFields draft={(*selection).clone()} on_change={on_selection.clone()} disabled={busy} />
                                if !selection.is_complete() {
                                    <div class="alert alert-info text-sm">
                                        <i class="fas fa-info-circle"></i>
                                        <span>{"Choose a state, crop and year before simulating a scenario."}</span>
                                    </div>
                                }
                                <ScenarioFields draft={(*deltas).clone()} on_change={on_delta} disabled={busy} />
                                <div class="card-actions justify-end">
                                    <button
                                        type="submit"
                                        class="btn bg-[#37acd0] hover:bg-[#956346] text-white border-none"
                                        disabled={!scenario_valid || scenario_state.is_submitting()}
                                    >
                                        if scenario_state.is_submitting() {
                                            <ButtonSpinner />
                                            {"Simulating..."}
                                        } else {
                                            <i class="fas fa-flask"></i>
                                            {"Run Simulation"}
                                        }
                                    </button>
                                </div>
                            </form>
                        }
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        if *tab == Tab::Analysis {
                            <h2 class="card-title text-[#956346]">{"Analysis Result"}</h2>
                            <ResultPanel
                                state={analysis_state.clone()}
                                placeholder="Submit the form to see the yield analysis."
                                loading_text="Fetching analysis..."
                            />
                        } else {
                            <h2 class="card-title text-[#956346]">{"Scenario Result"}</h2>
                            <ResultPanel
                                state={scenario_state.clone()}
                                placeholder="Adjust the parameters and run a simulation."
                                loading_text="Simulating scenario..."
                                {baseline_yield}
                            />
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
