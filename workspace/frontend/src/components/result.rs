use common::outcome::{format_change, format_confidence, format_yield, percentage_change};
use common::{PanelState, RiskBucket, YieldSummary};
use yew::prelude::*;

use crate::shared::error::FailureNotice;
use crate::shared::json_view::JsonView;
use crate::shared::loading::Loading;

fn risk_badge_class(risk: RiskBucket) -> &'static str {
    match risk {
        RiskBucket::Low => "badge-success",
        RiskBucket::Moderate => "badge-warning",
        RiskBucket::High => "badge-error",
        RiskBucket::Unknown => "badge-ghost",
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryStatsProps {
    pub summary: YieldSummary,
    /// Yield to compare against, e.g. the analysis result next to a scenario.
    #[prop_or_default]
    pub baseline_yield: Option<f64>,
}

/// Headline metrics of a response; renders nothing when the body has none.
#[function_component(SummaryStats)]
pub fn summary_stats(props: &SummaryStatsProps) -> Html {
    let summary = props.summary;
    if summary.is_empty() {
        return html! {};
    }

    let risk = summary.risk();
    let change = props
        .baseline_yield
        .zip(summary.yield_kg_per_ha)
        .and_then(|(baseline, value)| percentage_change(baseline, value));

    html! {
        <div class="stats stats-vertical md:stats-horizontal shadow w-full bg-base-100">
            if let Some(value) = summary.yield_kg_per_ha {
                <div class="stat">
                    <div class="stat-title">{"Predicted Yield"}</div>
                    <div class="stat-value text-[#99b83b] text-3xl">{format_yield(value)}</div>
                    if let Some(change) = change {
                        <div class={classes!("stat-desc", if change >= 0.0 { "text-success" } else { "text-error" })}>
                            {format!("{} vs. current conditions", format_change(change))}
                        </div>
                    }
                </div>
            }
            if let Some(confidence) = summary.confidence {
                <div class="stat">
                    <div class="stat-title">{"Confidence"}</div>
                    <div class="stat-value text-[#37acd0] text-3xl">{format_confidence(confidence)}</div>
                </div>
            }
            <div class="stat">
                <div class="stat-title">{"Risk Assessment"}</div>
                <div class="stat-value text-2xl">
                    <span class={classes!("badge", "badge-lg", risk_badge_class(risk))}>{risk.label()}</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub state: PanelState,
    pub placeholder: AttrValue,
    pub loading_text: AttrValue,
    #[prop_or_default]
    pub baseline_yield: Option<f64>,
}

/// Renders one panel's submission state: placeholder, spinner, failure or result.
#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    match &props.state {
        PanelState::Idle => html! {
            <div class="text-center py-10 text-[#956346]/60">
                <i class="fas fa-seedling text-4xl mb-3"></i>
                <p>{&props.placeholder}</p>
            </div>
        },
        PanelState::Submitting => html! {
            <Loading text={props.loading_text.to_string()} />
        },
        PanelState::Failed(message) => html! {
            <FailureNotice message={message.clone()} />
        },
        PanelState::Succeeded(body) => html! {
            <div class="space-y-4">
                <SummaryStats summary={YieldSummary::from_json(body)} baseline_yield={props.baseline_yield} />
                <JsonView value={body.clone()} title={AttrValue::from("Response")} />
            </div>
        },
    }
}
