use common::outcome::{format_change, format_yield};
use common::IllustrativeHistory;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct HistoryProps {
    pub history: IllustrativeHistory,
    pub predicted_yield: f64,
    pub year: i32,
}

/// Illustrative comparison of the prediction against five preceding years.
#[function_component(HistoryComparison)]
pub fn history_comparison(props: &HistoryProps) -> Html {
    let history = &props.history;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <div class="flex items-center justify-between flex-wrap gap-2">
                    <h3 class="card-title text-[#956346]">{"Historical Comparison"}</h3>
                    <span class="badge badge-warning badge-outline" title="Generated in the browser from the prediction; not historical data">
                        {"Illustrative"}
                    </span>
                </div>
                <HistoryChart
                    history={history.clone()}
                    predicted_yield={props.predicted_yield}
                    year={props.year}
                />
                <div class="stats stats-vertical md:stats-horizontal w-full bg-base-200">
                    <div class="stat">
                        <div class="stat-title">{"5-Year Average"}</div>
                        <div class="stat-value text-xl">{format_yield(history.five_year_average)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Best Year"}</div>
                        <div class="stat-value text-xl">{history.best_year.year}</div>
                        <div class="stat-desc">{format_yield(history.best_year.yield_kg_per_ha)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">{"Growth Rate"}</div>
                        <div class={classes!("stat-value", "text-xl", if history.growth_rate_percent >= 0.0 { "text-success" } else { "text-error" })}>
                            {format_change(history.growth_rate_percent)}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(HistoryChart)]
fn history_chart(props: &HistoryProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.history.clone(), props.predicted_yield, props.year),
        move |(chart_ref, history, predicted_yield, year)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let years: Vec<i32> = history.points.iter().map(|p| p.year).collect();
                let yields: Vec<f64> = history.points.iter().map(|p| p.yield_kg_per_ha.round()).collect();

                let traces = serde_json::json!([
                    {
                        "x": years,
                        "y": yields,
                        "type": "bar",
                        "name": "Illustrative history",
                        "marker": {"color": "#99b83b"}
                    },
                    {
                        "x": [year],
                        "y": [predicted_yield.round()],
                        "type": "bar",
                        "name": "Prediction",
                        "marker": {"color": "#37acd0"}
                    }
                ]);

                let layout = serde_json::json!({
                    "margin": {"t": 10, "r": 10, "l": 60, "b": 30},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false, "dtick": 1},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee", "title": {"text": "kg/ha"}},
                    "showlegend": true,
                    "legend": {"orientation": "h", "y": -0.2}
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                let specs = (
                    serde_wasm_bindgen::to_value(&traces),
                    serde_wasm_bindgen::to_value(&layout),
                    serde_wasm_bindgen::to_value(&config),
                );
                match specs {
                    (Ok(data), Ok(layout), Ok(config)) if !div_id.is_empty() => {
                        log::trace!("Plotting illustrative history into #{}", div_id);
                        newPlot(&div_id, data, layout, config);
                    }
                    _ => log::error!("Failed to prepare history chart"),
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-yield-history" class="chart-container" style="height: 300px;"></div>
    }
}
