use common::SubmissionKind;
use yew::prelude::*;

use crate::hooks::use_settings;

/// Report types offered once the service can export them.
const PLANNED_REPORTS: [(&str, &str, &str); 3] = [
    (
        "fas fa-file-invoice",
        "Seasonal Yield Report",
        "State-wise yield summary for a crop and season, ready to share with extension officers.",
    ),
    (
        "fas fa-cloud-sun-rain",
        "Climate Impact Report",
        "How rainfall deviations affected yields across the covered years.",
    ),
    (
        "fas fa-balance-scale",
        "Input Efficiency Report",
        "Fertilizer and pesticide use compared with the yield they produced.",
    ),
];

#[function_component(Reports)]
pub fn reports() -> Html {
    let settings = use_settings();

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                {for PLANNED_REPORTS.iter().map(|(icon, title, description)| html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <div class="text-3xl text-[#99b83b]"><i class={*icon}></i></div>
                            <h3 class="card-title text-[#956346]">{*title}</h3>
                            <p class="text-sm text-[#956346]/70">{*description}</p>
                            <div class="card-actions justify-end">
                                <span class="badge badge-outline">{"Coming soon"}</span>
                            </div>
                        </div>
                    </div>
                })}
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-[#956346]">
                        <i class="fas fa-plug"></i>
                        {"Yield Service"}
                    </h3>
                    <p class="text-sm text-[#956346]/70">
                        {"Analyses and simulations are sent to the endpoints below. Override them with the "}
                        <span class="font-mono">{"cropvision_api_*"}</span>
                        {" keys in local storage."}
                    </p>
                    <div class="overflow-x-auto">
                        <table class="table table-sm">
                            <tbody>
                                {for [SubmissionKind::Analysis, SubmissionKind::Scenario].iter().map(|kind| html! {
                                    <tr>
                                        <td class="font-semibold">{format!("{:?}", kind)}</td>
                                        <td class="font-mono">{format!("POST {}", settings.api_url(kind.endpoint()))}</td>
                                    </tr>
                                })}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
