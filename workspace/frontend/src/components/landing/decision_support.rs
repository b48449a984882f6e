use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

fn blurb(route: &Route) -> &'static str {
    match route {
        Route::DescriptiveAnalysis => "See which states, crops and seasons the yield models cover.",
        Route::PredictiveAnalysis => "Forecast the yield of a crop for a state and year, with a risk rating.",
        Route::Insights => "Analyze a selection, then simulate changes in rainfall and inputs.",
        Route::Reports => "Shareable summaries of yields, climate impact and input efficiency.",
        _ => "",
    }
}

#[function_component(DecisionSupport)]
pub fn decision_support() -> Html {
    html! {
        <div class="py-20 px-6 bg-gradient-to-br from-[#37acd0]/10 via-white to-[#99b83b]/10">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#956346] mb-4">{"Decision Support"}</h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-[#99b83b] to-[#37acd0] mx-auto rounded-full mb-6"></div>
                    <p class="text-xl text-[#956346]/80 max-w-3xl mx-auto">
                        {"Tools that turn decades of agricultural data into decisions for the coming season."}
                    </p>
                </div>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                    {for Route::DASHBOARD.iter().map(|route| html! {
                        <Link<Route> to={route.clone()} classes="card bg-base-100 shadow-lg hover:shadow-2xl hover:-translate-y-1 transition-all">
                            <div class="card-body">
                                <i class={classes!(route.icon(), "text-3xl", "text-[#99b83b]")}></i>
                                <h3 class="card-title text-[#956346]">{route.title()}</h3>
                                <p class="text-sm text-[#956346]/70">{blurb(route)}</p>
                            </div>
                        </Link<Route>>
                    })}
                </div>
            </div>
        </div>
    }
}
