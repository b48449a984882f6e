use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{scroll_to_section, use_navigation};
use crate::router::Route;

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("fas fa-seedling", "25+ Years Data"),
    ("fas fa-chart-bar", "Smart Analytics"),
    ("fas fa-bullseye", "Precise Predictions"),
    ("fas fa-users", "Farmer-Friendly"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let dispatcher = use_navigation().dispatcher();

    let on_explore = Callback::from(move |_: MouseEvent| {
        scroll_to_section("aim", &dispatcher);
    });

    html! {
        <div class="relative min-h-screen flex flex-col justify-center items-center overflow-hidden bg-gradient-to-br from-[#99b83b] via-[#37acd0] to-[#956346] pt-20">
            <div class="absolute inset-0 bg-black/20"></div>
            <div class="relative z-10 text-center px-6 max-w-6xl mx-auto space-y-8">
                <div class="text-8xl">{"🌾"}</div>
                <h1 class="text-6xl md:text-7xl lg:text-8xl font-bold text-white leading-tight">{"CropVision"}</h1>
                <div class="h-2 w-24 bg-[#f8d662] mx-auto rounded-full shadow-lg"></div>
                <h2 class="text-2xl md:text-3xl font-semibold text-[#edebdf] max-w-4xl mx-auto">
                    {"Empowering India's Agriculture with "}
                    <span class="text-[#f8d662]">{"Data-Driven Intelligence"}</span>
                </h2>
                <p class="text-lg md:text-xl text-white/90 max-w-3xl mx-auto">
                    {"Predict crop yields, optimize farming decisions, and ensure sustainable agriculture with 25+ years of agricultural data from across India."}
                </p>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-4xl mx-auto pt-4">
                    {for HIGHLIGHTS.iter().map(|(icon, label)| html! {
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 rounded-full bg-white/20 border border-white/30 text-[#f8d662]">
                                <i class={classes!(*icon, "text-xl")}></i>
                            </div>
                            <span class="text-white/90 font-medium">{*label}</span>
                        </div>
                    })}
                </div>
                <div class="flex flex-col sm:flex-row gap-4 justify-center pt-6">
                    <button
                        class="btn btn-lg rounded-full bg-[#f8d662] hover:bg-[#f8d662]/90 text-[#956346] border-none"
                        onclick={on_explore}
                    >
                        {"Start Exploring"}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                    <Link<Route> to={Route::Insights} classes="btn btn-lg btn-outline rounded-full text-white border-white hover:bg-white/10">
                        {"Try the Insights"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
