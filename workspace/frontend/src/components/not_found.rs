use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <div class="flex flex-col items-center justify-center py-20 gap-6 text-center">
            <div class="text-7xl">{"🌾"}</div>
            <h2 class="text-3xl font-bold text-[#956346]">{"Page not found"}</h2>
            <p class="text-[#956346]/70">
                {"Nothing grows at "}<span class="font-mono">{path}</span>{"."}
            </p>
            <Link<Route> to={Route::Home} classes="btn bg-[#99b83b] hover:bg-[#956346] text-white border-none">
                <i class="fas fa-home"></i>
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
