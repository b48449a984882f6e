use yew::prelude::*;
use yew_router::prelude::*;

use common::NavigationAction;

use crate::hooks::use_navigation;
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigation = use_navigation();
    let current = use_route::<Route>();

    let on_toggle = {
        let dispatcher = navigation.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavigationAction::ToggleSidebar))
    };

    html! {
        <header class="navbar fixed top-0 inset-x-0 h-20 z-40 bg-white/90 backdrop-blur shadow-sm border-b border-[#99b83b]/20 px-4">
            <div class="flex-none lg:hidden">
                <button
                    aria-label={if navigation.0.sidebar_open { "close sidebar" } else { "open sidebar" }}
                    aria-expanded={navigation.0.sidebar_open.to_string()}
                    class="btn btn-square btn-ghost"
                    onclick={on_toggle}
                >
                    <i class={if navigation.0.sidebar_open { "fas fa-times text-xl" } else { "fas fa-bars text-xl" }}></i>
                </button>
            </div>
            <div class="flex-1 px-2">
                <Link<Route> to={Route::Home} classes="flex items-center gap-2 text-2xl font-bold text-[#956346]">
                    <span>{"🌾"}</span>
                    <span>{"CropVision"}</span>
                </Link<Route>>
            </div>
            <nav class="flex-none hidden md:flex gap-1">
                {for Route::DASHBOARD.iter().map(|route| {
                    let active = current.as_ref() == Some(route);
                    html! {
                        <Link<Route>
                            to={route.clone()}
                            classes={classes!("btn", "btn-ghost", "btn-sm", active.then_some("text-[#37acd0]"))}
                        >
                            {route.title()}
                        </Link<Route>>
                    }
                })}
            </nav>
        </header>
    }
}
