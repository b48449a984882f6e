use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use common::navigation::{OVERLAY_BREAKPOINT, OVERLAY_CLOSE_DELAY_MS};
use common::NavigationAction;

use crate::hooks::{scroll_to_section, use_navigation};
use crate::router::Route;

/// Landing-page section links: id, label, blurb.
const SECTION_LINKS: [(&str, &str, &str); 4] = [
    ("home", "Home", "Welcome to CropVision"),
    ("aim", "Our Mission", "Why we built this platform"),
    ("decision-support", "Decision Support", "AI-powered crop insights"),
    ("team", "Our Team", "Meet the experts"),
];

fn is_overlay_viewport() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width < OVERLAY_BREAKPOINT)
        .unwrap_or(false)
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let navigation = use_navigation();
    let navigator = use_navigator();
    let on_landing = use_route::<Route>() == Some(Route::Home);

    let on_close = {
        let dispatcher = navigation.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavigationAction::CloseSidebar))
    };

    let on_section = {
        let dispatcher = navigation.dispatcher();
        Callback::from(move |section_id: &'static str| {
            if !on_landing {
                log::debug!("Section #{} requested off the landing page", section_id);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
                return;
            }

            if scroll_to_section(section_id, &dispatcher) && is_overlay_viewport() {
                let dispatcher = dispatcher.clone();
                Timeout::new(OVERLAY_CLOSE_DELAY_MS, move || {
                    dispatcher.dispatch(NavigationAction::CloseSidebar)
                })
                .forget();
            }
        })
    };

    html! {
        <div class="drawer-side z-50 lg:pt-20">
            <label aria-label="close sidebar" class="drawer-overlay" onclick={on_close}></label>
            <aside class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-[#99b83b]/20">
                <div class="flex items-center gap-3 px-2 mb-6 lg:hidden">
                    <div class="w-10 h-10 rounded-lg bg-[#99b83b] flex items-center justify-center text-2xl">
                        {"🌾"}
                    </div>
                    <span class="text-2xl font-bold tracking-tight text-[#956346]">{"CropVision"}</span>
                </div>

                <p class="menu-title">{"Explore"}</p>
                <ul>
                    {for SECTION_LINKS.iter().map(|(id, label, blurb)| {
                        let id: &'static str = *id;
                        let active = on_landing && navigation.0.active_section == id;
                        let onclick = {
                            let on_section = on_section.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_section.emit(id);
                            })
                        };
                        html! {
                            <li>
                                <a
                                    href={format!("#{}", id)}
                                    class={classes!("flex", "flex-col", "items-start", active.then_some("active"))}
                                    aria-current={active.then_some("true")}
                                    {onclick}
                                >
                                    <span class="font-semibold">{*label}</span>
                                    <span class="text-xs opacity-60">{*blurb}</span>
                                </a>
                            </li>
                        }
                    })}
                </ul>

                <div class="divider"></div>

                <p class="menu-title">{"Dashboard"}</p>
                <ul>
                    {for Route::DASHBOARD.iter().map(|route| html! {
                        <li>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                <i class={classes!(route.icon(), "w-5")}></i>
                                {" "}{route.title()}
                            </Link<Route>>
                        </li>
                    })}
                </ul>
            </aside>
        </div>
    }
}
