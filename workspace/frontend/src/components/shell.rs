//! Application chrome shared by every route: navbar, sidebar drawer, splash
//! screen, back-to-top button, skip link and the debug route badge.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use common::NavigationAction;

use super::layout::navbar::Navbar;
use super::layout::sidebar::Sidebar;
use crate::hooks::{scroll_to_top, use_navigation, use_settings};
use crate::router::{switch, Route};

pub const DRAWER_ID: &str = "cropvision-drawer";

/// Scroll distance after which the back-to-top button appears.
const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

#[function_component(Shell)]
pub fn shell() -> Html {
    let navigation = use_navigation();
    let settings = use_settings();

    let on_drawer_change = {
        let dispatcher = navigation.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(NavigationAction::ToggleSidebar))
    };

    html! {
        <>
            <RouteWatcher />
            <SkipLink />
            <Splash duration_ms={settings.splash_duration_ms} />
            <div class="drawer lg:drawer-open">
                <input
                    id={DRAWER_ID}
                    type="checkbox"
                    class="drawer-toggle"
                    checked={navigation.0.sidebar_open}
                    onchange={on_drawer_change}
                />
                <div class="drawer-content flex flex-col min-h-screen bg-gradient-to-br from-[#edebdf] via-white to-[#edebdf]">
                    <Navbar />
                    <main id="main-content" tabindex="-1" class="flex-1 pt-20 focus:outline-none">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
                <Sidebar />
            </div>
            <BackToTop />
            if settings.debug_mode {
                <RouteIndicator />
            }
        </>
    }
}

/// Resets navigation state whenever the path changes.
#[function_component(RouteWatcher)]
fn route_watcher() -> Html {
    let dispatcher = use_navigation().dispatcher();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with(path, move |path| {
        log::debug!("Route changed to {}", path);
        dispatcher.dispatch(NavigationAction::RouteChanged);
        || ()
    });

    html! {}
}

#[derive(Properties, PartialEq)]
struct SplashProps {
    duration_ms: u32,
}

#[function_component(Splash)]
fn splash(props: &SplashProps) -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with(props.duration_ms, move |duration_ms| {
            let timeout = Timeout::new(*duration_ms, move || visible.set(false));
            move || drop(timeout)
        });
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 z-[100] flex flex-col items-center justify-center bg-gradient-to-br from-[#99b83b] via-[#37acd0] to-[#956346]" aria-hidden="true">
            <div class="text-7xl mb-6 animate-bounce">{"🌾"}</div>
            <h1 class="text-5xl font-bold text-white mb-2">{"CropVision"}</h1>
            <p class="text-lg text-white/80">{"Cultivating Agricultural Intelligence..."}</p>
            <span class="loading loading-dots loading-lg text-white mt-8"></span>
        </div>
    }
}

#[function_component(SkipLink)]
fn skip_link() -> Html {
    html! {
        <a
            href="#main-content"
            class="sr-only focus:not-sr-only focus:fixed focus:top-4 focus:left-4 focus:z-[100] btn btn-sm btn-primary"
        >
            {"Skip to main content"}
        </a>
    }
}

#[function_component(BackToTop)]
fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let on_scroll = Closure::<dyn FnMut()>::new(move || {
                let scrolled = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                visible.set(scrolled > BACK_TO_TOP_THRESHOLD);
            });

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                }
                drop(on_scroll);
            }
        });
    }

    if !*visible {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| {
        log::debug!("Back to top");
        scroll_to_top();
    });

    html! {
        <button
            class="btn btn-circle btn-lg fixed bottom-8 right-8 z-40 bg-[#99b83b] hover:bg-[#956346] text-white border-none shadow-xl"
            aria-label="Back to top"
            title="Back to top"
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

#[function_component(RouteIndicator)]
fn route_indicator() -> Html {
    let navigation = use_navigation();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <div class="fixed bottom-4 left-4 z-50 bg-black/70 text-white text-xs rounded-lg px-3 py-2 space-y-1 pointer-events-none">
            <div>{"Route: "}<span class="font-mono">{path}</span></div>
            <div>{"Section: "}<span class="font-mono">{&navigation.0.active_section}</span></div>
        </div>
    }
}
