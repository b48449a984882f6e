//! Browser glue: the scroll tracker and the form panel handle.
//!
//! Both only measure, listen and schedule. What the measurements mean is
//! decided in `common::navigation` and `common::submission`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::navigation::{active_section, select_section, FrameThrottle, SectionBounds, DETECTION_OFFSET};
use common::{
    submit_analysis, submit_scenario, AnalysisDraft, NavigationAction, NavigationState, PanelState,
    ScenarioDraft, YieldApi,
};
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::api_client::HttpYieldApi;
use crate::settings::AppSettings;

/// Reducer wrapper so the navigation state can live in `use_reducer`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavStore(pub NavigationState);

impl Reducible for NavStore {
    type Action = NavigationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(NavStore(next))
        }
    }
}

pub type NavContext = UseReducerHandle<NavStore>;

#[hook]
pub fn use_navigation() -> NavContext {
    use_context::<NavContext>().expect("NavContext is provided by App")
}

#[hook]
pub fn use_settings() -> AppSettings {
    use_context::<AppSettings>().unwrap_or_default()
}

/// The yield service client for the current settings.
#[hook]
pub fn use_yield_api() -> Rc<dyn YieldApi> {
    let settings = use_settings();
    use_memo(settings, |settings| HttpYieldApi::new(settings))
}

/// `section[id]` elements in document order.
fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds::new(el.id(), el.offset_top() as f64, el.offset_height() as f64))
        .collect()
}

fn observe_scroll(nav: &UseReducerDispatcher<NavStore>) {
    let Some(window) = window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let sections = measure_sections();
    if let Some(id) = active_section(&sections, scroll_y, DETECTION_OFFSET) {
        nav.dispatch(NavigationAction::ScrollObserved(id.to_string()));
    }
}

/// Smoothly scrolls to a landing section and marks it active right away.
/// Returns `false`, touching nothing, when no such section is on the page.
pub fn scroll_to_section(section_id: &str, nav: &UseReducerDispatcher<NavStore>) -> bool {
    let sections = measure_sections();
    let Some((plan, action)) = select_section(&sections, section_id) else {
        log::debug!("No section #{} on this page", section_id);
        return false;
    };

    log::debug!("Scrolling to #{} at {}px", plan.section_id, plan.target);
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(plan.target);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    nav.dispatch(action);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Keeps `active_section` in sync with the scroll position while mounted.
/// Scroll events are coalesced to one recomputation per animation frame.
#[hook]
pub fn use_section_tracker() {
    let nav = use_navigation().dispatcher();

    use_effect_with((), move |_| {
        let throttle = Rc::new(Cell::new(FrameThrottle::default()));
        let pending_frame = Rc::new(Cell::new(None::<i32>));

        let on_frame = {
            let throttle = throttle.clone();
            let pending_frame = pending_frame.clone();
            let nav = nav.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut state = throttle.get();
                state.frame_fired();
                throttle.set(state);
                pending_frame.set(None);
                observe_scroll(&nav);
            })
        };

        // Measurements always happen in a frame callback, so the initial one
        // lands after any navigation reset dispatched during this render.
        let schedule = {
            let throttle = throttle.clone();
            let pending_frame = pending_frame.clone();
            let frame_fn: js_sys::Function = on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
            Rc::new(move || {
                let mut state = throttle.get();
                if !state.request() {
                    return;
                }
                match window().map(|w| w.request_animation_frame(&frame_fn)) {
                    Some(Ok(handle)) => {
                        throttle.set(state);
                        pending_frame.set(Some(handle));
                    }
                    _ => log::warn!("requestAnimationFrame unavailable; dropping scroll event"),
                }
            })
        };

        let on_scroll = {
            let schedule = schedule.clone();
            Closure::<dyn FnMut()>::new(move || schedule())
        };

        if let Some(window) = window() {
            if let Err(e) =
                window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            {
                log::error!("Failed to attach scroll listener: {:?}", e);
            }
        }
        schedule();
        log::trace!("Section tracker attached");

        move || {
            if let Some(window) = window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref(),
                );
                if let Some(handle) = pending_frame.take() {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
            log::trace!("Section tracker detached");
            drop(on_scroll);
            drop(on_frame);
        }
    });
}

/// One form panel's submission state, shared with the async request task.
#[derive(Clone)]
pub struct PanelHandle {
    cell: Rc<RefCell<PanelState>>,
    redraw: UseForceUpdateHandle,
}

impl PanelHandle {
    pub fn state(&self) -> PanelState {
        self.cell.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.cell.borrow().is_submitting()
    }

    /// Call on every field edit: a resolved result no longer matches the inputs.
    pub fn edit(&self) {
        let was_idle = self.cell.borrow().is_idle();
        self.cell.borrow_mut().edit();
        if !was_idle {
            self.redraw.force_update();
        }
    }

    pub fn submit_analysis(&self, api: Rc<dyn YieldApi>, draft: AnalysisDraft, on_success: Callback<Value>) {
        let cell = self.cell.clone();
        let redraw = self.redraw.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let notify = move || redraw.force_update();
            match submit_analysis(api.as_ref(), &cell, &draft, &notify).await {
                Ok(()) => emit_payload(&cell, &on_success),
                Err(e) => log::warn!("Analysis not submitted: {}", e),
            }
        });
    }

    pub fn submit_scenario(
        &self,
        api: Rc<dyn YieldApi>,
        analysis: AnalysisDraft,
        scenario: ScenarioDraft,
        on_success: Callback<Value>,
    ) {
        let cell = self.cell.clone();
        let redraw = self.redraw.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let notify = move || redraw.force_update();
            match submit_scenario(api.as_ref(), &cell, &analysis, &scenario, &notify).await {
                Ok(()) => emit_payload(&cell, &on_success),
                Err(e) => log::warn!("Scenario not submitted: {}", e),
            }
        });
    }
}

fn emit_payload(cell: &RefCell<PanelState>, on_success: &Callback<Value>) {
    let payload = cell.borrow().payload().cloned();
    if let Some(body) = payload {
        on_success.emit(body);
    }
}

#[hook]
pub fn use_submission_panel() -> PanelHandle {
    let cell = use_mut_ref(PanelState::default);
    let redraw = use_force_update();
    PanelHandle { cell, redraw }
}
