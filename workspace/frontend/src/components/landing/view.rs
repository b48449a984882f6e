use yew::prelude::*;

use super::decision_support::DecisionSupport;
use super::hero::Hero;
use super::mission::Mission;
use super::team::Team;
use crate::hooks::use_section_tracker;

/// The long-scroll landing page. Each `section[id]` is tracked for the sidebar.
#[function_component(Landing)]
pub fn landing() -> Html {
    use_section_tracker();

    html! {
        <div class="-mt-20">
            <section id="home"><Hero /></section>
            <section id="aim"><Mission /></section>
            <section id="decision-support"><DecisionSupport /></section>
            <section id="team"><Team /></section>
            <footer class="footer footer-center p-8 bg-[#956346] text-white/90">
                <p>{"CropVision · Empowering India's agriculture with data-driven intelligence"}</p>
            </footer>
        </div>
    }
}
