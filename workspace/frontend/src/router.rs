use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::descriptive::DescriptiveAnalysis;
use crate::components::insights::Insights;
use crate::components::landing::Landing;
use crate::components::layout::layout::Layout;
use crate::components::not_found::NotFound;
use crate::components::predictive::PredictiveAnalysis;
use crate::components::reports::Reports;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/descriptive-analysis")]
    DescriptiveAnalysis,
    #[at("/predictive-analysis")]
    PredictiveAnalysis,
    #[at("/insights")]
    Insights,
    #[at("/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Dashboard pages, in sidebar order.
    pub const DASHBOARD: [Route; 4] = [
        Route::DescriptiveAnalysis,
        Route::PredictiveAnalysis,
        Route::Insights,
        Route::Reports,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::DescriptiveAnalysis => "Descriptive Analysis",
            Route::PredictiveAnalysis => "Predictive Analysis",
            Route::Insights => "Insights",
            Route::Reports => "Reports",
            Route::NotFound => "Page Not Found",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Home => "fas fa-seedling",
            Route::DescriptiveAnalysis => "fas fa-chart-bar",
            Route::PredictiveAnalysis => "fas fa-chart-line",
            Route::Insights => "fas fa-lightbulb",
            Route::Reports => "fas fa-file-alt",
            Route::NotFound => "fas fa-question-circle",
        }
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::DescriptiveAnalysis => {
            log::trace!("Rendering Descriptive Analysis page");
            html! { <Layout route={routes}><DescriptiveAnalysis /></Layout> }
        }
        Route::PredictiveAnalysis => {
            log::trace!("Rendering Predictive Analysis page");
            html! { <Layout route={routes}><PredictiveAnalysis /></Layout> }
        }
        Route::Insights => {
            log::trace!("Rendering Insights page");
            html! { <Layout route={routes}><Insights /></Layout> }
        }
        Route::Reports => {
            log::trace!("Rendering Reports page");
            html! { <Layout route={routes}><Reports /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout route={routes}><NotFound /></Layout> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::routes::{is_app_path, APP_PATHS};

    #[test]
    fn test_every_app_path_is_routable() {
        for path in APP_PATHS {
            let route = Route::recognize(path);
            assert!(
                matches!(route, Some(ref r) if *r != Route::NotFound),
                "{} resolved to {:?}",
                path,
                route
            );
        }
    }

    #[test]
    fn test_route_paths_match_host_fallback() {
        for route in std::iter::once(Route::Home).chain(Route::DASHBOARD) {
            assert!(is_app_path(&route.to_path()), "{:?}", route);
        }
        assert!(!matches!(Route::recognize("/dashboard"), Some(r) if r != Route::NotFound));
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::PredictiveAnalysis.to_path(), "/predictive-analysis");
        assert_eq!(Route::Insights.to_path(), "/insights");
    }
}
