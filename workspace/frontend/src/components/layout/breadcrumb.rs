use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub route: Route,
}

/// Dashboard pages sit one level below home.
fn trail(route: &Route) -> [Route; 2] {
    [Route::Home, route.clone()]
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &Props) -> Html {
    let items = trail(&props.route);

    html! {
        <div class="breadcrumbs text-sm pt-1">
            <ul>
                {for items.iter().enumerate().map(|(idx, item)| {
                    let is_last = idx == items.len() - 1;
                    html! {
                        <li>
                            if is_last {
                                <span class="text-[#37acd0] font-semibold">{item.title()}</span>
                            } else {
                                <Link<Route> to={item.clone()} classes="hover:text-[#37acd0]">
                                    {item.title()}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
