use yew::prelude::*;

use super::breadcrumb::Breadcrumb;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub route: Route,
}

/// Frame for dashboard pages: page header, breadcrumb, content.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-full">
            <div class="bg-base-100/80 backdrop-blur border-b border-[#99b83b]/20 px-6 py-4">
                <h1 class="text-2xl font-bold text-[#956346] flex items-center gap-3" id="page-title">
                    <i class={classes!(props.route.icon(), "text-[#99b83b]")}></i>
                    { props.route.title() }
                </h1>
                <Breadcrumb route={props.route.clone()} />
            </div>
            <div class="flex-1 p-6 max-w-7xl w-full mx-auto">
                { for props.children.iter() }
            </div>
        </div>
    }
}
