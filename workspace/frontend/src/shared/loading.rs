use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4" role="status">
            <span class={classes!("loading", "loading-spinner", "text-success", "loading-md")}></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-[#956346]/70">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Inline spinner for submit buttons.
#[function_component(ButtonSpinner)]
pub fn button_spinner() -> Html {
    html! { <span class="loading loading-spinner loading-sm"></span> }
}
