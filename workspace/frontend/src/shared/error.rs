use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FailureNoticeProps {
    pub message: String,
}

/// A panel's failure message. Rendered once, inside the panel that failed.
#[function_component(FailureNotice)]
pub fn failure_notice(props: &FailureNoticeProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error" role="alert">
            <i class="fas fa-exclamation-circle text-xl"></i>
            <div class="flex flex-col gap-1">
                <span class="font-semibold">{"Something went wrong"}</span>
                <span class="text-sm">{&props.message}</span>
            </div>
        </div>
    }
}
