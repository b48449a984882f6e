use serde_json::Value;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JsonViewProps {
    pub value: Value,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Pretty-printed response body.
#[function_component(JsonView)]
pub fn json_view(props: &JsonViewProps) -> Html {
    let text = serde_json::to_string_pretty(&props.value).unwrap_or_else(|_| props.value.to_string());

    html! {
        <div class="space-y-2">
            if let Some(title) = &props.title {
                <h4 class="text-sm font-semibold text-[#956346]/80 uppercase tracking-wide">{title}</h4>
            }
            <pre class="bg-base-200 rounded-xl p-4 text-sm overflow-x-auto whitespace-pre-wrap break-words">{text}</pre>
        </div>
    }
}
