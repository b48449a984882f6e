use common::{ScenarioDraft, ScenarioField};
use yew::prelude::*;

use crate::components::selection::event_value;

#[derive(Properties, PartialEq)]
pub struct ScenarioFieldsProps {
    pub draft: ScenarioDraft,
    pub on_change: Callback<(ScenarioField, String)>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Signed percentage inputs for the what-if simulation.
#[function_component(ScenarioFields)]
pub fn scenario_fields(props: &ScenarioFieldsProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            {for ScenarioField::ALL.into_iter().map(|field| {
                let (min, max) = field.bounds();
                let oninput = {
                    let on_change = props.on_change.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(value) = event_value(&e) {
                            on_change.emit((field, value));
                        }
                    })
                };
                html! {
                    <label class="form-control w-full" key={field.name()}>
                        <div class="label">
                            <span class="label-text font-semibold">{field.label()}</span>
                            <span class="label-text-alt opacity-60">{format!("{}% to +{}%", min, max)}</span>
                        </div>
                        <input
                            type="text"
                            inputmode="numeric"
                            pattern="[+-]?[0-9]+"
                            name={field.name()}
                            class="input input-bordered w-full"
                            placeholder={field.placeholder()}
                            value={props.draft.get(field).to_string()}
                            required={true}
                            disabled={props.disabled}
                            {oninput}
                        />
                    </label>
                }
            })}
        </div>
    }
}
