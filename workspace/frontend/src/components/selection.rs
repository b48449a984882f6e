//! The state / crop / year inputs shared by the analysis forms.

use common::catalog::{CROPS, STATES, YEAR_MAX, YEAR_MIN};
use common::{AnalysisDraft, AnalysisField};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

static STATE_OPTIONS: &[&str] = &STATES;
static CROP_OPTIONS: &[&str] = &CROPS;

/// Current value of the `<input>` or `<select>` that fired `e`.
pub fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

#[derive(Properties, PartialEq)]
pub struct SelectionFieldsProps {
    pub draft: AnalysisDraft,
    pub on_change: Callback<(AnalysisField, String)>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(SelectionFields)]
pub fn selection_fields(props: &SelectionFieldsProps) -> Html {
    let handler = |field: AnalysisField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                on_change.emit((field, value));
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <CatalogSelect
                label="State"
                name={AnalysisField::State.name()}
                placeholder="Select a state"
                options={STATE_OPTIONS}
                value={props.draft.state.clone()}
                disabled={props.disabled}
                onchange={handler(AnalysisField::State)}
            />
            <CatalogSelect
                label="Crop"
                name={AnalysisField::Crop.name()}
                placeholder="Select a crop"
                options={CROP_OPTIONS}
                value={props.draft.crop.clone()}
                disabled={props.disabled}
                onchange={handler(AnalysisField::Crop)}
            />
            <label class="form-control w-full">
                <div class="label"><span class="label-text font-semibold">{"Year"}</span></div>
                <input
                    type="number"
                    name={AnalysisField::Year.name()}
                    class="input input-bordered w-full"
                    min={YEAR_MIN.to_string()}
                    max={YEAR_MAX.to_string()}
                    placeholder={format!("{}-{}", YEAR_MIN, YEAR_MAX)}
                    value={props.draft.year.clone()}
                    required={true}
                    disabled={props.disabled}
                    oninput={{
                        let on_change = props.on_change.clone();
                        Callback::from(move |e: InputEvent| {
                            if let Some(value) = event_value(&e) {
                                on_change.emit((AnalysisField::Year, value));
                            }
                        })
                    }}
                />
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CatalogSelectProps {
    label: AttrValue,
    name: AttrValue,
    placeholder: AttrValue,
    options: &'static [&'static str],
    value: String,
    disabled: bool,
    onchange: Callback<Event>,
}

#[function_component(CatalogSelect)]
fn catalog_select(props: &CatalogSelectProps) -> Html {
    html! {
        <label class="form-control w-full">
            <div class="label"><span class="label-text font-semibold">{&props.label}</span></div>
            <select
                name={props.name.clone()}
                class="select select-bordered w-full"
                required={true}
                disabled={props.disabled}
                onchange={props.onchange.clone()}
            >
                <option value="" selected={props.value.is_empty()} disabled={true}>{&props.placeholder}</option>
                {for props.options.iter().map(|option| html! {
                    <option value={*option} selected={props.value == *option}>{*option}</option>
                })}
            </select>
        </label>
    }
}
