use common::catalog::{CROPS, STATES, YEAR_MAX, YEAR_MIN};
use yew::prelude::*;

/// Coverage of the yield models: which states, crops and years can be queried.
#[function_component(DescriptiveAnalysis)]
pub fn descriptive_analysis() -> Html {
    let filter = use_state(String::new);

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = crate::components::selection::event_value(&e) {
                filter.set(value);
            }
        })
    };

    let needle = filter.trim().to_lowercase();
    let matches = |name: &&str| needle.is_empty() || name.to_lowercase().contains(&needle);
    let states: Vec<&str> = STATES.iter().copied().filter(|s| matches(s)).collect();
    let crops: Vec<&str> = CROPS.iter().copied().filter(|c| matches(c)).collect();

    html! {
        <div class="space-y-6">
            <div class="stats stats-vertical md:stats-horizontal shadow w-full bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-[#99b83b]"><i class="fas fa-map-marked-alt text-3xl"></i></div>
                    <div class="stat-title">{"States"}</div>
                    <div class="stat-value text-[#956346]">{STATES.len()}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-[#37acd0]"><i class="fas fa-seedling text-3xl"></i></div>
                    <div class="stat-title">{"Crops"}</div>
                    <div class="stat-value text-[#956346]">{CROPS.len()}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-[#e26c52]"><i class="fas fa-calendar-alt text-3xl"></i></div>
                    <div class="stat-title">{"Years"}</div>
                    <div class="stat-value text-[#956346]">{format!("{}-{}", YEAR_MIN, YEAR_MAX)}</div>
                    <div class="stat-desc">{format!("{} seasons", YEAR_MAX - YEAR_MIN + 1)}</div>
                </div>
            </div>

            <label class="input input-bordered flex items-center gap-2 max-w-md bg-base-100">
                <i class="fas fa-search opacity-60"></i>
                <input type="search" class="grow" placeholder="Filter states and crops" oninput={on_filter} value={(*filter).clone()} />
            </label>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <CatalogCard title="States" icon="fas fa-map" entries={states} />
                <CatalogCard title="Crops" icon="fas fa-leaf" entries={crops} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CatalogCardProps {
    title: AttrValue,
    icon: AttrValue,
    entries: Vec<&'static str>,
}

#[function_component(CatalogCard)]
fn catalog_card(props: &CatalogCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-[#956346]">
                    <i class={props.icon.clone()}></i>
                    {&props.title}
                    <span class="badge badge-ghost">{props.entries.len()}</span>
                </h3>
                if props.entries.is_empty() {
                    <p class="text-sm opacity-60">{"Nothing matches the filter."}</p>
                } else {
                    <div class="flex flex-wrap gap-2">
                        {for props.entries.iter().map(|entry| html! {
                            <span class="badge badge-lg badge-outline border-[#99b83b]/40">{*entry}</span>
                        })}
                    </div>
                }
            </div>
        </div>
    }
}
