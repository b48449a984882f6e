mod scenario_fields;
mod view;

pub use view::Insights;
