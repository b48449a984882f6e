mod history;
mod view;

pub use view::PredictiveAnalysis;
