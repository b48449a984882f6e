mod view;

pub use view::DescriptiveAnalysis;
