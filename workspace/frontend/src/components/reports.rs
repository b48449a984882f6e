mod view;

pub use view::Reports;
