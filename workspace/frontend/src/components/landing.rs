mod decision_support;
mod hero;
mod mission;
mod team;
mod view;

pub use view::Landing;
