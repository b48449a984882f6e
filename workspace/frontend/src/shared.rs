pub mod error;
pub mod json_view;
pub mod loading;
pub mod toast;
