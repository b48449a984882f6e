pub mod descriptive;
pub mod insights;
pub mod landing;
pub mod layout;
pub mod not_found;
pub mod predictive;
pub mod reports;
pub mod result;
pub mod selection;
pub mod shell;
