pub mod frontend;
pub mod health;
