pub mod confirm;
pub mod health;
pub mod parse;
