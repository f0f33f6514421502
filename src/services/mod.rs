pub mod ai;
pub mod catalog;
pub mod matching;
pub mod parser;
pub mod repair;
