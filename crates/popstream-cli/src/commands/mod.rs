pub mod catalog;
pub mod config;
pub mod library;
pub mod lists;
pub mod prompts;
