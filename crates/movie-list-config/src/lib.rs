pub mod config;
pub mod paths;

pub use config::{Config, TmdbConfig, UiConfig};
pub use paths::PathManager;
