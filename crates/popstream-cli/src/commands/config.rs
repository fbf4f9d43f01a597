use color_eyre::Result;
use movie_list_config::{Config, PathManager};
use serde_json::json;

use crate::commands::prompts;
use crate::output::Output;

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    // count and slice by chars, not bytes, so multibyte keys can't panic
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        let prefix: String = secret.chars().take(4).collect();
        format!("{}****", prefix)
    }
}

pub fn run_config_show(full: bool, paths: &PathManager, output: &Output) -> Result<()> {
    let config = Config::load(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load configuration: {}", e))?;
    let api_key = if full {
        config.tmdb.api_key.clone()
    } else {
        mask(&config.tmdb.api_key)
    };
    output.json(&json!({
        "config_file": paths.config_file().display().to_string(),
        "tmdb": {
            "api_key": api_key,
            "base_url": config.tmdb.base_url,
        },
        "ui": {
            "error_display_seconds": config.ui.error_display_seconds,
        },
    }));
    Ok(())
}

pub fn run_config_tmdb(
    api_key: Option<String>,
    paths: &PathManager,
    output: &Output,
) -> Result<()> {
    let mut config = Config::load(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load configuration: {}", e))?;

    let key = match api_key {
        Some(key) => key,
        None => prompts::prompt_string("TMDB API key", None)?,
    };
    if key.trim().is_empty() {
        output.error("API key cannot be empty");
        return Ok(());
    }

    config.tmdb.api_key = key.trim().to_string();
    paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create configuration directories: {}", e))?;
    config
        .save(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save configuration: {}", e))?;
    output.success("TMDB API key saved");
    Ok(())
}
