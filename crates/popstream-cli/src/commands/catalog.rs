use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_list_catalog::{MovieCatalog, TmdbClient};
use movie_list_config::Config;

use crate::output::Output;

/// Build a TMDB client, or explain how to configure one.
pub fn catalog_client(config: &Config) -> Result<TmdbClient> {
    if !config.has_api_key() {
        return Err(eyre!(
            "No TMDB API key configured. Set one with 'popstream config tmdb --api-key <KEY>'"
        ));
    }
    Ok(TmdbClient::new(&config.tmdb))
}

pub async fn run_browse(config: &Config, output: &Output) -> Result<()> {
    let client = catalog_client(config)?;
    let movies = client.popular().await?;
    output.movies("Popular movies", &movies);
    Ok(())
}

pub async fn run_search(query: &str, config: &Config, output: &Output) -> Result<()> {
    let client = catalog_client(config)?;
    // the original app treats an empty search box as "show popular"
    let movies = if query.trim().is_empty() {
        client.popular().await?
    } else {
        client.search(query).await?
    };
    if movies.is_empty() {
        output.warn(format!("No movies matched \"{}\"", query));
        return Ok(());
    }
    output.movies(&format!("Results for \"{}\"", query), &movies);
    Ok(())
}
