use async_trait::async_trait;
use movie_list_config::TmdbConfig;
use movie_list_models::Movie;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::CatalogError;
use crate::traits::MovieCatalog;

/// Envelope TMDB wraps every movie listing in.
#[derive(Debug, Deserialize)]
struct MovieResponse {
    results: Vec<Movie>,
}

/// TMDB v3 client covering the two listing endpoints the app uses.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_movies(&self, url: String) -> Result<Vec<Movie>, CatalogError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api { status, body });
        }

        // Decode from text rather than response.json() so decode failures
        // carry the serde error instead of a generic reqwest one.
        let body = response.text().await?;
        let parsed: MovieResponse =
            serde_json::from_str(&body).map_err(CatalogError::Decode)?;
        debug!(count = parsed.results.len(), "fetched movies from TMDB");
        Ok(parsed.results)
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn popular(&self) -> Result<Vec<Movie>, CatalogError> {
        let url = format!("{}/movie/popular?api_key={}", self.base_url, self.api_key);
        self.get_movies(url).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let url = format!(
            "{}/search/movie?api_key={}&query={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );
        self.get_movies(url).await
    }
}
