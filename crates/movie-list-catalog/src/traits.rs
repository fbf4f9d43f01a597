use async_trait::async_trait;
use movie_list_models::Movie;

use crate::error::CatalogError;

/// A movie metadata catalog the presentation layer can browse and search.
///
/// The registry never calls the catalog; callers fetch movies here and pass
/// them into registry operations.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Currently popular movies, in catalog order.
    async fn popular(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Title search. An empty query is the caller's cue to fall back to
    /// `popular`; the catalog itself rejects it upstream.
    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError>;
}
