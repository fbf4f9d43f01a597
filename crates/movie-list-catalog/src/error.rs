use thiserror::Error;

/// Failures talking to the movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode catalog response: {0}")]
    Decode(#[source] serde_json::Error),
}
