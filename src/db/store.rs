//! Movie store abstraction
//!
//! The HTTP layer only sees this trait. Backends decide how a `MovieQuery`
//! is executed but must report a missing document as `StoreError::NotFound`
//! so the controller can tell it apart from an operational failure.

use crate::models::{Movie, MovieQuery};

/// Errors raised by movie store backends
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to movie documents
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieStore: Send + Sync {
    /// Returns one page of movies matching every filter set on the query
    ///
    /// An empty page is a successful result, not an error.
    async fn query_movies(&self, query: &MovieQuery) -> StoreResult<Vec<Movie>>;

    /// Fetches a single movie by its identifier
    async fn get_movie(&self, id: &str) -> StoreResult<Movie>;

    /// Checks that the backend is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
