use std::path::Path;

use crate::{
    db::{MovieStore, StoreError, StoreResult},
    models::{Movie, MovieQuery},
};

/// Movie store held entirely in memory
///
/// Loaded once from a JSON array of movie documents and never mutated, so it
/// can be shared across requests without locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Vec<Movie>,
}

impl InMemoryMovieStore {
    /// Creates a store over the given movies, kept in title order
    pub fn new(mut movies: Vec<Movie>) -> Self {
        movies.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { movies }
    }

    /// Loads movie documents from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await?;
        let movies: Vec<Movie> = serde_json::from_slice(&raw)?;

        tracing::info!(
            path = %path.display(),
            movie_count = movies.len(),
            "Loaded movies into memory"
        );

        Ok(Self::new(movies))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    fn matches(movie: &Movie, query: &MovieQuery, title_lower: Option<&str>) -> bool {
        if let Some(needle) = title_lower {
            if !movie.title.to_lowercase().contains(needle) {
                return false;
            }
        }
        if let Some(genre) = &query.genre {
            if !movie.has_genre(genre) {
                return false;
            }
        }
        if let Some(year) = query.year {
            if movie.year != year {
                return false;
            }
        }
        if let Some(min_rating) = query.min_rating {
            if movie.rating < min_rating {
                return false;
            }
        }
        if let Some(actor_id) = &query.actor_id {
            if !movie.features_actor(actor_id) {
                return false;
            }
        }
        true
    }
}

#[async_trait::async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn query_movies(&self, query: &MovieQuery) -> StoreResult<Vec<Movie>> {
        let title_lower = query.title_contains.as_ref().map(|q| q.to_lowercase());
        let skip = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.limit()).unwrap_or(usize::MAX);

        Ok(self
            .movies
            .iter()
            .filter(|movie| Self::matches(movie, query, title_lower.as_deref()))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn get_movie(&self, id: &str) -> StoreResult<Movie> {
        self.movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
