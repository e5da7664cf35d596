use sqlx::{postgres::PgPoolOptions, types::Json, PgPool, Postgres, QueryBuilder};

use crate::{
    db::{MovieStore, StoreError, StoreResult},
    models::{Movie, MovieQuery},
};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Movie store backed by JSONB documents in PostgreSQL
///
/// Each row of the `movies` table holds one movie document keyed by its id.
#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }
}

/// Escapes LIKE wildcards so the search term only matches literally
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Builds the paged document query for a validated `MovieQuery`
fn build_movies_query(query: &MovieQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT doc FROM movies WHERE TRUE");

    if let Some(term) = &query.title_contains {
        builder
            .push(" AND lower(doc->>'title') LIKE ")
            .push_bind(like_pattern(term));
    }

    if let Some(genre) = &query.genre {
        builder
            .push(
                " AND EXISTS (SELECT 1 FROM jsonb_array_elements_text(doc->'genres') AS g(name) \
                 WHERE lower(g.name) = lower(",
            )
            .push_bind(genre.clone())
            .push("))");
    }

    if let Some(year) = query.year {
        builder.push(" AND (doc->>'year')::int = ").push_bind(year);
    }

    if let Some(min_rating) = query.min_rating {
        builder
            .push(" AND (doc->>'rating')::float8 >= ")
            .push_bind(min_rating);
    }

    if let Some(actor_id) = &query.actor_id {
        builder
            .push(" AND doc->'cast' @> jsonb_build_array(jsonb_build_object('actorId', ")
            .push_bind(actor_id.clone())
            .push("::text))");
    }

    builder
        .push(" ORDER BY lower(doc->>'title'), id LIMIT ")
        .push_bind(i64::try_from(query.limit()).unwrap_or(i64::MAX))
        .push(" OFFSET ")
        .push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

    builder
}

#[async_trait::async_trait]
impl MovieStore for PgMovieStore {
    async fn query_movies(&self, query: &MovieQuery) -> StoreResult<Vec<Movie>> {
        let mut builder = build_movies_query(query);

        let rows: Vec<Json<Movie>> = builder
            .build_query_scalar()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            result_count = rows.len(),
            page_number = query.page_number,
            page_size = query.page_size,
            "Movie query executed"
        );

        Ok(rows.into_iter().map(|Json(movie)| movie).collect())
    }

    async fn get_movie(&self, id: &str) -> StoreResult<Movie> {
        let row: Option<Json<Movie>> =
            sqlx::query_scalar("SELECT doc FROM movies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|Json(movie)| movie)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
