use chrono::{Datelike, Utc};

use crate::models::{MovieQuery, MovieQueryParams, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Earliest plausible release year for a motion picture
pub const MIN_YEAR: i32 = 1874;

/// How far past the current year a scheduled release may be listed
const FUTURE_YEAR_WINDOW: i32 = 5;

/// Longest identifier accepted by the movie store
pub const MAX_ID_LEN: usize = 64;

/// Query or path parameter that failed validation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} parameter: {message}")]
pub struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Name of the failing parameter as it appears on the wire
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Reason the parameter was rejected
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the raw list parameters and translates them into a store query.
///
/// Parameters are checked in a fixed order and the first failure is reported.
/// Absent parameters are not filters; absent pagination falls back to page 1
/// with `DEFAULT_PAGE_SIZE` results.
pub fn validate_movies(params: &MovieQueryParams) -> ValidationResult<MovieQuery> {
    validate_movies_for_year(params, Utc::now().year())
}

fn validate_movies_for_year(
    params: &MovieQueryParams,
    current_year: i32,
) -> ValidationResult<MovieQuery> {
    let title_contains = non_empty_text("q", params.q.as_deref())?;
    let genre = non_empty_text("genre", params.genre.as_deref())?;
    let year = params
        .year
        .as_deref()
        .map(|raw| parse_year(raw, current_year))
        .transpose()?;
    let min_rating = params.rating.as_deref().map(parse_rating).transpose()?;
    let actor_id = params
        .actor_id
        .as_deref()
        .map(|raw| check_id_shape("actorid", raw).map(|_| raw.to_string()))
        .transpose()?;
    let page_number = params
        .page_number
        .as_deref()
        .map(|raw| parse_positive("pageNumber", raw, u32::MAX))
        .transpose()?
        .unwrap_or(1);
    let page_size = params
        .page_size
        .as_deref()
        .map(|raw| parse_positive("pageSize", raw, MAX_PAGE_SIZE))
        .transpose()?
        .unwrap_or(DEFAULT_PAGE_SIZE);

    Ok(MovieQuery {
        title_contains,
        genre,
        year,
        min_rating,
        actor_id,
        page_number,
        page_size,
    })
}

/// Validates a movie identifier taken from the request path
pub fn validate_movie_id(id: Option<&str>) -> ValidationResult<()> {
    match id {
        Some(id) => check_id_shape("id", id),
        None => Err(ValidationError::new("id", "must be provided")),
    }
}

fn check_id_shape(field: &'static str, id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters", MAX_ID_LEN),
        ));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::new(
            field,
            "may only contain letters, digits, '-' and '_'",
        ));
    }
    Ok(())
}

fn non_empty_text(field: &'static str, raw: Option<&str>) -> ValidationResult<Option<String>> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => {
            Err(ValidationError::new(field, "must not be empty"))
        }
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}

fn parse_year(raw: &str, current_year: i32) -> ValidationResult<i32> {
    let max_year = current_year + FUTURE_YEAR_WINDOW;
    let out_of_range = || {
        ValidationError::new(
            "year",
            format!("must be a 4 digit year between {} and {}", MIN_YEAR, max_year),
        )
    };

    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(out_of_range());
    }
    let year: i32 = raw.parse().map_err(|_| out_of_range())?;
    if !(MIN_YEAR..=max_year).contains(&year) {
        return Err(out_of_range());
    }
    Ok(year)
}

fn parse_rating(raw: &str) -> ValidationResult<f64> {
    let invalid = || ValidationError::new("rating", "must be a number between 0 and 10");

    let rating: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return Err(invalid());
    }
    Ok(rating)
}

fn parse_positive(field: &'static str, raw: &str, max: u32) -> ValidationResult<u32> {
    let invalid = || {
        if max == u32::MAX {
            ValidationError::new(field, "must be a positive integer")
        } else {
            ValidationError::new(field, format!("must be an integer between 1 and {}", max))
        }
    };

    let value: u32 = raw.trim().parse().map_err(|_| invalid())?;
    if value == 0 || value > max {
        return Err(invalid());
    }
    Ok(value)
}
