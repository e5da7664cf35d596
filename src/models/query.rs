use serde::Deserialize;

/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Upper bound on page size, bounding the cost of a single result set
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Raw query string of `GET /api/movies`
///
/// Everything is kept as text so validation can report which parameter was
/// malformed instead of failing extraction as a whole.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieQueryParams {
    pub q: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    #[serde(rename = "actorid")]
    pub actor_id: Option<String>,
    #[serde(rename = "pageNumber")]
    pub page_number: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Validated movie query handed to the store
#[derive(Debug, Clone, PartialEq)]
pub struct MovieQuery {
    /// Case-insensitive title substring
    pub title_contains: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    /// Inclusive lower bound on rating
    pub min_rating: Option<f64>,
    pub actor_id: Option<String>,
    /// 1-based page number
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            title_contains: None,
            genre: None,
            year: None,
            min_rating: None,
            actor_id: None,
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MovieQuery {
    /// Number of results to skip before the requested page
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Maximum number of results in the requested page
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_first_page() {
        let query = MovieQuery::default();
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 100);
    }

    #[test]
    fn test_offset_later_page() {
        let query = MovieQuery {
            page_number: 4,
            page_size: 25,
            ..MovieQuery::default()
        };
        assert_eq!(query.offset(), 75);
    }

    #[test]
    fn test_offset_does_not_overflow() {
        let query = MovieQuery {
            page_number: u32::MAX,
            page_size: MAX_PAGE_SIZE,
            ..MovieQuery::default()
        };
        assert_eq!(query.offset(), u64::from(u32::MAX - 1) * 1000);
    }

    #[test]
    fn test_params_deserialize_wire_names() {
        let params: MovieQueryParams = serde_json::from_value(serde_json::json!({
            "q": "matrix",
            "actorid": "nm0000206",
            "pageNumber": "2",
            "pageSize": "10"
        }))
        .unwrap();

        assert_eq!(params.q.as_deref(), Some("matrix"));
        assert_eq!(params.actor_id.as_deref(), Some("nm0000206"));
        assert_eq!(params.page_number.as_deref(), Some("2"));
        assert_eq!(params.page_size.as_deref(), Some("10"));
        assert_eq!(params.genre, None);
    }
}
