use serde::{Deserialize, Serialize};

/// A movie document as stored in the movie store and returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Store identifier (e.g., "tt0133093")
    pub id: String,
    pub title: String,
    pub year: i32,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Average user rating on a 0-10 scale
    pub rating: f64,
    #[serde(default)]
    pub votes: Option<u64>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// An actor credited on a movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    /// Actor identifier (e.g., "nm0000206")
    pub actor_id: String,
    pub name: String,
    #[serde(default)]
    pub characters: Vec<String>,
}

impl Movie {
    /// Case-insensitive match against one of the movie's genres
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }

    /// Whether the given actor appears in the cast
    pub fn features_actor(&self, actor_id: &str) -> bool {
        self.cast.iter().any(|member| member.actor_id == actor_id)
    }
}
