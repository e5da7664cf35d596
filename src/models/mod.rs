mod movie;
mod query;

pub use movie::{CastMember, Movie};
pub use query::{MovieQuery, MovieQueryParams, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
