pub mod memory;
pub mod postgres;
mod store;

pub use memory::InMemoryMovieStore;
pub use postgres::{create_pool, PgMovieStore};
pub use store::{MovieStore, StoreError, StoreResult};

#[cfg(test)]
pub use store::MockMovieStore;
