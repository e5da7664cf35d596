pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod validation;

#[cfg(test)]
mod test_support;
