//! # clientele-registry
//!
//! Port definitions (abstract traits) for customer record storage.
//! Adapter crates implement these traits.

pub mod query;
pub mod repository;

pub use query::CustomerQuery;
pub use repository::{CustomerRepository, RepositoryError};
