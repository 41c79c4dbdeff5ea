//! # clientele-store-sqlite
//!
//! SQLite adapter for customer records.
//! Implements `CustomerRepository` with validated, transactional CRUD.

pub mod migrations;
pub mod repository;
mod query_builder;
mod repository_impl;
mod row_mapping;
pub mod seed;

pub use repository::SqliteCustomerRepository;
