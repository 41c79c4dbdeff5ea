//! # clientele-types
//!
//! Domain types for customer record management.
//! Pure data and validation rules; storage and transport live elsewhere.

pub mod customer;
pub mod error;

// Re-exports for convenience.
pub use customer::{
    Customer, CustomerId, CustomerPatch, CustomerStats, CustomerStatus, NewCustomer,
};
pub use error::ValidationError;
