//! Abstract repository trait (port) for customer storage.

use async_trait::async_trait;
use thiserror::Error;

use clientele_types::{
    Customer, CustomerId, CustomerPatch, CustomerStats, CustomerStatus, NewCustomer,
    ValidationError,
};

use crate::query::CustomerQuery;

/// Failure half of every repository outcome.
///
/// `NotFound` and `Validation` are anticipated business outcomes.
/// `Storage` is an unexpected fault in the backing store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested customer does not exist.
    #[error("Customer with ID {id} not found")]
    NotFound { id: CustomerId },
    /// A business rule rejected the operation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A database or I/O error occurred.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    /// True for outcomes callers are expected to handle (not found, invalid input).
    pub fn is_domain_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Validation(_))
    }
}

/// Abstract trait for customer persistence.
///
/// Every mutating call is atomic with respect to other calls on the same
/// store. Implementations live in adapter crates (e.g., `clientele-store-sqlite`).
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fetches one customer.
    async fn get(&self, id: CustomerId) -> Result<Customer, RepositoryError>;

    /// Lists customers ordered by name, optionally filtered by status.
    async fn list(&self, query: CustomerQuery) -> Result<Vec<Customer>, RepositoryError>;

    /// Creates an active customer and returns the stored record.
    async fn add(&self, input: NewCustomer) -> Result<Customer, RepositoryError>;

    /// Overwrites the supplied fields and refreshes `updated_at`.
    async fn update(&self, id: CustomerId, patch: CustomerPatch)
        -> Result<Customer, RepositoryError>;

    /// Sets the status unconditionally and refreshes `updated_at`.
    async fn set_status(
        &self,
        id: CustomerId,
        status: CustomerStatus,
    ) -> Result<Customer, RepositoryError>;

    /// Counts customers per status.
    async fn stats(&self) -> Result<CustomerStats, RepositoryError>;

    /// Marks a customer disabled.
    async fn disable(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        self.set_status(id, CustomerStatus::Disabled).await
    }

    /// Marks a customer active.
    async fn activate(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        self.set_status(id, CustomerStatus::Active).await
    }
}
