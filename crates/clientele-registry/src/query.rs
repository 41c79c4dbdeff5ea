//! Query types for customer listings.

use serde::{Deserialize, Serialize};

use clientele_types::{CustomerStatus, ValidationError};

/// Filter for customer listings.
///
/// The status is kept as the caller sent it; the repository decides
/// whether it is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerQuery {
    /// Only customers with this status.
    pub status: Option<String>,
}

impl CustomerQuery {
    /// Creates a query that matches all customers.
    pub fn all() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Parses the status filter. An empty string means no filter.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStatus`] for values outside the
    /// enumerated set.
    pub fn status_filter(&self) -> Result<Option<CustomerStatus>, ValidationError> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::parse::<CustomerStatus>)
            .transpose()
    }
}

impl From<CustomerStatus> for CustomerQuery {
    fn from(status: CustomerStatus) -> Self {
        Self::all().with_status(status.as_str())
    }
}
