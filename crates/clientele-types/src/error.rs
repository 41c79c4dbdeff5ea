//! Validation errors raised by domain rules.

use thiserror::Error;

/// A customer operation was rejected by a business rule.
///
/// These are expected outcomes, reported back to callers as a failed
/// operation rather than as a protocol fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name missing or blank at creation.
    #[error("Customer name is required")]
    NameRequired,
    /// A replacement name was blank.
    #[error("Customer name cannot be empty")]
    BlankName,
    /// Status filter outside the enumerated set.
    #[error("Status must be \"active\" or \"disabled\"")]
    InvalidStatus {
        /// The rejected value.
        value: String,
    },
    /// An update supplied no fields.
    #[error("No fields to update")]
    NoFieldsToUpdate,
}
