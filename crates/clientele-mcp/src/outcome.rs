//! JSON payloads carried in `tools/call` text content.

use serde::Serialize;

use clientele_types::Customer;

/// Payload returned to the caller for one tool invocation.
///
/// Serialized untagged; every shape carries a `success` flag.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    /// A single customer, optionally with a confirmation message.
    Record {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        customer: Customer,
    },
    /// A customer listing.
    Listing {
        success: bool,
        count: usize,
        customers: Vec<Customer>,
    },
    /// A business operation that did not go through.
    Failure { success: bool, error: String },
}

impl ToolOutput {
    pub fn record(customer: Customer) -> Self {
        Self::Record {
            success: true,
            message: None,
            customer,
        }
    }

    pub fn listing(customers: Vec<Customer>) -> Self {
        Self::Listing {
            success: true,
            count: customers.len(),
            customers,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            success: false,
            error: error.into(),
        }
    }

    /// Attaches a confirmation message to a record payload.
    pub fn with_message(self, text: impl Into<String>) -> Self {
        match self {
            Self::Record {
                success, customer, ..
            } => Self::Record {
                success,
                message: Some(text.into()),
                customer,
            },
            other => other,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failure { .. })
    }
}
