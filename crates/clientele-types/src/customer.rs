//! Customer identity, lifecycle status and record types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Store-assigned identity of a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Wraps a raw identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Account status. New customers start `Active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Disabled,
}

impl CustomerStatus {
    /// All statuses, in declaration order.
    pub const ALL: [CustomerStatus; 2] = [CustomerStatus::Active, CustomerStatus::Disabled];

    /// Returns the wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "disabled" => Ok(Self::Disabled),
            other => Err(ValidationError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: CustomerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl NewCustomer {
    /// Creates an input with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Checks the name and returns it trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameRequired`] when the name is blank.
    pub fn validated_name(&self) -> Result<&str, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(name)
    }
}

/// Partial update of a customer. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CustomerPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Checks the patch against the update rules and normalises the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoFieldsToUpdate`] for an empty patch and
    /// [`ValidationError::BlankName`] when a blank replacement name is given.
    pub fn validated(self) -> Result<Self, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::NoFieldsToUpdate);
        }
        let name = match self.name {
            Some(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::BlankName);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };
        Ok(Self { name, ..self })
    }
}

/// Record counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total: u64,
    pub active: u64,
    pub disabled: u64,
}
