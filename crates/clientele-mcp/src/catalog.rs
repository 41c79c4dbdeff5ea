//! The fixed catalog of customer operations.
//!
//! [`TOOLS`] is the single source of truth for both `tools/list` and
//! `tools/call`: a call is checked against the same parameter slice that
//! is advertised, then decoded into the matching [`Operation`] variant.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use clientele_protocol::mcp::tools::McpToolDefinition;
use clientele_protocol::schema::{build_input_schema, validate_arguments, ParamKind, ParamSpec};
use clientele_registry::{CustomerQuery, CustomerRepository, RepositoryError};
use clientele_types::{CustomerId, CustomerPatch, NewCustomer};

use crate::outcome::ToolOutput;

/// One invocable operation as advertised to clients.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

impl ToolSpec {
    /// Renders the MCP tool definition.
    pub fn definition(&self) -> McpToolDefinition {
        McpToolDefinition {
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            input_schema: build_input_schema(self.params),
        }
    }
}

pub const GET_CUSTOMER: &str = "get_customer";
pub const LIST_CUSTOMERS: &str = "list_customers";
pub const ADD_CUSTOMER: &str = "add_customer";
pub const UPDATE_CUSTOMER: &str = "update_customer";
pub const DISABLE_CUSTOMER: &str = "disable_customer";
pub const ACTIVATE_CUSTOMER: &str = "activate_customer";

/// Every operation, in advertised order.
pub static TOOLS: [ToolSpec; 6] = [
    ToolSpec {
        name: GET_CUSTOMER,
        description: "Retrieve a specific customer by their ID. Returns customer details \
                      including name, email, phone, and status.",
        params: &[ParamSpec::required(
            "customer_id",
            ParamKind::Integer,
            "The unique ID of the customer to retrieve",
        )],
    },
    ToolSpec {
        name: LIST_CUSTOMERS,
        description: "List all customers in the database. Can optionally filter by status \
                      (active or disabled).",
        params: &[ParamSpec::optional(
            "status",
            ParamKind::String,
            "Optional filter by customer status",
        )
        .one_of(&["active", "disabled"])],
    },
    ToolSpec {
        name: ADD_CUSTOMER,
        description: "Add a new customer to the database. Name is required, email and phone \
                      are optional.",
        params: &[
            ParamSpec::required("name", ParamKind::String, "Customer's full name (required)"),
            ParamSpec::optional("email", ParamKind::String, "Customer's email address (optional)"),
            ParamSpec::optional("phone", ParamKind::String, "Customer's phone number (optional)"),
        ],
    },
    ToolSpec {
        name: UPDATE_CUSTOMER,
        description: "Update an existing customer's information. Provide the customer ID and \
                      the fields to update.",
        params: &[
            ParamSpec::required(
                "customer_id",
                ParamKind::Integer,
                "The unique ID of the customer to update",
            ),
            ParamSpec::optional("name", ParamKind::String, "New name (optional)"),
            ParamSpec::optional("email", ParamKind::String, "New email (optional)"),
            ParamSpec::optional("phone", ParamKind::String, "New phone (optional)"),
        ],
    },
    ToolSpec {
        name: DISABLE_CUSTOMER,
        description: "Disable a customer account by setting their status to 'disabled'.",
        params: &[ParamSpec::required(
            "customer_id",
            ParamKind::Integer,
            "The unique ID of the customer to disable",
        )],
    },
    ToolSpec {
        name: ACTIVATE_CUSTOMER,
        description: "Activate a customer account by setting their status to 'active'.",
        params: &[ParamSpec::required(
            "customer_id",
            ParamKind::Integer,
            "The unique ID of the customer to activate",
        )],
    },
];

/// Looks up a tool by name.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|t| t.name == name)
}

/// Tool names in advertised order.
pub fn tool_names() -> Vec<&'static str> {
    TOOLS.iter().map(|t| t.name).collect()
}

/// Why a `tools/call` could not be turned into an [`Operation`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No tool with this name.
    #[error("Tool not found: {name}")]
    UnknownTool { name: String },
    /// Arguments do not fit the tool's parameter list.
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerIdArgs {
    pub customer_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListCustomersArgs {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCustomerArgs {
    pub customer_id: i64,
    #[serde(flatten)]
    pub patch: CustomerPatch,
}

/// A resolved call: one variant per catalog entry, each with typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    GetCustomer(CustomerIdArgs),
    ListCustomers(ListCustomersArgs),
    AddCustomer(NewCustomer),
    UpdateCustomer(UpdateCustomerArgs),
    DisableCustomer(CustomerIdArgs),
    ActivateCustomer(CustomerIdArgs),
}

impl Operation {
    /// Resolves a tool name and its raw arguments.
    ///
    /// `null` arguments are treated as an empty object. No business rules
    /// are applied here; only the argument shape is checked.
    pub fn resolve(name: &str, arguments: &Value) -> Result<Self, CatalogError> {
        let spec = find(name).ok_or_else(|| CatalogError::UnknownTool {
            name: name.to_string(),
        })?;

        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other.clone(),
        };
        validate_arguments(spec.params, &arguments).map_err(|e| {
            CatalogError::InvalidArguments {
                tool: spec.name,
                message: e.to_string(),
            }
        })?;
        let arguments = strip_nulls(arguments);

        let op = match spec.name {
            GET_CUSTOMER => Self::GetCustomer(decode(spec, arguments)?),
            LIST_CUSTOMERS => Self::ListCustomers(decode(spec, arguments)?),
            ADD_CUSTOMER => Self::AddCustomer(decode(spec, arguments)?),
            UPDATE_CUSTOMER => Self::UpdateCustomer(decode(spec, arguments)?),
            DISABLE_CUSTOMER => Self::DisableCustomer(decode(spec, arguments)?),
            ACTIVATE_CUSTOMER => Self::ActivateCustomer(decode(spec, arguments)?),
            other => {
                return Err(CatalogError::UnknownTool {
                    name: other.to_string(),
                })
            }
        };
        Ok(op)
    }

    /// Catalog name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetCustomer(_) => GET_CUSTOMER,
            Self::ListCustomers(_) => LIST_CUSTOMERS,
            Self::AddCustomer(_) => ADD_CUSTOMER,
            Self::UpdateCustomer(_) => UPDATE_CUSTOMER,
            Self::DisableCustomer(_) => DISABLE_CUSTOMER,
            Self::ActivateCustomer(_) => ACTIVATE_CUSTOMER,
        }
    }

    /// Runs the operation against the store.
    pub async fn apply(self, repo: &dyn CustomerRepository) -> Result<ToolOutput, RepositoryError> {
        match self {
            Self::GetCustomer(args) => {
                let customer = repo.get(CustomerId::new(args.customer_id)).await?;
                Ok(ToolOutput::record(customer))
            }
            Self::ListCustomers(args) => {
                let query = CustomerQuery { status: args.status };
                Ok(ToolOutput::listing(repo.list(query).await?))
            }
            Self::AddCustomer(input) => {
                let customer = repo.add(input).await?;
                let message = format!("Customer created with ID {}", customer.id);
                Ok(ToolOutput::record(customer).with_message(message))
            }
            Self::UpdateCustomer(args) => {
                let id = CustomerId::new(args.customer_id);
                let customer = repo.update(id, args.patch).await?;
                Ok(ToolOutput::record(customer)
                    .with_message(format!("Customer {id} updated successfully")))
            }
            Self::DisableCustomer(args) => {
                let id = CustomerId::new(args.customer_id);
                let customer = repo.disable(id).await?;
                Ok(ToolOutput::record(customer)
                    .with_message(format!("Customer {id} has been disabled")))
            }
            Self::ActivateCustomer(args) => {
                let id = CustomerId::new(args.customer_id);
                let customer = repo.activate(id).await?;
                Ok(ToolOutput::record(customer)
                    .with_message(format!("Customer {id} has been activated")))
            }
        }
    }
}

/// Drops `null` members so that "explicitly null" reads as "not supplied".
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        other => other,
    }
}

fn decode<T: DeserializeOwned>(spec: &ToolSpec, arguments: Value) -> Result<T, CatalogError> {
    serde_json::from_value(arguments).map_err(|e| CatalogError::InvalidArguments {
        tool: spec.name,
        message: e.to_string(),
    })
}
