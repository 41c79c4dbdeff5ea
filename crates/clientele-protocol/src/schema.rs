//! Parameter schemas for MCP tool inputs.
//!
//! A tool declares its parameters once as a slice of [`ParamSpec`]. The
//! same slice renders the advertised `inputSchema` and checks the shape
//! of incoming `arguments`.

use serde_json::{Map, Value};
use thiserror::Error;

/// Primitive JSON type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A JSON integer (no fractional part).
    Integer,
    /// A JSON string.
    String,
}

impl ParamKind {
    /// JSON Schema type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.is_i64(),
            Self::String => value.is_string(),
        }
    }
}

/// Declaration of a single named parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Argument key.
    pub name: &'static str,
    /// Expected JSON type.
    pub kind: ParamKind,
    /// Whether the argument must be supplied.
    pub required: bool,
    /// Human-readable description.
    pub description: &'static str,
    /// Advertised set of allowed values. Empty means unconstrained.
    ///
    /// Only documented; membership is a business rule checked downstream.
    pub allowed: &'static [&'static str],
}

impl ParamSpec {
    /// A required parameter.
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
            allowed: &[],
        }
    }

    /// An optional parameter.
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
            allowed: &[],
        }
    }

    /// Restricts the advertised values.
    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        Self { allowed, ..self }
    }
}

/// Argument shape mismatches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// `arguments` was not a JSON object.
    #[error("arguments must be an object")]
    NotAnObject,
    /// A required argument is absent.
    #[error("missing required argument: {name}")]
    MissingField { name: String },
    /// An argument the tool does not declare.
    #[error("unexpected argument: {name}")]
    UnexpectedField { name: String },
    /// An argument of the wrong JSON type.
    #[error("argument {name} must be of type {expected}")]
    WrongType { name: String, expected: &'static str },
}

/// Builds a JSON Schema `inputSchema` object from parameter declarations.
pub fn build_input_schema(params: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in params {
        let mut prop = Map::new();
        prop.insert("type".to_string(), Value::String(param.kind.as_str().into()));
        if !param.allowed.is_empty() {
            let values = param
                .allowed
                .iter()
                .map(|v| Value::String((*v).to_string()))
                .collect();
            prop.insert("enum".to_string(), Value::Array(values));
        }
        prop.insert(
            "description".to_string(),
            Value::String(param.description.to_string()),
        );
        properties.insert(param.name.to_string(), Value::Object(prop));
        if param.required {
            required.push(Value::String(param.name.to_string()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }

    Value::Object(schema)
}

/// Checks that `input` has exactly the shape `params` declares.
///
/// Rejects unknown keys, missing required keys and values of the wrong
/// JSON type. An explicit `null` counts as "not supplied".
pub fn validate_arguments(params: &[ParamSpec], input: &Value) -> Result<(), SchemaError> {
    let input_obj = input.as_object().ok_or(SchemaError::NotAnObject)?;

    if let Some(extra) = input_obj
        .keys()
        .find(|key| !params.iter().any(|p| p.name == key.as_str()))
    {
        return Err(SchemaError::UnexpectedField {
            name: extra.clone(),
        });
    }

    for param in params {
        match input_obj.get(param.name) {
            None | Some(Value::Null) => {
                if param.required {
                    return Err(SchemaError::MissingField {
                        name: param.name.to_string(),
                    });
                }
            }
            Some(value) if !param.kind.accepts(value) => {
                return Err(SchemaError::WrongType {
                    name: param.name.to_string(),
                    expected: param.kind.as_str(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}
