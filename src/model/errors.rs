use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when coercing raw API data into typed resources.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A field's raw value cannot be coerced to its declared kind.
    #[error("schema mismatch for field `{field}`: expected {expected}, got {actual}")]
    SchemaMismatch {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// A field name is declared more than once in a resource schema.
    #[error("invalid schema for {resource}: field `{field}` declared more than once")]
    DuplicateField {
        resource: &'static str,
        field: &'static str,
    },

    /// A schema names a field the resource does not handle.
    #[error("unknown field `{field}` on {resource}")]
    UnknownField {
        resource: &'static str,
        field: &'static str,
    },

    /// The resource has no session attached and cannot reach the API.
    #[error("no session attached to resource")]
    NoSession,

    /// Failure forwarded from the underlying transport layer.
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl ModelError {
    /// Create a schema mismatch error for a field, describing the raw value.
    #[inline]
    pub fn mismatch(field: &'static str, expected: &'static str, actual: &Value) -> Self {
        Self::SchemaMismatch {
            field,
            expected,
            actual: json_type_name(actual).to_string(),
        }
    }

    /// Create a duplicate field schema error.
    #[inline]
    pub fn duplicate_field(resource: &'static str, field: &'static str) -> Self {
        Self::DuplicateField { resource, field }
    }

    /// Create an unknown field error.
    #[inline]
    pub fn unknown_field(resource: &'static str, field: &'static str) -> Self {
        Self::UnknownField { resource, field }
    }

    /// Create a transport error.
    #[inline]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Check if this error is a schema mismatch.
    #[inline]
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. })
    }
}

/// Short JSON type description used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
