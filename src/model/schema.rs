//! Declarative field schemas for API resources.
//!
//! Each resource type exposes a static [`Schema`]: a table of
//! [`FieldSpec`] entries naming every wire field, its [`FieldKind`], and
//! whether it may be sent back to the API on update. The coercion engine
//! walks this table in both directions, so a resource never reads raw JSON
//! directly.

use super::errors::{ModelError, Result};

/// The declared kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text field.
    Str,
    /// Whole-number field.
    Int,
    /// RFC 3339 timestamp field.
    Date,
    /// Boolean field.
    Bool,
    /// Nested sub-resource (object or sequence of objects).
    Nested,
}

impl FieldKind {
    /// Name of the raw JSON shape this kind accepts, for error messages.
    pub fn expected(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "integer",
            Self::Date => "RFC 3339 timestamp string",
            Self::Bool => "boolean",
            Self::Nested => "object or array",
        }
    }
}

/// A single field declaration: wire name, kind, and writability.
///
/// Fields are read-only by default; chain [`FieldSpec::writable`] for the
/// subset the API accepts on update.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire field name, verbatim from the API's JSON.
    pub name: &'static str,
    /// Declared kind.
    pub kind: FieldKind,
    /// Whether this field may appear in an update payload.
    pub writable: bool,
}

impl FieldSpec {
    /// Declare a string field.
    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::Str)
    }

    /// Declare an integer field.
    pub const fn int(name: &'static str) -> Self {
        Self::new(name, FieldKind::Int)
    }

    /// Declare a timestamp field.
    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    /// Declare a boolean field.
    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    /// Declare a nested sub-resource field.
    pub const fn nested(name: &'static str) -> Self {
        Self::new(name, FieldKind::Nested)
    }

    /// Mark this field as writable.
    pub const fn writable(mut self) -> Self {
        self.writable = true;
        self
    }

    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            writable: false,
        }
    }
}

/// A resource type's complete field schema.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Resource type name, for error messages.
    pub resource: &'static str,
    /// All declared fields.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Reject schemas that declare the same field name more than once.
    ///
    /// A field appearing in two kind groups has no defined coercion; the
    /// engine validates before populating so malformed schemas fail fast
    /// instead of silently letting the last declaration win.
    pub fn validate(&self) -> Result<()> {
        for (i, spec) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|prev| prev.name == spec.name) {
                return Err(ModelError::duplicate_field(self.resource, spec.name));
            }
        }
        Ok(())
    }

    /// Look up a field declaration by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Names of all declared fields, in declaration order.
    ///
    /// This is the resource's public attribute surface; internal state such
    /// as the session back-reference is not a schema field and never appears
    /// here.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }

    /// The subset of fields that may be sent back on update.
    pub fn writable_fields(&self) -> impl Iterator<Item = &FieldSpec> + '_ {
        self.fields.iter().filter(|spec| spec.writable)
    }
}
