//! The coercion engine: raw JSON maps in, typed resources out, and back.

use serde_json::{Map, Value};

use super::errors::{ModelError, Result, json_type_name};
use super::schema::Schema;
use super::transport::Session;
use super::value::FieldValue;

/// A typed API resource with a declared field schema.
///
/// Implementations are plain structs with one `Option` field per schema
/// entry; `set` and `get` are explicit matches over the schema's field
/// names, so the mapping between wire names and struct fields is visible
/// in one place per resource.
pub trait Resource: Default {
    /// The static field schema for this resource type.
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Store a coerced value in the named field.
    ///
    /// The engine only passes values already coerced to the field's declared
    /// kind; an unrecognized name means the schema and the struct disagree
    /// and surfaces as [`ModelError::UnknownField`].
    fn set(&mut self, field: &'static str, value: FieldValue) -> Result<()>;

    /// Read the named field back as a coerced value, `None` if unset.
    fn get(&self, field: &str) -> Option<FieldValue>;

    /// Attach a session back-reference for later API calls.
    ///
    /// Resources without API operations of their own ignore it.
    fn attach_session(&mut self, _session: Session) {}
}

/// Build a resource from a raw JSON map.
///
/// Every declared field starts at its absent default (`R::default()`).
/// Keys present in `raw` are coerced per the schema; absent keys are not an
/// error and leave the default in place. The outcome is atomic: the first
/// coercion failure drops the partially populated instance and propagates.
/// `raw` itself is never mutated.
pub fn from_value<R: Resource>(raw: &Map<String, Value>, session: Option<Session>) -> Result<R> {
    let schema = R::schema();
    schema.validate()?;

    let mut resource = R::default();
    for spec in schema.fields {
        let Some(raw_value) = raw.get(spec.name) else {
            continue;
        };
        if let Some(value) = FieldValue::coerce(spec.kind, spec.name, raw_value)? {
            resource.set(spec.name, value)?;
        }
    }

    if let Some(session) = session {
        resource.attach_session(session);
    }
    Ok(resource)
}

/// Build a resource from any JSON value, rejecting non-objects.
pub fn from_json<R: Resource>(raw: &Value, session: Option<Session>) -> Result<R> {
    match raw.as_object() {
        Some(map) => from_value(map, session),
        None => Err(ModelError::SchemaMismatch {
            field: R::schema().resource,
            expected: "object",
            actual: json_type_name(raw).to_string(),
        }),
    }
}

/// Extract the writable subset of a resource as an API-ready payload.
///
/// Unset fields are omitted; fields not declared writable never appear,
/// whatever their current value. An instance with no writable field set
/// yields an empty map.
pub fn to_api_payload<R: Resource>(resource: &R) -> Map<String, Value> {
    R::schema()
        .writable_fields()
        .filter_map(|spec| {
            resource
                .get(spec.name)
                .map(|value| (spec.name.to_string(), value.to_wire()))
        })
        .collect()
}

/// Dump every set field of a resource, all groups, in wire representation.
///
/// Used for nested sub-resource serialization and for introspection; unlike
/// [`to_api_payload`] this ignores writability.
pub fn to_value<R: Resource>(resource: &R) -> Map<String, Value> {
    R::schema()
        .field_names()
        .filter_map(|name| {
            resource
                .get(name)
                .map(|value| (name.to_string(), value.to_wire()))
        })
        .collect()
}
