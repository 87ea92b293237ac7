//! Typed field values and raw-JSON coercion.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::errors::{ModelError, Result};
use super::schema::FieldKind;

/// A coerced field value, one variant per schema kind.
///
/// `Nested` carries the raw JSON through to the owning resource, which
/// coerces it recursively with the nested type's own schema.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Date(DateTime<Utc>),
    Bool(bool),
    Nested(Value),
}

impl FieldValue {
    /// Coerce a raw JSON value to the declared kind.
    ///
    /// Returns `Ok(None)` for JSON null, which is treated the same as an
    /// absent key: the field keeps its default. Any value of the wrong
    /// shape is a schema mismatch; nothing is stringified or defaulted
    /// silently. Malformed timestamps fail the same way.
    pub fn coerce(kind: FieldKind, field: &'static str, raw: &Value) -> Result<Option<Self>> {
        if raw.is_null() {
            return Ok(None);
        }

        let coerced = match kind {
            FieldKind::Str => raw.as_str().map(|s| Self::Str(s.to_string())),
            FieldKind::Int => raw.as_i64().map(Self::Int),
            FieldKind::Date => match raw.as_str() {
                Some(s) => Some(Self::Date(parse_timestamp(field, s)?)),
                None => None,
            },
            FieldKind::Bool => raw.as_bool().map(Self::Bool),
            FieldKind::Nested => {
                (raw.is_object() || raw.is_array()).then(|| Self::Nested(raw.clone()))
            }
        };

        match coerced {
            Some(value) => Ok(Some(value)),
            None => Err(ModelError::mismatch(field, kind.expected(), raw)),
        }
    }

    /// Convert back to the API's wire representation.
    pub fn to_wire(&self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.clone()),
            Self::Int(i) => Value::from(*i),
            Self::Date(dt) => Value::String(format_timestamp(*dt)),
            Self::Bool(b) => Value::Bool(*b),
            Self::Nested(v) => v.clone(),
        }
    }
}

/// Parse an API timestamp string (RFC 3339, e.g. `2008-01-14T04:33:35Z`).
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ModelError::SchemaMismatch {
            field,
            expected: FieldKind::Date.expected(),
            actual: format!("malformed string {raw:?}"),
        })
}

/// Format a timestamp the way the API emits them.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_string() {
        let value = FieldValue::coerce(FieldKind::Str, "login", &json!("octocat"))
            .unwrap()
            .unwrap();
        assert_eq!(value, FieldValue::Str("octocat".to_string()));
    }

    #[test]
    fn test_coerce_string_rejects_number() {
        let err = FieldValue::coerce(FieldKind::Str, "login", &json!(42)).unwrap_err();
        assert!(err.is_schema_mismatch());
        assert!(err.to_string().contains("login"));
    }

    #[test]
    fn test_coerce_int() {
        let value = FieldValue::coerce(FieldKind::Int, "id", &json!(42))
            .unwrap()
            .unwrap();
        assert_eq!(value, FieldValue::Int(42));
    }

    #[test]
    fn test_coerce_int_rejects_numeric_string() {
        let err = FieldValue::coerce(FieldKind::Int, "id", &json!("42")).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn test_coerce_int_rejects_fraction() {
        let err = FieldValue::coerce(FieldKind::Int, "id", &json!(1.5)).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn test_coerce_date() {
        let value = FieldValue::coerce(FieldKind::Date, "created_at", &json!("2008-01-14T04:33:35Z"))
            .unwrap()
            .unwrap();
        match value {
            FieldValue::Date(dt) => assert_eq!(dt.timestamp(), 1200285215),
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn test_coerce_date_rejects_malformed() {
        let err =
            FieldValue::coerce(FieldKind::Date, "created_at", &json!("yesterday")).unwrap_err();
        assert!(err.is_schema_mismatch());
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_coerce_bool() {
        let value = FieldValue::coerce(FieldKind::Bool, "hireable", &json!(true))
            .unwrap()
            .unwrap();
        assert_eq!(value, FieldValue::Bool(true));
    }

    #[test]
    fn test_coerce_bool_rejects_string_literal() {
        let err = FieldValue::coerce(FieldKind::Bool, "hireable", &json!("true")).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn test_coerce_null_is_absent() {
        for kind in [
            FieldKind::Str,
            FieldKind::Int,
            FieldKind::Date,
            FieldKind::Bool,
            FieldKind::Nested,
        ] {
            assert!(FieldValue::coerce(kind, "f", &Value::Null).unwrap().is_none());
        }
    }

    #[test]
    fn test_coerce_nested_accepts_object_and_array() {
        let obj = json!({"name": "pro"});
        let value = FieldValue::coerce(FieldKind::Nested, "plan", &obj)
            .unwrap()
            .unwrap();
        assert_eq!(value, FieldValue::Nested(obj));

        let arr = json!([{"name": "a"}]);
        assert!(FieldValue::coerce(FieldKind::Nested, "plan", &arr)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_coerce_nested_rejects_scalar() {
        let err = FieldValue::coerce(FieldKind::Nested, "plan", &json!("pro")).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn test_to_wire_round_trip() {
        assert_eq!(FieldValue::Str("a".into()).to_wire(), json!("a"));
        assert_eq!(FieldValue::Int(7).to_wire(), json!(7));
        assert_eq!(FieldValue::Bool(false).to_wire(), json!(false));

        let dt = parse_timestamp("t", "2008-01-14T04:33:35Z").unwrap();
        assert_eq!(FieldValue::Date(dt).to_wire(), json!("2008-01-14T04:33:35Z"));
    }

    #[test]
    fn test_format_timestamp_uses_z_suffix() {
        let dt = parse_timestamp("t", "2020-06-01T00:00:00+00:00").unwrap();
        assert_eq!(format_timestamp(dt), "2020-06-01T00:00:00Z");
    }
}
