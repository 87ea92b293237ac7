//! The billing plan object nested inside authenticated-user responses.

use crate::model::{FieldSpec, FieldValue, ModelError, Resource, Result, Schema};

/// A GitHub billing plan, embedded in [`User`](super::User) responses.
///
/// Plans are read-only; no field is writable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub name: Option<String>,
    pub space: Option<i64>,
    pub collaborators: Option<i64>,
    pub private_repos: Option<i64>,
}

static PLAN_SCHEMA: Schema = Schema {
    resource: "Plan",
    fields: &[
        FieldSpec::string("name"),
        FieldSpec::int("space"),
        FieldSpec::int("collaborators"),
        FieldSpec::int("private_repos"),
    ],
};

impl Resource for Plan {
    fn schema() -> &'static Schema {
        &PLAN_SCHEMA
    }

    fn set(&mut self, field: &'static str, value: FieldValue) -> Result<()> {
        match (field, value) {
            ("name", FieldValue::Str(v)) => self.name = Some(v),
            ("space", FieldValue::Int(v)) => self.space = Some(v),
            ("collaborators", FieldValue::Int(v)) => self.collaborators = Some(v),
            ("private_repos", FieldValue::Int(v)) => self.private_repos = Some(v),
            (field, _) => return Err(ModelError::unknown_field("Plan", field)),
        }
        Ok(())
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => self.name.clone().map(FieldValue::Str),
            "space" => self.space.map(FieldValue::Int),
            "collaborators" => self.collaborators.map(FieldValue::Int),
            "private_repos" => self.private_repos.map(FieldValue::Int),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{from_value, to_api_payload};
    use serde_json::json;

    #[test]
    fn test_schema_is_valid() {
        Plan::schema().validate().unwrap();
    }

    #[test]
    fn test_from_value() {
        let raw = json!({"name": "pro", "space": 976562499, "collaborators": 0, "private_repos": 9999});
        let plan: Plan = from_value(raw.as_object().unwrap(), None).unwrap();
        assert_eq!(plan.name.as_deref(), Some("pro"));
        assert_eq!(plan.space, Some(976562499));
        assert_eq!(plan.collaborators, Some(0));
        assert_eq!(plan.private_repos, Some(9999));
    }

    #[test]
    fn test_nothing_is_writable() {
        let raw = json!({"name": "pro", "space": 100});
        let plan: Plan = from_value(raw.as_object().unwrap(), None).unwrap();
        assert!(to_api_payload(&plan).is_empty());
    }
}
