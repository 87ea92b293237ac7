//! The GitHub user resource.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::{
    FieldSpec, FieldValue, ModelError, Resource, Result, Schema, Session, from_json, to_api_payload,
    to_value,
};

use super::plan::Plan;

/// Endpoint for the authenticated user, the update target for writable
/// profile fields.
const USER_ENDPOINT: &str = "/user";

/// A GitHub user.
///
/// Field names mirror the API's JSON verbatim; every field defaults to
/// `None` until populated by [`from_value`](crate::model::from_value).
/// The optional session handle lets a populated instance submit its own
/// profile updates; it is internal state, not a schema field.
#[derive(Clone, Default)]
pub struct User {
    pub login: Option<String>,
    pub gravatar_url: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub html_url: Option<String>,
    pub id: Option<i64>,
    pub public_repos: Option<i64>,
    pub public_gists: Option<i64>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub hireable: Option<bool>,
    pub plan: Option<Plan>,
    session: Option<Session>,
}

static USER_SCHEMA: Schema = Schema {
    resource: "User",
    fields: &[
        FieldSpec::string("login"),
        FieldSpec::string("gravatar_url"),
        FieldSpec::string("url"),
        FieldSpec::string("name").writable(),
        FieldSpec::string("company").writable(),
        FieldSpec::string("blog").writable(),
        FieldSpec::string("location").writable(),
        FieldSpec::string("email").writable(),
        FieldSpec::string("bio").writable(),
        FieldSpec::string("html_url"),
        FieldSpec::int("id"),
        FieldSpec::int("public_repos"),
        FieldSpec::int("public_gists"),
        FieldSpec::int("followers"),
        FieldSpec::int("following"),
        FieldSpec::date("created_at"),
        FieldSpec::boolean("hireable").writable(),
        FieldSpec::nested("plan"),
    ],
};

impl Resource for User {
    fn schema() -> &'static Schema {
        &USER_SCHEMA
    }

    fn set(&mut self, field: &'static str, value: FieldValue) -> Result<()> {
        match (field, value) {
            ("login", FieldValue::Str(v)) => self.login = Some(v),
            ("gravatar_url", FieldValue::Str(v)) => self.gravatar_url = Some(v),
            ("url", FieldValue::Str(v)) => self.url = Some(v),
            ("name", FieldValue::Str(v)) => self.name = Some(v),
            ("company", FieldValue::Str(v)) => self.company = Some(v),
            ("blog", FieldValue::Str(v)) => self.blog = Some(v),
            ("location", FieldValue::Str(v)) => self.location = Some(v),
            ("email", FieldValue::Str(v)) => self.email = Some(v),
            ("bio", FieldValue::Str(v)) => self.bio = Some(v),
            ("html_url", FieldValue::Str(v)) => self.html_url = Some(v),
            ("id", FieldValue::Int(v)) => self.id = Some(v),
            ("public_repos", FieldValue::Int(v)) => self.public_repos = Some(v),
            ("public_gists", FieldValue::Int(v)) => self.public_gists = Some(v),
            ("followers", FieldValue::Int(v)) => self.followers = Some(v),
            ("following", FieldValue::Int(v)) => self.following = Some(v),
            ("created_at", FieldValue::Date(v)) => self.created_at = Some(v),
            ("hireable", FieldValue::Bool(v)) => self.hireable = Some(v),
            ("plan", FieldValue::Nested(raw)) => self.plan = Some(from_json(&raw, None)?),
            (field, _) => return Err(ModelError::unknown_field("User", field)),
        }
        Ok(())
    }

    fn get(&self, field: &str) -> Option<FieldValue> {
        match field {
            "login" => self.login.clone().map(FieldValue::Str),
            "gravatar_url" => self.gravatar_url.clone().map(FieldValue::Str),
            "url" => self.url.clone().map(FieldValue::Str),
            "name" => self.name.clone().map(FieldValue::Str),
            "company" => self.company.clone().map(FieldValue::Str),
            "blog" => self.blog.clone().map(FieldValue::Str),
            "location" => self.location.clone().map(FieldValue::Str),
            "email" => self.email.clone().map(FieldValue::Str),
            "bio" => self.bio.clone().map(FieldValue::Str),
            "html_url" => self.html_url.clone().map(FieldValue::Str),
            "id" => self.id.map(FieldValue::Int),
            "public_repos" => self.public_repos.map(FieldValue::Int),
            "public_gists" => self.public_gists.map(FieldValue::Int),
            "followers" => self.followers.map(FieldValue::Int),
            "following" => self.following.map(FieldValue::Int),
            "created_at" => self.created_at.map(FieldValue::Date),
            "hireable" => self.hireable.map(FieldValue::Bool),
            "plan" => self
                .plan
                .as_ref()
                .map(|plan| FieldValue::Nested(Value::Object(to_value(plan)))),
            _ => None,
        }
    }

    fn attach_session(&mut self, session: Session) {
        self.session = Some(session);
    }
}

impl User {
    /// Whether this instance can reach the API on its own.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.session.is_some()
    }

    /// Submit this user's writable fields to the API and return the
    /// server's view of the updated user.
    ///
    /// Requires an attached session; fails with [`ModelError::NoSession`]
    /// on a detached instance. Transport failures are forwarded unchanged.
    pub async fn update(&self) -> Result<User> {
        let session = self.session.clone().ok_or(ModelError::NoSession)?;
        let payload = to_api_payload(self);

        tracing::debug!(
            endpoint = USER_ENDPOINT,
            fields = payload.len(),
            "Submitting user update"
        );

        let response = session.update(USER_ENDPOINT, Value::Object(payload)).await?;
        from_json(&response, Some(session))
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The session handle is internal state and stays out of the
        // visible attribute surface.
        f.debug_struct("User")
            .field("login", &self.login)
            .field("gravatar_url", &self.gravatar_url)
            .field("url", &self.url)
            .field("name", &self.name)
            .field("company", &self.company)
            .field("blog", &self.blog)
            .field("location", &self.location)
            .field("email", &self.email)
            .field("bio", &self.bio)
            .field("html_url", &self.html_url)
            .field("id", &self.id)
            .field("public_repos", &self.public_repos)
            .field("public_gists", &self.public_gists)
            .field("followers", &self.followers)
            .field("following", &self.following)
            .field("created_at", &self.created_at)
            .field("hireable", &self.hireable)
            .field("plan", &self.plan)
            .finish()
    }
}
