//! ghmodel - Typed resource models for the GitHub REST API.
//!
//! This library converts raw JSON maps returned by an HTTP client into typed
//! resource objects, and converts local edits back into API-ready payloads.
//! Each resource declares a field schema (strings, integers, timestamps,
//! booleans, nested sub-resources); the coercion engine walks that schema in
//! both directions.
//!
//! # Example
//!
//! ```ignore
//! use ghmodel::{from_value, to_api_payload, User};
//!
//! let raw = serde_json::json!({"login": "octocat", "id": 1});
//! let user: User = from_value(raw.as_object().unwrap(), None)?;
//! assert_eq!(user.login.as_deref(), Some("octocat"));
//!
//! // Only writable fields go back out.
//! let payload = to_api_payload(&user);
//! assert!(!payload.contains_key("id"));
//! ```
//!
//! The crate also provides [`OrderedMap`], an insertion-order-preserving
//! key/value container used to keep configuration and response key order
//! stable.

pub mod github;
pub mod model;
pub mod ordered_map;

pub use github::{Plan, User};
pub use model::{
    FieldKind, FieldSpec, FieldValue, ModelError, Resource, Schema, Session, Transport,
    from_json, from_value, to_api_payload, to_value,
};
pub use ordered_map::OrderedMap;
