//! Resource descriptor and coercion engine.
//!
//! This module converts raw JSON maps from the API into typed resource
//! instances and extracts writable edits back out as update payloads.
//!
//! # Example
//!
//! ```ignore
//! use ghmodel::model::{from_value, to_api_payload};
//! use ghmodel::User;
//!
//! let raw = serde_json::json!({"login": "octocat", "id": 1, "name": "The Octocat"});
//! let user: User = from_value(raw.as_object().unwrap(), None)?;
//! let payload = to_api_payload(&user); // {"name": "The Octocat"}
//! ```

mod coerce;
mod errors;
mod schema;
mod transport;
mod value;

pub use coerce::{Resource, from_json, from_value, to_api_payload, to_value};
pub use errors::{ModelError, Result, json_type_name};
pub use schema::{FieldKind, FieldSpec, Schema};
pub use transport::{Session, Transport};
pub use value::{FieldValue, format_timestamp, parse_timestamp};
