//! GitHub resource types.
//!
//! Each resource declares its wire schema and implements
//! [`Resource`](crate::model::Resource); the coercion engine in
//! [`crate::model`] does the rest.
//!
//! # Module Structure
//!
//! - [`user`] - The user resource, including profile updates
//! - [`plan`] - The billing plan object nested in user responses

pub mod plan;
pub mod user;

pub use plan::Plan;
pub use user::User;
