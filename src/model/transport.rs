//! Transport seam between resources and the HTTP layer.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::errors::Result;

/// Minimal contract the surrounding application's HTTP client fulfils.
///
/// Resources never perform I/O themselves: `update` submits an already
/// encoded payload to the given API endpoint and returns the decoded JSON
/// response. Authentication, retries, and rate limiting all live behind
/// this trait; failures come back as [`ModelError::Transport`] and are not
/// retried here.
///
/// [`ModelError::Transport`]: super::errors::ModelError::Transport
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit an update payload for the resource at `endpoint`.
    async fn update(&self, endpoint: &str, payload: Value) -> Result<Value>;
}

/// Shared handle to a transport, held by resources as a back-reference.
///
/// The surrounding application owns the transport; instances only clone the
/// handle so they can perform their own `update` calls. Dropping a resource
/// never tears down transport state.
pub type Session = Arc<dyn Transport>;
