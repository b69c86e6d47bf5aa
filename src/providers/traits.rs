//! Request executor trait and the crate-wide error type.
//!
//! The [`RequestExecutor`] trait is the seam between the email facade and the
//! transport. The facade only builds [`Request`]s; authentication, host
//! selection and response interpretation live behind this trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Request;

/// Result type alias for cPanel operations.
pub type CpanelResult<T> = std::result::Result<T, CpanelError>;

/// Errors that can occur while executing a cPanel API call.
#[derive(Debug, thiserror::Error)]
pub enum CpanelError {
    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the access hash or user.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// cPanel answered but reported an error for the call.
    #[error("cPanel error: {0}")]
    Remote(String),

    /// The body could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Settings are unusable or could not be loaded or saved.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Executes cPanel API requests.
///
/// Implementations own connection, authentication and account details. The
/// returned value is the decoded response body, handed back to callers as-is.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Performs a single remote call.
    async fn perform_request(&self, request: Request) -> CpanelResult<Value>;
}

#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for std::sync::Arc<E> {
    async fn perform_request(&self, request: Request) -> CpanelResult<Value> {
        (**self).perform_request(request).await
    }
}
