//! Driven port for sending OAuth-signed requests to the user sync service.
//!
//! The domain owns the request shape and the raw response contract so the
//! client and its classifier stay independent of any HTTP library.

use crate::domain::OAuthCredentials;

use super::define_port_error;

/// Content type sent with every sync request.
pub const JSON_UTF8_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Error code used when a failure response does not carry a usable code.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// Fully encoded sync request, ready to be signed and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Absolute target URL.
    pub url: String,
    /// Value of the `Content-Type` header.
    pub content_type: &'static str,
    /// JSON request body.
    pub body: Vec<u8>,
}

/// Raw HTTP answer handed back to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body; empty when the remote sent none.
    pub body: Vec<u8>,
}

define_port_error! {
    /// Failures surfaced by a user sync call.
    pub enum UserSyncError {
        /// The remote answered HTTP 429; the caller must slow down.
        RateLimited => "user sync request rate limited",
        /// The remote rejected the change with a non-success status.
        SyncFailed {
            /// Remote error code, or `UNKNOWN_ERROR`.
            code: String,
            /// Human-readable description.
            message: String,
        } => "{message}",
        /// No HTTP response was obtained (connection, TLS, or URL failure).
        Transport {
            /// Description of the underlying failure.
            message: String,
        } => "user sync transport failed: {message}",
    }
}

impl UserSyncError {
    /// Return whether the remote asked the caller to back off.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    /// Error code of a [`UserSyncError::SyncFailed`] failure.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::SyncFailed { code, .. } => Some(code.as_str()),
            Self::RateLimited | Self::Transport { .. } => None,
        }
    }
}

/// Something that can execute one signed POST.
#[cfg_attr(test, mockall::automock)]
pub trait SignedTransport: Send {
    /// Sign and send `request`, returning the status and body as received.
    ///
    /// # Errors
    ///
    /// Returns [`UserSyncError::Transport`] when no HTTP response was
    /// obtained. Non-success statuses are not errors at this level.
    fn post_json(&self, request: &SyncRequest) -> Result<TransportResponse, UserSyncError>;
}

/// Builds transports scoped to one set of OAuth credentials.
#[cfg_attr(test, mockall::automock)]
pub trait OAuthTransportFactory: Send + Sync {
    /// Configure a transport that signs with `credentials`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let transport = factory.transport(&OAuthCredentials::new("key", "secret"))?;
    /// let response = transport.post_json(&request)?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`UserSyncError::Transport`] when the transport cannot be
    /// constructed.
    fn transport(
        &self,
        credentials: &OAuthCredentials,
    ) -> Result<Box<dyn SignedTransport>, UserSyncError>;
}
