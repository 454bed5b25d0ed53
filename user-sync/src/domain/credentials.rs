//! OAuth consumer credentials supplied per sync call.

use std::fmt;

use zeroize::Zeroizing;

/// Consumer key and secret used to sign exactly one request.
///
/// The client never stores these; a fresh transport is configured from them
/// on every call. Both values are opaque and forwarded unmodified.
///
/// # Examples
/// ```
/// use user_sync::OAuthCredentials;
///
/// let credentials = OAuthCredentials::new("testKey", "testSecret");
/// assert_eq!(credentials.key(), "testKey");
/// assert_eq!(credentials.secret(), "testSecret");
/// assert!(!format!("{credentials:?}").contains("testSecret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    key: String,
    secret: Zeroizing<String>,
}

impl OAuthCredentials {
    /// Pair a consumer key with its secret.
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Consumer key sent as `oauth_consumer_key`.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Consumer secret used to derive the signing key.
    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
