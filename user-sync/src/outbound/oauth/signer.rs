//! Two-legged OAuth 1.0a request signing (HMAC-SHA1).
//!
//! Only the consumer key and secret take part; there is no access token.
//! Query parameters of the target URL are signed, the JSON body is not.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use mockable::Clock;
use rand::Rng;
use rand::distributions::Alphanumeric;
use sha1::Sha1;
use url::Url;

use crate::domain::OAuthCredentials;
use crate::domain::ports::UserSyncError;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LENGTH: usize = 32;

/// Per-request values that make a signature unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningNonce {
    /// Random `oauth_nonce`.
    pub nonce: String,
    /// `oauth_timestamp` in Unix seconds.
    pub timestamp: i64,
}

/// Signs requests with one set of consumer credentials.
pub struct OAuthSigner {
    credentials: OAuthCredentials,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl OAuthSigner {
    /// Build a signer for `credentials`, stamping requests from `clock`.
    #[must_use]
    pub const fn new(credentials: OAuthCredentials, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { credentials, clock }
    }

    /// Consumer credentials this signer uses.
    #[must_use]
    pub const fn credentials(&self) -> &OAuthCredentials {
        &self.credentials
    }

    /// Produce the `Authorization` header value for `method` on `url`.
    ///
    /// # Errors
    ///
    /// Returns [`UserSyncError::Transport`] when the signing key is rejected.
    pub fn authorization_header(&self, method: &str, url: &Url) -> Result<String, UserSyncError> {
        let nonce = SigningNonce {
            nonce: random_nonce(),
            timestamp: self.clock.utc().timestamp(),
        };
        authorization_header(method, url, &self.credentials, &nonce)
    }
}

fn random_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Deterministic core of [`OAuthSigner::authorization_header`].
///
/// # Errors
///
/// Returns [`UserSyncError::Transport`] when the signing key is rejected.
pub fn authorization_header(
    method: &str,
    url: &Url,
    credentials: &OAuthCredentials,
    nonce: &SigningNonce,
) -> Result<String, UserSyncError> {
    let timestamp = nonce.timestamp.to_string();
    let oauth_params = [
        ("oauth_consumer_key", credentials.key()),
        ("oauth_nonce", nonce.nonce.as_str()),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_version", OAUTH_VERSION),
    ];

    let base = signature_base_string(method, url, &oauth_params);
    let signature = sign(credentials.secret(), &base)?;

    let mut fields = oauth_params
        .iter()
        .map(|(key, value)| format!("{key}=\"{}\"", percent_encode(value)))
        .collect::<Vec<_>>();
    fields.push(format!("oauth_signature=\"{}\"", percent_encode(&signature)));
    fields.sort();
    Ok(format!("OAuth {}", fields.join(", ")))
}

fn signature_base_string(method: &str, url: &Url, oauth_params: &[(&str, &str)]) -> String {
    let mut params = url
        .query_pairs()
        .map(|(key, value)| (percent_encode(&key), percent_encode(&value)))
        .chain(
            oauth_params
                .iter()
                .map(|(key, value)| (percent_encode(key), percent_encode(value))),
        )
        .collect::<Vec<_>>();
    params.sort();
    let normalized = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(&base_string_uri(url)),
        percent_encode(&normalized)
    )
}

fn base_string_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
        None => format!("{}://{host}{}", url.scheme(), url.path()),
    }
}

fn sign(secret: &str, base: &str) -> Result<String, UserSyncError> {
    let key = format!("{}&", percent_encode(secret));
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|error| UserSyncError::transport(format!("invalid OAuth signing key: {error}")))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// RFC 3986 percent-encoding: only `A-Z a-z 0-9 - . _ ~` pass through.
fn percent_encode(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
