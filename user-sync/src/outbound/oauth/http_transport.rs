//! Reqwest-backed OAuth transport adapter.
//!
//! This adapter owns transport details only: URL parsing, request signing,
//! header assembly, and reading the raw status and body. Interpreting the
//! response is left to the domain classifier.

use std::sync::Arc;
use std::time::Duration;

use mockable::{Clock, DefaultClock};
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::signer::OAuthSigner;
use crate::domain::OAuthCredentials;
use crate::domain::ports::{
    OAuthTransportFactory, SignedTransport, SyncRequest, TransportResponse, UserSyncError,
};
use crate::settings::UserSyncSettings;

/// Builds signed reqwest transports, one per set of credentials.
pub struct OAuthHttpTransportFactory {
    timeout: Duration,
    user_agent: String,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl OAuthHttpTransportFactory {
    /// Build a factory with an explicit request timeout and user agent.
    /// ```rust,ignore
    /// let factory = OAuthHttpTransportFactory::new(Duration::from_secs(30), "my-agent/1.0");
    /// let client = UserSyncApiClient::new(Arc::new(factory));
    /// ```
    #[must_use]
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self::with_clock(timeout, user_agent, Arc::new(DefaultClock))
    }

    /// Build a factory whose signatures are timestamped from `clock`.
    #[must_use]
    pub fn with_clock(
        timeout: Duration,
        user_agent: impl Into<String>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
            clock,
        }
    }

    /// Build a factory from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &UserSyncSettings) -> Self {
        Self::new(settings.request_timeout(), settings.user_agent())
    }
}

impl OAuthTransportFactory for OAuthHttpTransportFactory {
    fn transport(
        &self,
        credentials: &OAuthCredentials,
    ) -> Result<Box<dyn SignedTransport>, UserSyncError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(map_transport_error)?;
        Ok(Box::new(OAuthHttpTransport {
            client,
            signer: OAuthSigner::new(credentials.clone(), Arc::clone(&self.clock)),
        }))
    }
}

/// One reqwest client bound to one signer.
struct OAuthHttpTransport {
    client: Client,
    signer: OAuthSigner,
}

impl SignedTransport for OAuthHttpTransport {
    fn post_json(&self, request: &SyncRequest) -> Result<TransportResponse, UserSyncError> {
        let url = Url::parse(&request.url).map_err(|error| {
            UserSyncError::transport(format!("invalid user sync URL '{}': {error}", request.url))
        })?;
        let authorization = self.signer.authorization_header("POST", &url)?;

        debug!(
            %url,
            consumer_key = self.signer.credentials().key(),
            body_bytes = request.body.len(),
            "sending user sync request"
        );
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, request.content_type)
            .header(AUTHORIZATION, authorization)
            .body(request.body.clone())
            .send()
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        // A failed body read still leaves a classifiable status.
        let body = match response.bytes() {
            Ok(bytes) => bytes.to_vec(),
            Err(error) => {
                debug!(status, %error, "user sync response body unreadable");
                Vec::new()
            }
        };
        debug!(status, body_bytes = body.len(), "user sync response received");
        Ok(TransportResponse { status, body })
    }
}

fn map_transport_error(error: reqwest::Error) -> UserSyncError {
    debug!(%error, "user sync transport failed");
    if error.is_timeout() {
        UserSyncError::transport(format!("request timed out: {error}"))
    } else if error.is_connect() {
        UserSyncError::transport(format!("connection failed: {error}"))
    } else {
        UserSyncError::transport(error.to_string())
    }
}
