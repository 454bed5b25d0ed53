//! Transport settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "appmarket-user-sync/0.1";

/// Settings for the outbound OAuth transport.
///
/// Values come from `USER_SYNC_*` environment variables or a config file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SYNC")]
pub struct UserSyncSettings {
    /// Whole-request timeout in seconds; `0` selects the default.
    #[ortho_config(default = 30)]
    pub request_timeout_seconds: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: Option<String>,
}

impl UserSyncSettings {
    /// Return the configured timeout, falling back to the default.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        match self.request_timeout_seconds {
            0 => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            seconds => Duration::from_secs(seconds),
        }
    }

    /// Return the configured user agent, falling back to the default.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
