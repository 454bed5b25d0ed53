//! User sync API client.
//!
//! The client owns one call end to end: encode the request, obtain a
//! transport scoped to the caller's credentials, send exactly one POST, and
//! classify the answer. It keeps no state between calls beyond the transport
//! factory, so one instance can serve concurrent callers.

use std::sync::Arc;

use crate::domain::ports::{OAuthTransportFactory, UserSyncError};
use crate::domain::{OAuthCredentials, SyncIntent, SyncedUser};

mod classifier;
mod codec;

pub use classifier::classify_response;
pub use codec::{SYNC_TASKS_PATH, SyncTaskPayload, encode_sync_request, sync_tasks_url};

/// Notifies the user sync service of assignment changes.
#[derive(Clone)]
pub struct UserSyncApiClient {
    transports: Arc<dyn OAuthTransportFactory>,
}

impl UserSyncApiClient {
    /// Build a client around an OAuth transport factory.
    #[must_use]
    pub const fn new(transports: Arc<dyn OAuthTransportFactory>) -> Self {
        Self { transports }
    }

    /// Report that `synced_user` was assigned to the application.
    ///
    /// # Errors
    ///
    /// - [`UserSyncError::RateLimited`] when the service answers 429.
    /// - [`UserSyncError::SyncFailed`] for any other non-success answer.
    /// - [`UserSyncError::Transport`] when no answer was received.
    pub fn sync_user_assignment(
        &self,
        host_url: &str,
        oauth_key: &str,
        oauth_secret: &str,
        synced_user: &SyncedUser,
    ) -> Result<(), UserSyncError> {
        self.sync(host_url, oauth_key, oauth_secret, synced_user, SyncIntent::Assign)
    }

    /// Report that `synced_user` was unassigned from the application.
    ///
    /// # Errors
    ///
    /// Same as [`UserSyncApiClient::sync_user_assignment`].
    pub fn sync_user_unassignment(
        &self,
        host_url: &str,
        oauth_key: &str,
        oauth_secret: &str,
        synced_user: &SyncedUser,
    ) -> Result<(), UserSyncError> {
        self.sync(host_url, oauth_key, oauth_secret, synced_user, SyncIntent::Unassign)
    }

    /// Send one sync task for `intent`.
    ///
    /// # Errors
    ///
    /// Same as [`UserSyncApiClient::sync_user_assignment`].
    pub fn sync(
        &self,
        host_url: &str,
        oauth_key: &str,
        oauth_secret: &str,
        synced_user: &SyncedUser,
        intent: SyncIntent,
    ) -> Result<(), UserSyncError> {
        let request = encode_sync_request(host_url, synced_user, intent);
        let credentials = OAuthCredentials::new(oauth_key, oauth_secret);
        let transport = self.transports.transport(&credentials)?;
        let response = transport.post_json(&request)?;
        classify_response(&response)
    }
}
