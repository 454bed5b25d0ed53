//! Encodes an assignment change into the user sync wire request.
//!
//! The payload schema is fixed by the remote service: the synced user's
//! fields in camelCase plus an `action` discriminator. Assign and unassign
//! bodies differ only in that discriminator.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{JSON_UTF8_CONTENT_TYPE, SyncRequest};
use crate::domain::{SyncIntent, SyncedUser};

/// Path of the task endpoint, appended to the host URL.
pub const SYNC_TASKS_PATH: &str = "/api/sync/v1/tasks";

/// Wire form of one sync task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncTaskPayload {
    /// `ASSIGN` or `UNASSIGN`.
    pub action: String,
    /// Identifier of the application developer (ISV).
    pub developer_identifier: String,
    /// Marketplace account that owns the subscription.
    pub account_identifier: String,
    /// Marketplace user identifier.
    pub user_identifier: String,
    /// User email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login name.
    pub user_name: String,
}

impl SyncTaskPayload {
    fn new(user: &SyncedUser, intent: SyncIntent) -> Self {
        Self {
            action: intent.action().to_owned(),
            developer_identifier: user.developer_identifier.clone(),
            account_identifier: user.account_identifier.clone(),
            user_identifier: user.user_identifier.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            user_name: user.user_name.clone(),
        }
    }
}

/// Absolute task URL for `host_url`.
///
/// ```
/// use user_sync::domain::user_sync::sync_tasks_url;
///
/// assert_eq!(
///     sync_tasks_url("http://localhost:8080/"),
///     "http://localhost:8080/api/sync/v1/tasks"
/// );
/// ```
#[must_use]
pub fn sync_tasks_url(host_url: &str) -> String {
    let base = host_url.strip_suffix('/').unwrap_or(host_url);
    format!("{base}{SYNC_TASKS_PATH}")
}

/// Build the request announcing `intent` for `user`.
#[must_use]
pub fn encode_sync_request(host_url: &str, user: &SyncedUser, intent: SyncIntent) -> SyncRequest {
    SyncRequest {
        url: sync_tasks_url(host_url),
        content_type: JSON_UTF8_CONTENT_TYPE,
        body: encode_body(&SyncTaskPayload::new(user, intent)),
    }
}

fn encode_body(payload: &SyncTaskPayload) -> Vec<u8> {
    // A struct of plain strings always serialises.
    serde_json::to_vec(payload).unwrap_or_default()
}
