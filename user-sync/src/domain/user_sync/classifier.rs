//! Maps raw user sync responses onto success or a typed failure.
//!
//! Precedence is fixed: any 2xx succeeds without looking at the body, 429 is
//! a rate limit regardless of the body, and everything else becomes
//! `SyncFailed`. The error body is trusted only when it is a JSON object with
//! string `code` and `message` fields; otherwise the code degrades to
//! `UNKNOWN_ERROR`.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::{TransportResponse, UNKNOWN_ERROR_CODE, UserSyncError};

const HTTP_TOO_MANY_REQUESTS: u16 = 429;
const BODY_PREVIEW_CHAR_LIMIT: usize = 160;

#[derive(Debug, Deserialize)]
struct ErrorBodyDto {
    code: String,
    message: String,
}

/// Classify one response.
///
/// # Errors
///
/// Returns [`UserSyncError::RateLimited`] for HTTP 429 and
/// [`UserSyncError::SyncFailed`] for every other non-2xx status.
///
/// # Examples
/// ```
/// use user_sync::UserSyncError;
/// use user_sync::domain::ports::TransportResponse;
/// use user_sync::domain::user_sync::classify_response;
///
/// let response = TransportResponse {
///     status: 404,
///     body: br#"{"code":"SUBSCRIPTION_NOT_FOUND","message":"gone"}"#.to_vec(),
/// };
/// assert_eq!(
///     classify_response(&response),
///     Err(UserSyncError::sync_failed("SUBSCRIPTION_NOT_FOUND", "gone"))
/// );
/// ```
pub fn classify_response(response: &TransportResponse) -> Result<(), UserSyncError> {
    match response.status {
        200..=299 => Ok(()),
        HTTP_TOO_MANY_REQUESTS => Err(UserSyncError::rate_limited()),
        status => Err(sync_failure(status, &response.body)),
    }
}

fn sync_failure(status: u16, body: &[u8]) -> UserSyncError {
    match parse_error_body(body) {
        Some(ErrorBodyDto { code, message }) => UserSyncError::sync_failed(code, message),
        None => UserSyncError::sync_failed(UNKNOWN_ERROR_CODE, fallback_message(status, body)),
    }
}

fn parse_error_body(body: &[u8]) -> Option<ErrorBodyDto> {
    // Only an object counts; serde would otherwise accept `["code", "message"]`.
    let value = serde_json::from_slice::<Value>(body).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

fn fallback_message(status: u16, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("user sync failed with status {status}")
    } else {
        format!("user sync failed with status {status}: {preview}")
    }
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact
        .chars()
        .take(BODY_PREVIEW_CHAR_LIMIT)
        .collect::<String>();
    if compact.chars().count() > BODY_PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
