//! Client for the app marketplace user sync service.
//!
//! Notifies the remote service when a user is assigned to, or unassigned
//! from, a purchased application. Each call issues one OAuth-signed POST and
//! classifies the response into success, a rate-limit signal, or a sync
//! failure carrying the remote error code.
//!
//! The crate follows a ports-and-adapters split:
//!
//! - **domain**: the synced user model, the request codec, the API client and
//!   its response classifier, plus the transport port it drives.
//! - **outbound**: a reqwest-backed transport that signs requests with
//!   two-legged OAuth 1.0a.
//! - **settings**: transport settings loaded through `OrthoConfig`.

pub mod domain;
pub mod outbound;
pub mod settings;

pub use domain::ports::UserSyncError;
pub use domain::{OAuthCredentials, SyncIntent, SyncedUser, UserSyncApiClient};
