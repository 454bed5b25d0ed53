//! Domain primitives, ports, and the user sync client.
//!
//! Purpose: turn assignment changes into wire requests and classify the
//! remote service's answers. Nothing here performs I/O directly; requests
//! leave through the [`ports::OAuthTransportFactory`] port.
//!
//! Public surface:
//! - `SyncedUser` and `SyncIntent`: the value passed to a sync call.
//! - `OAuthCredentials`: per-call consumer key and secret.
//! - `UserSyncApiClient`: the assign/unassign operations.

mod credentials;
pub mod ports;
mod synced_user;
pub mod user_sync;

pub use self::credentials::OAuthCredentials;
pub use self::synced_user::{SyncIntent, SyncedUser};
pub use self::user_sync::UserSyncApiClient;
