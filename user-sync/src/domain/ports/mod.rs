//! Domain ports and supporting types for the outbound boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod oauth_transport;

#[cfg(test)]
pub(crate) use oauth_transport::{MockOAuthTransportFactory, MockSignedTransport};
pub use oauth_transport::{
    JSON_UTF8_CONTENT_TYPE, OAuthTransportFactory, SignedTransport, SyncRequest,
    TransportResponse, UNKNOWN_ERROR_CODE, UserSyncError,
};
