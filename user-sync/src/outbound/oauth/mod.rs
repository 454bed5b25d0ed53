//! OAuth 1.0a outbound adapter for the user sync service.
//!
//! Provides the reqwest implementation of the `OAuthTransportFactory` port
//! and the HMAC-SHA1 signer it uses.

mod http_transport;
pub mod signer;

pub use http_transport::OAuthHttpTransportFactory;
pub use signer::{OAuthSigner, SigningNonce};
