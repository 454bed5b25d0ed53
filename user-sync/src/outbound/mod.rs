//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and a concrete
//! transport. They contain no classification logic.

pub mod oauth;
