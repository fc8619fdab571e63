//! Custom Axum extractors.

pub mod identity;
pub mod status_body;

pub use identity::CallerIdentity;
pub use status_body::StatusBody;
