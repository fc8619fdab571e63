//! Axum middleware stack.

pub mod cors;
pub mod identity;
pub mod logging;
