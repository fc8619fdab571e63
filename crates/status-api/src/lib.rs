//! # status-api
//!
//! HTTP layer for the custom status plugin built on Axum.
//!
//! Every plugin route sits behind the identity gate, which reads the
//! caller identity the host injected into the request and rejects the
//! request with 401 when there is none.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
