//! # status-core
//!
//! Core crate for the custom status plugin. Contains the unified error
//! system, configuration schemas, the user record shape shared with the
//! host, and the [`traits::UserStore`] contract the plugin calls through.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
