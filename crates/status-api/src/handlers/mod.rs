//! Request handlers for the plugin routes.

pub mod hello;
pub mod status;
