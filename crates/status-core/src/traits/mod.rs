//! Contracts the plugin consumes from the host.

pub mod user_store;

pub use user_store::UserStore;
