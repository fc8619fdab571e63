//! # Plugin Custom Status
//!
//! Lets an authenticated user set the emoji/text status shown next to
//! their name. The status is stored as a JSON string under
//! [`USER_PROPS_KEY_CUSTOM_STATUS`] in the user's `props`, through the
//! host's [`UserStore`](status_core::traits::UserStore).
//!
//! ## Concurrency
//!
//! An update is a fetch, an in-memory merge and a write. Two updates for
//! the same user racing each other are not serialized: whichever write
//! reaches the store last wins.

pub mod codec;
pub mod error;
pub mod models;
pub mod plugin;
pub mod service;

pub use error::StatusError;
pub use models::{CustomStatus, USER_PROPS_KEY_CUSTOM_STATUS};
pub use plugin::{CustomStatusPlugin, PluginInfo};
pub use service::StatusService;
