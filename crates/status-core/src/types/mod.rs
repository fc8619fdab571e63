//! Shared domain types.

pub mod id;
pub mod user;

pub use id::UserId;
pub use user::UserRecord;
