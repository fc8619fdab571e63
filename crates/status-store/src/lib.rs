//! # status-store
//!
//! A user store for running the plugin without a host. Records live in a
//! concurrent map and can be seeded from a JSON file at startup.

pub mod memory;
pub mod seed;

pub use memory::MemoryUserStore;
pub use seed::load_seed_file;
