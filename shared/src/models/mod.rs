//! Data models
//!
//! Transient client-side view models mirroring the HR backend API.
//! The server is the sole source of truth; nothing here is persisted.

pub mod employee;
pub mod identity;
pub mod profile;

// Re-exports
pub use employee::*;
pub use identity::*;
pub use profile::*;
