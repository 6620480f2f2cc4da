//! Shared types for the HR console
//!
//! View-model types exchanged with the HR backend API, shared between
//! the HTTP client and the console controllers.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{AuthResponse, LoginRequest, SignupForm};
pub use models::{
    EmployeeDetail, EmployeeSummary, Identity, ProfileAccess, ProfileRecord, ProfileUpdate, Role,
};
