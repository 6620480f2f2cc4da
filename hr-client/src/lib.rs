//! HR Client - HTTP client for the HR backend
//!
//! Provides credentialed REST calls against the HR backend API.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HrClient, safe_decode};

// Re-export shared types for convenience
pub use shared::client::{AuthResponse, LoginRequest, SignupForm};
