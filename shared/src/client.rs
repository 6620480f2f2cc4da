//! Auth API DTOs shared between the HTTP client and the console.

use serde::{Deserialize, Serialize};

/// Default role assigned to self-service signups.
pub const DEFAULT_SIGNUP_ROLE: &str = "employee";

/// Login request for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup form posted as multipart to `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Optional; omitted from the multipart body when empty.
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone: None,
            role: DEFAULT_SIGNUP_ROLE.to_string(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        let phone = phone.into();
        if !phone.trim().is_empty() {
            self.phone = Some(phone);
        }
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

/// Response body shared by `POST /login` and `POST /signup`.
///
/// Success carries a redirect target (plus role/name/token on login);
/// failure carries an error message. All fields are optional so a
/// partially-populated body still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
