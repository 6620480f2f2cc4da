//! HTTP client for the HR backend REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::multipart;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::client::{AuthResponse, LoginRequest, SignupForm};
use shared::models::{EmployeeDetail, EmployeeSummary, Identity, ProfileRecord, ProfileUpdate};
use tracing::debug;

/// Decode a JSON body, yielding `None` instead of failing on malformed
/// input. Callers that must never error on a bad body (auth error
/// extraction) go through this.
pub fn safe_decode(body: &str) -> Option<Value> {
    serde_json::from_str(body).ok()
}

/// HTTP client for making credentialed requests to the HR backend.
///
/// Session credentials ride along on every call: the cookie jar is
/// shared across requests and an optional bearer token is attached when
/// configured.
#[derive(Debug, Clone)]
pub struct HrClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HrClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path, "GET");
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path, "PUT");
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path, "POST");
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a multipart form body
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ClientResult<T> {
        debug!(path, "POST (multipart)");
        let mut request = self.client.post(self.url(path)).multipart(form);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response.
    ///
    /// Any non-success status aborts the caller's operation chain with
    /// the status code and the raw body text.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Request {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }

    // ========== Identity / Profile API ==========

    /// Get the current session's user summary
    pub async fn me(&self) -> ClientResult<Identity> {
        self.get("/me").await
    }

    /// Get the current user's profile record
    pub async fn my_profile(&self) -> ClientResult<ProfileRecord> {
        self.get("/me/profile").await
    }

    /// Save a partial profile update; the server merges, recomputes the
    /// completion percentage, and returns the full updated record.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<ProfileRecord> {
        self.put("/me/profile", update).await
    }

    // ========== Admin Directory API ==========

    /// List all employees
    pub async fn employees(&self) -> ClientResult<Vec<EmployeeSummary>> {
        self.get("/admin/employees/all").await
    }

    /// Get one employee's full record
    pub async fn employee(&self, id: i64) -> ClientResult<EmployeeDetail> {
        self.get(&format!("/admin/employees/{}", id)).await
    }

    // ========== Auth API ==========

    /// Login with email and password
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        self.post("/login", request).await
    }

    /// Sign up a new account via multipart form
    pub async fn signup(&self, form: &SignupForm) -> ClientResult<AuthResponse> {
        let mut multipart = multipart::Form::new();
        for (name, value) in signup_parts(form) {
            multipart = multipart.text(name, value);
        }
        self.post_form("/signup", multipart).await
    }
}

/// Text parts of the signup multipart body. The phone part is omitted
/// entirely when absent rather than sent empty.
fn signup_parts(form: &SignupForm) -> Vec<(&'static str, String)> {
    let mut parts = vec![
        ("name", form.name.clone()),
        ("email", form.email.clone()),
        ("password", form.password.clone()),
    ];
    if let Some(phone) = &form.phone {
        parts.push(("phone", phone.clone()));
    }
    parts.push(("role", form.role.clone()));
    parts
}
