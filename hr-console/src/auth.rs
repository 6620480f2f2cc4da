//! Auth controller
//!
//! Login and signup form handlers: client-side required-field checks,
//! the POST itself, and the redirect/error presentation. Validation
//! here is a convenience, not a security boundary; the server checks
//! everything again.

use crate::api::AuthApi;
use crate::error::{ConsoleError, ConsoleResult};
use crate::notify::{Toast, show_toast};
use crate::timer::Timer;
use crate::view::{AuthView, Notice, ToastView};
use hr_client::ClientError;
use shared::client::{AuthResponse, LoginRequest, SignupForm};
use std::sync::Arc;
use tracing::warn;

/// Minimum password length accepted client-side.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Navigation fallback when the server provides no redirect.
pub const DEFAULT_REDIRECT: &str = "/";

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter your email and password.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 6 characters.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and retry.";
pub const SIGNUP_TOAST_MESSAGE: &str = "Account created";

/// Raw signup form input before validation.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    /// Defaults to "employee" when unset.
    pub role: Option<String>,
}

pub struct AuthController<A, V, T> {
    api: A,
    view: Arc<V>,
    timer: T,
    toast: Toast,
}

impl<A, V, T> AuthController<A, V, T>
where
    A: AuthApi,
    V: AuthView + ToastView + 'static,
    T: Timer + Clone + 'static,
{
    pub fn new(api: A, view: Arc<V>, timer: T) -> Self {
        Self {
            api,
            view,
            timer,
            toast: Toast::new(SIGNUP_TOAST_MESSAGE),
        }
    }

    /// Override the signup toast message/duration.
    pub fn with_toast(mut self, toast: Toast) -> Self {
        self.toast = toast;
        self
    }

    /// Login submit handler.
    pub async fn login(&self, email: &str, password: &str) {
        match self.attempt_login(email, password).await {
            Ok(response) => {
                if let Some(error) = response.error {
                    self.present(Notice::error(error));
                    return;
                }
                let target = response.redirect.as_deref().unwrap_or(DEFAULT_REDIRECT);
                self.view.navigate(target);
            }
            Err(e) => self.present_failure(e, LOGIN_FAILED_MESSAGE),
        }
    }

    async fn attempt_login(&self, email: &str, password: &str) -> ConsoleResult<AuthResponse> {
        let request = validate_login(email, password)?;
        Ok(self.api.login(&request).await?)
    }

    /// Signup submit handler. On success a toast fades in, holds, fades
    /// out, and then the page navigates to the server's redirect target.
    pub async fn signup(&self, input: SignupInput) {
        match self.attempt_signup(input).await {
            Ok(response) => {
                if let Some(error) = response.error {
                    self.present(Notice::error(error));
                    return;
                }
                let target = response
                    .redirect
                    .unwrap_or_else(|| DEFAULT_REDIRECT.to_string());
                let view = Arc::clone(&self.view);
                show_toast(
                    Arc::clone(&self.view),
                    &self.timer,
                    self.toast.clone(),
                    move || view.navigate(&target),
                );
            }
            Err(e) => self.present_failure(e, SIGNUP_FAILED_MESSAGE),
        }
    }

    async fn attempt_signup(&self, input: SignupInput) -> ConsoleResult<AuthResponse> {
        let form = validate_signup(input)?;
        Ok(self.api.signup(&form).await?)
    }

    /// Render a notice inline, or through the alert fallback when no
    /// inline element exists, so a failure is never silent.
    fn present(&self, notice: Notice) {
        if !self.view.inline_notice(&notice) {
            self.view.alert(&notice.text);
        }
    }

    fn present_failure(&self, error: ConsoleError, generic: &str) {
        let message = match error {
            ConsoleError::Validation(message) => message,
            ConsoleError::Client(e) => {
                warn!("auth request failed: {e}");
                match &e {
                    ClientError::Http(_) => NETWORK_ERROR_MESSAGE.to_string(),
                    _ => e.server_message().unwrap_or_else(|| generic.to_string()),
                }
            }
        };
        self.present(Notice::error(message));
    }
}

fn validate_login(email: &str, password: &str) -> ConsoleResult<LoginRequest> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ConsoleError::validation(MISSING_CREDENTIALS_MESSAGE));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn validate_signup(input: SignupInput) -> ConsoleResult<SignupForm> {
    let name = input.name.trim();
    let email = input.email.trim();
    if name.is_empty() || email.is_empty() || input.password.is_empty() {
        return Err(ConsoleError::validation(MISSING_FIELDS_MESSAGE));
    }
    if input.password.len() < MIN_PASSWORD_LEN {
        return Err(ConsoleError::validation(SHORT_PASSWORD_MESSAGE));
    }
    let mut form = SignupForm::new(name, email, input.password).with_phone(input.phone);
    if let Some(role) = input.role {
        form = form.with_role(role);
    }
    Ok(form)
}
