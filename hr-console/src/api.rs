//! Backend API ports
//!
//! Controllers depend on these traits rather than on the concrete HTTP
//! client, so tests can swap in scripted fakes. [`hr_client::HrClient`]
//! implements all of them.

use async_trait::async_trait;
use hr_client::{ClientResult, HrClient};
use shared::client::{AuthResponse, LoginRequest, SignupForm};
use shared::models::{EmployeeDetail, EmployeeSummary, Identity, ProfileRecord, ProfileUpdate};

/// Backend calls the profile controller makes.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn identity(&self) -> ClientResult<Identity>;
    async fn my_profile(&self) -> ClientResult<ProfileRecord>;
    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<ProfileRecord>;
}

/// Backend calls the admin directory controller makes.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn employees(&self) -> ClientResult<Vec<EmployeeSummary>>;
    async fn employee(&self, id: i64) -> ClientResult<EmployeeDetail>;
}

/// Backend calls the auth controller makes.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse>;
    async fn signup(&self, form: &SignupForm) -> ClientResult<AuthResponse>;
}

// Ports pass through `Arc` so an API instance can be shared with the
// caller that constructed it.

#[async_trait]
impl<T: ProfileApi> ProfileApi for std::sync::Arc<T> {
    async fn identity(&self) -> ClientResult<Identity> {
        (**self).identity().await
    }

    async fn my_profile(&self) -> ClientResult<ProfileRecord> {
        (**self).my_profile().await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<ProfileRecord> {
        (**self).update_profile(update).await
    }
}

#[async_trait]
impl<T: DirectoryApi> DirectoryApi for std::sync::Arc<T> {
    async fn employees(&self) -> ClientResult<Vec<EmployeeSummary>> {
        (**self).employees().await
    }

    async fn employee(&self, id: i64) -> ClientResult<EmployeeDetail> {
        (**self).employee(id).await
    }
}

#[async_trait]
impl<T: AuthApi> AuthApi for std::sync::Arc<T> {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        (**self).login(request).await
    }

    async fn signup(&self, form: &SignupForm) -> ClientResult<AuthResponse> {
        (**self).signup(form).await
    }
}

#[async_trait]
impl ProfileApi for HrClient {
    async fn identity(&self) -> ClientResult<Identity> {
        self.me().await
    }

    async fn my_profile(&self) -> ClientResult<ProfileRecord> {
        HrClient::my_profile(self).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<ProfileRecord> {
        HrClient::update_profile(self, update).await
    }
}

#[async_trait]
impl DirectoryApi for HrClient {
    async fn employees(&self) -> ClientResult<Vec<EmployeeSummary>> {
        HrClient::employees(self).await
    }

    async fn employee(&self, id: i64) -> ClientResult<EmployeeDetail> {
        HrClient::employee(self, id).await
    }
}

#[async_trait]
impl AuthApi for HrClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        HrClient::login(self, request).await
    }

    async fn signup(&self, form: &SignupForm) -> ClientResult<AuthResponse> {
        HrClient::signup(self, form).await
    }
}
