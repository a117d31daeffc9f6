//! Authentication and profile endpoints.

use super::types::{
    ChangePasswordRequest, LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest,
    UserRecord, UserResponse,
};
use super::{ApiClient, ApiResult};

impl ApiClient {
    /// POST /auth/login/: exchanges credentials for a user and token.
    ///
    /// Does not install the token; the session store decides that.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        self.post_json("/auth/login/", &LoginRequest { email, password })
            .await
    }

    /// POST /auth/register/: creates an account.
    ///
    /// Registration does not authenticate; the response carries only the
    /// created user.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<UserRecord> {
        let response: UserResponse = self.post_json("/auth/register/", request).await?;
        Ok(response.user)
    }

    /// GET /auth/profile/: fetches the authenticated user's profile.
    pub async fn profile(&self) -> ApiResult<UserRecord> {
        let response: UserResponse = self.get_json("/auth/profile/", &[]).await?;
        Ok(response.user)
    }

    /// PUT /auth/profile/: partially updates the authenticated user.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<UserRecord> {
        let response: UserResponse = self.put_json("/auth/profile/", update).await?;
        Ok(response.user)
    }

    /// POST /auth/change-password/: status-only response.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> ApiResult<()> {
        self.post_status(
            "/auth/change-password/",
            &ChangePasswordRequest {
                old_password,
                new_password,
            },
        )
        .await
    }
}
