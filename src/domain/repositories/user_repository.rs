use async_trait::async_trait;

use crate::api::errors::ApiResult;
use crate::domain::user::{AccessToken, Credentials, NewUser, ProfileChanges, User};

/// Repository trait for the user account endpoints
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a new account (`POST /users/register`)
    async fn register(&self, user: &NewUser) -> ApiResult<User>;

    /// Exchange credentials for a bearer token (`POST /users/login`)
    async fn login(&self, credentials: &Credentials) -> ApiResult<AccessToken>;

    /// Fetch the signed-in user's profile (`GET /users/profile`)
    async fn profile(&self) -> ApiResult<User>;

    /// Partially update the profile (`PUT /users/profile`)
    async fn update_profile(&self, changes: &ProfileChanges) -> ApiResult<User>;
}
