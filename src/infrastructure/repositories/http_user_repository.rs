use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult};
use crate::domain::repositories::UserRepository;
use crate::domain::user::{AccessToken, Credentials, NewUser, ProfileChanges, User};

/// HTTP implementation of UserRepository
pub struct HttpUserRepository {
    client: ApiClient,
}

impl HttpUserRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn register(&self, user: &NewUser) -> ApiResult<User> {
        self.client.post("/users/register", user).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AccessToken> {
        self.client.post("/users/login", credentials).await
    }

    async fn profile(&self) -> ApiResult<User> {
        self.client.get("/users/profile").await
    }

    async fn update_profile(&self, changes: &ProfileChanges) -> ApiResult<User> {
        self.client.put("/users/profile", changes).await
    }
}
