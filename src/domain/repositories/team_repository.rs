use async_trait::async_trait;

use super::ListParams;
use crate::api::errors::ApiResult;
use crate::domain::team::{NewTeam, Team, TeamChanges, TeamSummary};

/// Repository trait for Team definitions
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// List teams (`GET /teams`)
    async fn list(&self, params: ListParams) -> ApiResult<Vec<TeamSummary>>;

    /// Fetch one team (`GET /teams/{id}`)
    async fn get(&self, id: &str) -> ApiResult<Team>;

    /// Create a team (`POST /teams`)
    async fn create(&self, team: &NewTeam) -> ApiResult<Team>;

    /// Partially update a team (`PUT /teams/{id}`)
    async fn update(&self, id: &str, changes: &TeamChanges) -> ApiResult<Team>;

    /// Delete a team (`DELETE /teams/{id}`)
    async fn delete(&self, id: &str) -> ApiResult<()>;
}
