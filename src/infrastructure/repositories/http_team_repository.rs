use async_trait::async_trait;

use crate::api::{item_path, ApiClient, ApiResult};
use crate::domain::repositories::{ListParams, TeamRepository};
use crate::domain::team::{NewTeam, Team, TeamChanges, TeamSummary};

/// HTTP implementation of TeamRepository
///
/// Mirrors the agent endpoints under `/teams`.
pub struct HttpTeamRepository {
    client: ApiClient,
}

impl HttpTeamRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TeamRepository for HttpTeamRepository {
    async fn list(&self, params: ListParams) -> ApiResult<Vec<TeamSummary>> {
        self.client.get_with_query("/teams", &params).await
    }

    async fn get(&self, id: &str) -> ApiResult<Team> {
        self.client.get(&item_path("/teams", id)?).await
    }

    async fn create(&self, team: &NewTeam) -> ApiResult<Team> {
        self.client.post("/teams", team).await
    }

    async fn update(&self, id: &str, changes: &TeamChanges) -> ApiResult<Team> {
        self.client.put(&item_path("/teams", id)?, changes).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&item_path("/teams", id)?).await
    }
}
