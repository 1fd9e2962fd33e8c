use async_trait::async_trait;

use crate::api::{item_path, ApiClient, ApiResult};
use crate::domain::agent::{Agent, AgentChanges, AgentSummary, NewAgent};
use crate::domain::repositories::{AgentRepository, ListParams};

/// HTTP implementation of AgentRepository
pub struct HttpAgentRepository {
    client: ApiClient,
}

impl HttpAgentRepository {
    /// Creates a new HttpAgentRepository
    ///
    /// # Arguments
    /// * `client` - authenticated backend client
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AgentRepository for HttpAgentRepository {
    async fn list(&self, params: ListParams) -> ApiResult<Vec<AgentSummary>> {
        self.client.get_with_query("/agents", &params).await
    }

    async fn get(&self, id: &str) -> ApiResult<Agent> {
        self.client.get(&item_path("/agents", id)?).await
    }

    async fn create(&self, agent: &NewAgent) -> ApiResult<Agent> {
        self.client.post("/agents", agent).await
    }

    async fn update(&self, id: &str, changes: &AgentChanges) -> ApiResult<Agent> {
        self.client.put(&item_path("/agents", id)?, changes).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&item_path("/agents", id)?).await
    }

    async fn list_available(&self) -> ApiResult<Vec<AgentSummary>> {
        self.client.get("/agents/available/list").await
    }
}
