use async_trait::async_trait;

use super::ListParams;
use crate::api::errors::ApiResult;
use crate::domain::agent::{Agent, AgentChanges, AgentSummary, NewAgent};

/// Repository trait for Agent definitions
#[async_trait]
pub trait AgentRepository: Send + Sync {
    /// List agents (`GET /agents`)
    async fn list(&self, params: ListParams) -> ApiResult<Vec<AgentSummary>>;

    /// Fetch one agent (`GET /agents/{id}`)
    async fn get(&self, id: &str) -> ApiResult<Agent>;

    /// Create an agent (`POST /agents`)
    async fn create(&self, agent: &NewAgent) -> ApiResult<Agent>;

    /// Partially update an agent (`PUT /agents/{id}`)
    async fn update(&self, id: &str, changes: &AgentChanges) -> ApiResult<Agent>;

    /// Delete an agent (`DELETE /agents/{id}`)
    async fn delete(&self, id: &str) -> ApiResult<()>;

    /// Candidates for handoff and team selection (`GET /agents/available/list`)
    async fn list_available(&self) -> ApiResult<Vec<AgentSummary>>;
}
