use async_trait::async_trait;

use crate::api::errors::ApiResult;
use crate::domain::conversation::{Conversation, ConversationSummary, NewConversation};

/// Repository trait for Conversation records
///
/// Status is owned by the backend; the only client-driven transition is a cancel request.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<ConversationSummary>>;

    async fn get(&self, id: &str) -> ApiResult<Conversation>;

    /// Submit a team + task (`POST /conversations`)
    async fn create(&self, conversation: &NewConversation) -> ApiResult<Conversation>;

    /// Request cancellation (`POST /conversations/{id}/cancel`)
    async fn cancel(&self, id: &str) -> ApiResult<()>;

    async fn delete(&self, id: &str) -> ApiResult<()>;
}
