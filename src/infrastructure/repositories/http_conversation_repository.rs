use async_trait::async_trait;
use serde::de::IgnoredAny;

use crate::api::{item_path, ApiClient, ApiResult};
use crate::domain::conversation::{Conversation, ConversationSummary, NewConversation};
use crate::domain::repositories::ConversationRepository;

/// HTTP implementation of ConversationRepository
pub struct HttpConversationRepository {
    client: ApiClient,
}

impl HttpConversationRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConversationRepository for HttpConversationRepository {
    async fn list(&self) -> ApiResult<Vec<ConversationSummary>> {
        self.client.get("/conversations").await
    }

    async fn get(&self, id: &str) -> ApiResult<Conversation> {
        self.client.get(&item_path("/conversations", id)?).await
    }

    async fn create(&self, conversation: &NewConversation) -> ApiResult<Conversation> {
        self.client.post("/conversations", conversation).await
    }

    async fn cancel(&self, id: &str) -> ApiResult<()> {
        // the cancel payload is unspecified; accept and discard whatever comes back
        let _: IgnoredAny = self
            .client
            .post_empty(&format!("{}/cancel", item_path("/conversations", id)?))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&item_path("/conversations", id)?).await
    }
}
