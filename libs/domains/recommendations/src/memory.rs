use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_preferences::PreferenceVector;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::RecommendationResult;
use crate::models::Embedding;
use crate::repository::EmbeddingRepository;

/// In-process embedding store keyed by user ID.
///
/// Cloning yields a handle to the same underlying store.
#[derive(Clone, Default)]
pub struct MemoryEmbeddingRepository {
    embeddings: Arc<RwLock<HashMap<Uuid, Embedding>>>,
}

impl MemoryEmbeddingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmbeddingRepository for MemoryEmbeddingRepository {
    async fn get(&self, user_id: Uuid) -> RecommendationResult<Option<Embedding>> {
        Ok(self.embeddings.read().await.get(&user_id).cloned())
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        vector: PreferenceVector,
    ) -> RecommendationResult<Embedding> {
        let mut embeddings = self.embeddings.write().await;
        let now = Utc::now();

        let created_at = embeddings
            .get(&user_id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let embedding = Embedding {
            user_id,
            vector,
            created_at,
            updated_at: now,
        };

        embeddings.insert(user_id, embedding.clone());
        tracing::info!(user_id = %user_id, "Stored embedding");
        Ok(embedding)
    }

    async fn delete(&self, user_id: Uuid) -> RecommendationResult<bool> {
        let removed = self.embeddings.write().await.remove(&user_id).is_some();
        if removed {
            tracing::info!(user_id = %user_id, "Deleted embedding");
        }
        Ok(removed)
    }

    async fn list_all_except(&self, user_id: Uuid) -> RecommendationResult<Vec<Embedding>> {
        let mut candidates: Vec<Embedding> = self
            .embeddings
            .read()
            .await
            .values()
            .filter(|e| e.user_id != user_id)
            .cloned()
            .collect();
        candidates.sort_by_key(|e| e.user_id);
        Ok(candidates)
    }

    async fn count(&self) -> RecommendationResult<usize> {
        Ok(self.embeddings.read().await.len())
    }
}
