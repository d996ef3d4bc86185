use async_trait::async_trait;
use domain_preferences::PreferenceVector;
use uuid::Uuid;

use crate::error::RecommendationResult;
use crate::models::Embedding;

/// Embedding store adapter consumed by the recommendation engine.
///
/// Backed here by an in-process map; a vector-capable store can implement
/// the same contract, in which case `list_all_except` may be served by an
/// indexed nearest-neighbor scan instead of a full one. The engine is
/// agnostic to which.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingRepository: Send + Sync {
    /// Get the embedding stored for a user
    async fn get(&self, user_id: Uuid) -> RecommendationResult<Option<Embedding>>;

    /// Create or fully replace a user's embedding. At most one embedding
    /// exists per user; partial updates are not supported.
    async fn upsert(
        &self,
        user_id: Uuid,
        vector: PreferenceVector,
    ) -> RecommendationResult<Embedding>;

    /// Delete a user's embedding
    async fn delete(&self, user_id: Uuid) -> RecommendationResult<bool>;

    /// Candidate pool for ranking: every embedding except the given user's
    async fn list_all_except(&self, user_id: Uuid) -> RecommendationResult<Vec<Embedding>>;

    /// Number of users with a stored embedding
    async fn count(&self) -> RecommendationResult<usize>;
}
