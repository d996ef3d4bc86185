use std::sync::Arc;

use domain_preferences::{PreferenceRepository, PreferenceVector, codec};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{RecommendationError, RecommendationResult};
use crate::models::{Embedding, PairwiseSimilarity, SimilarUser, SimilarityMetric};
use crate::repository::EmbeddingRepository;
use crate::similarity;

/// Recommendation facade.
///
/// Composes the preference codec, the embedding store and the similarity
/// engine to answer "who is most similar to user X" queries.
#[derive(Clone)]
pub struct RecommendationService<E: EmbeddingRepository, P: PreferenceRepository> {
    embeddings: Arc<E>,
    preferences: Arc<P>,
}

impl<E: EmbeddingRepository, P: PreferenceRepository> RecommendationService<E, P> {
    pub fn new(embeddings: E, preferences: P) -> Self {
        Self {
            embeddings: Arc::new(embeddings),
            preferences: Arc::new(preferences),
        }
    }

    /// Encode a user's stored preference profile and persist the result,
    /// replacing any existing embedding.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn generate_from_preferences(&self, user_id: Uuid) -> RecommendationResult<Embedding> {
        let profile = self
            .preferences
            .get_by_user(user_id)
            .await?
            .ok_or(RecommendationError::ProfileNotFound(user_id))?;

        let vector = codec::encode(&profile.flags);
        self.embeddings.upsert(user_id, vector).await
    }

    /// Store an explicitly supplied vector for a user
    #[instrument(skip(self, vector), fields(user_id = %user_id))]
    pub async fn upload_embedding(
        &self,
        user_id: Uuid,
        vector: PreferenceVector,
    ) -> RecommendationResult<Embedding> {
        self.embeddings.upsert(user_id, vector).await
    }

    /// Get a user's stored embedding
    pub async fn get_embedding(&self, user_id: Uuid) -> RecommendationResult<Embedding> {
        self.embeddings
            .get(user_id)
            .await?
            .ok_or(RecommendationError::EmbeddingNotFound(user_id))
    }

    /// Delete a user's embedding
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn delete_embedding(&self, user_id: Uuid) -> RecommendationResult<()> {
        let deleted = self.embeddings.delete(user_id).await?;

        if !deleted {
            return Err(RecommendationError::EmbeddingNotFound(user_id));
        }

        Ok(())
    }

    /// Rank the candidate pool by similarity to the given user.
    #[instrument(skip(self), fields(user_id = %user_id, metric = %metric, limit = limit))]
    pub async fn find_similar(
        &self,
        user_id: Uuid,
        metric: SimilarityMetric,
        limit: usize,
    ) -> RecommendationResult<Vec<SimilarUser>> {
        let target = self.get_embedding(user_id).await?;
        let candidates = self.embeddings.list_all_except(user_id).await?;

        similarity::rank_by_similarity(
            user_id,
            target.vector.components(),
            &candidates,
            metric,
            limit,
        )
    }

    /// Most similar single user, if any candidates exist
    pub async fn most_similar(
        &self,
        user_id: Uuid,
        metric: SimilarityMetric,
    ) -> RecommendationResult<Option<SimilarUser>> {
        Ok(self.find_similar(user_id, metric, 1).await?.into_iter().next())
    }

    /// Candidates whose similarity score reaches `min_score`
    pub async fn find_above_threshold(
        &self,
        user_id: Uuid,
        metric: SimilarityMetric,
        min_score: f32,
    ) -> RecommendationResult<Vec<SimilarUser>> {
        let mut ranked = self.find_similar(user_id, metric, usize::MAX).await?;
        ranked.retain(|r| r.score >= min_score);
        Ok(ranked)
    }

    /// Similarity between two specific users on the ranking score scale
    #[instrument(skip(self), fields(user_a = %user_a, user_b = %user_b, metric = %metric))]
    pub async fn pairwise_similarity(
        &self,
        user_a: Uuid,
        user_b: Uuid,
        metric: SimilarityMetric,
    ) -> RecommendationResult<PairwiseSimilarity> {
        let a = self.get_embedding(user_a).await?;
        let b = self.get_embedding(user_b).await?;

        let distance =
            similarity::distance(metric, a.vector.components(), b.vector.components())?;

        Ok(PairwiseSimilarity {
            user_a,
            user_b,
            metric,
            distance,
            score: similarity::score_from_distance(metric, distance),
        })
    }

    /// Mean similarity score between the user and the whole candidate pool,
    /// `None` when the pool is empty.
    pub async fn average_similarity(
        &self,
        user_id: Uuid,
        metric: SimilarityMetric,
    ) -> RecommendationResult<Option<f32>> {
        let ranked = self.find_similar(user_id, metric, usize::MAX).await?;

        if ranked.is_empty() {
            return Ok(None);
        }

        let sum: f32 = ranked.iter().map(|r| r.score).sum();
        Ok(Some(sum / ranked.len() as f32))
    }

    /// Re-encode every stored preference profile, replacing the embeddings.
    ///
    /// Individual failures are logged and skipped so one broken profile
    /// does not abort the batch. Returns the number of embeddings written.
    #[instrument(skip(self))]
    pub async fn refresh_all_embeddings(&self) -> RecommendationResult<usize> {
        let profiles = self.preferences.list_all().await?;
        let total = profiles.len();
        let mut refreshed = 0;

        for profile in profiles {
            let vector = codec::encode(&profile.flags);
            match self.embeddings.upsert(profile.user_id, vector).await {
                Ok(_) => refreshed += 1,
                Err(err) => {
                    tracing::warn!(user_id = %profile.user_id, error = %err, "Skipping embedding refresh");
                }
            }
        }

        tracing::info!(refreshed, total, "Refreshed embeddings");
        Ok(refreshed)
    }

    /// Number of users with a stored embedding
    pub async fn count_embeddings(&self) -> RecommendationResult<usize> {
        self.embeddings.count().await
    }
}
