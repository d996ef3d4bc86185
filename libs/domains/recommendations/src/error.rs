use domain_preferences::PreferenceError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Preference profile not found for user: {0}")]
    ProfileNotFound(Uuid),

    #[error("Embedding not found for user: {0}")]
    EmbeddingNotFound(Uuid),

    #[error("Vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type RecommendationResult<T> = Result<T, RecommendationError>;

impl From<PreferenceError> for RecommendationError {
    fn from(err: PreferenceError) -> Self {
        match err {
            PreferenceError::NotFound(user_id) => RecommendationError::ProfileNotFound(user_id),
            PreferenceError::Storage(msg) => RecommendationError::Storage(msg),
        }
    }
}
