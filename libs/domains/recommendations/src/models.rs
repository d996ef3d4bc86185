use chrono::{DateTime, Utc};
use domain_preferences::PreferenceVector;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Distance metric used for similarity ranking
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SimilarityMetric {
    /// Cosine distance (1 - cosine similarity)
    #[default]
    Cosine,
    /// Euclidean (L2) distance
    Euclidean,
}

/// Persisted embedding - one vector per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// Owning user
    pub user_id: Uuid,
    /// Encoded preference vector
    pub vector: PreferenceVector,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last replacement timestamp
    pub updated_at: DateTime<Utc>,
}

/// One entry of a similarity ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarUser {
    pub user_id: Uuid,
    /// Similarity score: higher is more similar. For cosine this is
    /// `1 - distance`, for euclidean `1 / (1 + distance)`.
    pub score: f32,
}

/// Result of comparing two specific users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseSimilarity {
    pub user_a: Uuid,
    pub user_b: Uuid,
    pub metric: SimilarityMetric,
    pub distance: f32,
    /// Distance converted to the same score scale used by ranking
    pub score: f32,
}
