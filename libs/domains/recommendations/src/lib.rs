//! Recommendations Domain
//!
//! Ranks users by similarity of their travel preferences. Preference
//! profiles are encoded into fixed-length vectors (see
//! [`domain_preferences::codec`]), stored as per-user embeddings, and
//! compared in-process under cosine or euclidean distance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │RecommendationService │  ← Facade: generate, rank, compare
//! └─────┬──────────┬─────┘
//!       │          │
//! ┌─────▼─────┐ ┌──▼──────────────┐
//! │ Similarity│ │EmbeddingRepository│  ← Store adapter (trait)
//! │  engine   │ └──┬──────────────┘
//! └───────────┘    │
//!            ┌─────▼───────────────┐
//!            │MemoryEmbeddingRepo  │  ← In-process implementation
//!            └─────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_preferences::MemoryPreferenceRepository;
//! use domain_recommendations::{MemoryEmbeddingRepository, RecommendationService};
//!
//! let service = RecommendationService::new(
//!     MemoryEmbeddingRepository::new(),
//!     MemoryPreferenceRepository::new(),
//! );
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;
pub mod similarity;

// Re-export commonly used types
pub use error::{RecommendationError, RecommendationResult};
pub use memory::MemoryEmbeddingRepository;
pub use models::{Embedding, PairwiseSimilarity, SimilarUser, SimilarityMetric};
pub use repository::EmbeddingRepository;
pub use service::RecommendationService;
pub use similarity::{cosine_distance, euclidean_distance, rank_by_similarity, score_from_distance};
