//! Integration tests for the recommendations domain
//!
//! These tests compose the real codec, the in-memory stores and the
//! similarity engine end to end:
//! - Embedding generation from stored preference profiles
//! - Ranking under both metrics
//! - Pairwise comparison naming the missing side
//! - Bulk refresh

use domain_preferences::{
    MemoryPreferenceRepository, PreferenceFlags, PreferenceService, PreferenceVector,
    SavePreferences, VECTOR_DIMENSION,
};
use domain_recommendations::*;
use uuid::Uuid;

type Services = (
    PreferenceService<MemoryPreferenceRepository>,
    RecommendationService<MemoryEmbeddingRepository, MemoryPreferenceRepository>,
);

// Both services share one preference store, the way production services
// share one database connection.
fn services() -> Services {
    let prefs_repo = MemoryPreferenceRepository::new();
    let preferences = PreferenceService::new(prefs_repo.clone());
    let recommendations =
        RecommendationService::new(MemoryEmbeddingRepository::new(), prefs_repo);
    (preferences, recommendations)
}

fn outdoor_flags() -> PreferenceFlags {
    PreferenceFlags {
        outdoor_activities: true,
        mountain_trips: true,
        packed_schedule: true,
        ..Default::default()
    }
}

fn cafe_flags() -> PreferenceFlags {
    PreferenceFlags {
        cafes: true,
        relaxed_pace: true,
        healing_trips: true,
        ..Default::default()
    }
}

async fn save_profile(
    preferences: &PreferenceService<MemoryPreferenceRepository>,
    flags: PreferenceFlags,
) -> Uuid {
    let user_id = Uuid::now_v7();
    preferences
        .save_preferences(SavePreferences { user_id, flags })
        .await
        .unwrap();
    user_id
}

// ============================================================================
// Embedding Generation
// ============================================================================

#[tokio::test]
async fn generate_from_preferences_stores_encoded_vector() {
    let (preferences, recommendations) = services();
    let user_id = save_profile(&preferences, outdoor_flags()).await;

    let embedding = recommendations
        .generate_from_preferences(user_id)
        .await
        .unwrap();

    assert_eq!(embedding.user_id, user_id);
    assert_eq!(embedding.vector.components().len(), VECTOR_DIMENSION);
    // outdoor_activities, packed_schedule and mountain_trips set
    assert_eq!(
        embedding
            .vector
            .components()
            .iter()
            .filter(|c| **c == 1.0)
            .count(),
        3
    );

    let fetched = recommendations.get_embedding(user_id).await.unwrap();
    assert_eq!(fetched, embedding);
}

#[tokio::test]
async fn regeneration_replaces_vector_and_keeps_created_at() {
    let (preferences, recommendations) = services();
    let user_id = save_profile(&preferences, outdoor_flags()).await;

    let first = recommendations
        .generate_from_preferences(user_id)
        .await
        .unwrap();

    preferences
        .save_preferences(SavePreferences {
            user_id,
            flags: cafe_flags(),
        })
        .await
        .unwrap();

    let second = recommendations
        .generate_from_preferences(user_id)
        .await
        .unwrap();

    assert_ne!(second.vector, first.vector);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(recommendations.count_embeddings().await.unwrap(), 1);
}

#[tokio::test]
async fn generate_without_profile_fails() {
    let (_preferences, recommendations) = services();
    let user_id = Uuid::now_v7();

    let result = recommendations.generate_from_preferences(user_id).await;
    assert!(matches!(
        result,
        Err(RecommendationError::ProfileNotFound(id)) if id == user_id
    ));
}

#[tokio::test]
async fn upload_and_delete_embedding() {
    let (_preferences, recommendations) = services();
    let user_id = Uuid::now_v7();

    let vector = PreferenceVector::from_components(&[1.0, 0.0, 1.0]);
    recommendations
        .upload_embedding(user_id, vector)
        .await
        .unwrap();

    assert_eq!(recommendations.count_embeddings().await.unwrap(), 1);

    recommendations.delete_embedding(user_id).await.unwrap();
    let result = recommendations.get_embedding(user_id).await;
    assert!(matches!(
        result,
        Err(RecommendationError::EmbeddingNotFound(_))
    ));

    // Second delete should fail
    let result = recommendations.delete_embedding(user_id).await;
    assert!(matches!(
        result,
        Err(RecommendationError::EmbeddingNotFound(_))
    ));
}

// ============================================================================
// Ranking
// ============================================================================

#[tokio::test]
async fn find_similar_ranks_matching_profiles_first() {
    let (preferences, recommendations) = services();

    let target = save_profile(&preferences, outdoor_flags()).await;
    let twin = save_profile(&preferences, outdoor_flags()).await;
    let opposite = save_profile(&preferences, cafe_flags()).await;

    for user in [target, twin, opposite] {
        recommendations
            .generate_from_preferences(user)
            .await
            .unwrap();
    }

    for metric in [SimilarityMetric::Cosine, SimilarityMetric::Euclidean] {
        let ranked = recommendations
            .find_similar(target, metric, 10)
            .await
            .unwrap();

        assert_eq!(ranked.len(), 2, "target itself must be excluded");
        assert_eq!(ranked[0].user_id, twin);
        assert_eq!(ranked[1].user_id, opposite);
        assert!(ranked[0].score > ranked[1].score);
    }
}

#[tokio::test]
async fn find_similar_respects_limit() {
    let (preferences, recommendations) = services();
    let target = save_profile(&preferences, outdoor_flags()).await;
    recommendations
        .generate_from_preferences(target)
        .await
        .unwrap();

    for _ in 0..5 {
        let user = save_profile(&preferences, cafe_flags()).await;
        recommendations
            .generate_from_preferences(user)
            .await
            .unwrap();
    }

    let ranked = recommendations
        .find_similar(target, SimilarityMetric::Cosine, 3)
        .await
        .unwrap();
    assert_eq!(ranked.len(), 3);

    let empty = recommendations
        .find_similar(target, SimilarityMetric::Cosine, 0)
        .await
        .unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn find_similar_without_embedding_fails_even_with_candidates() {
    let (preferences, recommendations) = services();

    for _ in 0..3 {
        let user = save_profile(&preferences, cafe_flags()).await;
        recommendations
            .generate_from_preferences(user)
            .await
            .unwrap();
    }

    let stranger = Uuid::now_v7();
    let result = recommendations
        .find_similar(stranger, SimilarityMetric::Cosine, 10)
        .await;

    assert!(matches!(
        result,
        Err(RecommendationError::EmbeddingNotFound(id)) if id == stranger
    ));
}

#[tokio::test]
async fn most_similar_and_threshold_queries() {
    let (preferences, recommendations) = services();

    let target = save_profile(&preferences, outdoor_flags()).await;
    let twin = save_profile(&preferences, outdoor_flags()).await;
    let opposite = save_profile(&preferences, cafe_flags()).await;

    for user in [target, twin, opposite] {
        recommendations
            .generate_from_preferences(user)
            .await
            .unwrap();
    }

    let best = recommendations
        .most_similar(target, SimilarityMetric::Cosine)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(best.user_id, twin);

    let close = recommendations
        .find_above_threshold(target, SimilarityMetric::Cosine, 0.9)
        .await
        .unwrap();
    assert_eq!(close.len(), 1);
    assert_eq!(close[0].user_id, twin);
}

#[tokio::test]
async fn average_similarity_is_none_for_empty_pool() {
    let (preferences, recommendations) = services();
    let target = save_profile(&preferences, outdoor_flags()).await;
    recommendations
        .generate_from_preferences(target)
        .await
        .unwrap();

    let average = recommendations
        .average_similarity(target, SimilarityMetric::Cosine)
        .await
        .unwrap();
    assert!(average.is_none());

    let other = save_profile(&preferences, outdoor_flags()).await;
    recommendations
        .generate_from_preferences(other)
        .await
        .unwrap();

    let average = recommendations
        .average_similarity(target, SimilarityMetric::Cosine)
        .await
        .unwrap()
        .unwrap();
    assert!((average - 1.0).abs() < 1e-6);
}

// ============================================================================
// Pairwise Similarity
// ============================================================================

#[tokio::test]
async fn pairwise_similarity_matches_ranking_scale() {
    let (preferences, recommendations) = services();

    let a = save_profile(&preferences, outdoor_flags()).await;
    let b = save_profile(&preferences, outdoor_flags()).await;
    for user in [a, b] {
        recommendations
            .generate_from_preferences(user)
            .await
            .unwrap();
    }

    let cosine = recommendations
        .pairwise_similarity(a, b, SimilarityMetric::Cosine)
        .await
        .unwrap();
    assert!(cosine.distance.abs() < 1e-6);
    assert!((cosine.score - 1.0).abs() < 1e-6);

    let euclidean = recommendations
        .pairwise_similarity(a, b, SimilarityMetric::Euclidean)
        .await
        .unwrap();
    assert_eq!(euclidean.distance, 0.0);
    assert_eq!(euclidean.score, 1.0);
}

#[tokio::test]
async fn pairwise_similarity_names_the_missing_side() {
    let (preferences, recommendations) = services();

    let present = save_profile(&preferences, outdoor_flags()).await;
    recommendations
        .generate_from_preferences(present)
        .await
        .unwrap();

    let missing = Uuid::now_v7();

    let result = recommendations
        .pairwise_similarity(present, missing, SimilarityMetric::Cosine)
        .await;
    assert!(matches!(
        result,
        Err(RecommendationError::EmbeddingNotFound(id)) if id == missing
    ));

    let result = recommendations
        .pairwise_similarity(missing, present, SimilarityMetric::Cosine)
        .await;
    assert!(matches!(
        result,
        Err(RecommendationError::EmbeddingNotFound(id)) if id == missing
    ));
}

// ============================================================================
// Bulk Refresh
// ============================================================================

#[tokio::test]
async fn refresh_all_embeddings_covers_every_profile() {
    let (preferences, recommendations) = services();

    let mut saved = Vec::new();
    for flags in [outdoor_flags(), cafe_flags(), PreferenceFlags::default()] {
        saved.push(save_profile(&preferences, flags).await);
    }

    let refreshed = recommendations.refresh_all_embeddings().await.unwrap();
    assert_eq!(refreshed, 3);
    assert_eq!(recommendations.count_embeddings().await.unwrap(), 3);

    for user in saved {
        recommendations.get_embedding(user).await.unwrap();
    }
}
