//! Similarity engine.
//!
//! Pure distance and ranking math over raw vector slices. All functions are
//! read-only and touch no shared state; a ranking request is O(C * N) for C
//! candidates of N components, which needs no index at this scale. If the
//! candidate pool grows large, an approximate-nearest-neighbor backend can
//! replace the full scan behind [`crate::repository::EmbeddingRepository`]
//! without touching this module.

use uuid::Uuid;

use crate::error::{RecommendationError, RecommendationResult};
use crate::models::{Embedding, SimilarUser, SimilarityMetric};

/// Cosine distance: `1 - cos(a, b)`.
///
/// When either vector has zero magnitude the cosine is undefined; such
/// inputs are assigned the maximal distance 1.0 instead of failing, which
/// keeps ranking total over freshly-initialized (all-zero) embeddings.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> RecommendationResult<f32> {
    check_dimensions(a, b)?;

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(1.0);
    }

    Ok(1.0 - dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Euclidean (L2) distance of the difference vector.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> RecommendationResult<f32> {
    check_dimensions(a, b)?;

    let sum: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();

    Ok(sum.sqrt())
}

/// Distance under the given metric.
pub fn distance(metric: SimilarityMetric, a: &[f32], b: &[f32]) -> RecommendationResult<f32> {
    match metric {
        SimilarityMetric::Cosine => cosine_distance(a, b),
        SimilarityMetric::Euclidean => euclidean_distance(a, b),
    }
}

/// Convert a distance into a similarity score that decreases monotonically
/// with distance and stays bounded for the unbounded euclidean case.
pub fn score_from_distance(metric: SimilarityMetric, distance: f32) -> f32 {
    match metric {
        SimilarityMetric::Cosine => 1.0 - distance,
        SimilarityMetric::Euclidean => 1.0 / (1.0 + distance),
    }
}

/// Rank candidates by similarity to the target vector.
///
/// The target's own ID is excluded from the result. Candidates are ordered
/// by descending score, ties broken by ascending user ID for determinism,
/// and the list is truncated to `limit` entries; a zero limit yields an
/// empty list rather than an error.
pub fn rank_by_similarity(
    target_id: Uuid,
    target: &[f32],
    candidates: &[Embedding],
    metric: SimilarityMetric,
    limit: usize,
) -> RecommendationResult<Vec<SimilarUser>> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut ranked = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.user_id == target_id {
            continue;
        }

        let d = distance(metric, target, candidate.vector.components())?;
        ranked.push(SimilarUser {
            user_id: candidate.user_id,
            score: score_from_distance(metric, d),
        });
    }

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    ranked.truncate(limit);

    Ok(ranked)
}

fn check_dimensions(a: &[f32], b: &[f32]) -> RecommendationResult<()> {
    if a.len() != b.len() {
        return Err(RecommendationError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
