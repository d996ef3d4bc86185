use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PreferenceResult;
use crate::models::{PreferenceProfile, SavePreferences};

/// Repository trait for preference profile persistence
///
/// This trait defines the data access interface for preference profiles.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Create or fully replace a user's profile. The creation timestamp of
    /// an existing profile is preserved.
    async fn upsert(&self, input: SavePreferences) -> PreferenceResult<PreferenceProfile>;

    /// Get a profile by user ID
    async fn get_by_user(&self, user_id: Uuid) -> PreferenceResult<Option<PreferenceProfile>>;

    /// List every stored profile (candidate source for bulk re-encoding)
    async fn list_all(&self) -> PreferenceResult<Vec<PreferenceProfile>>;

    /// Delete a profile by user ID
    async fn delete(&self, user_id: Uuid) -> PreferenceResult<bool>;

    /// Check whether a profile exists
    async fn exists(&self, user_id: Uuid) -> PreferenceResult<bool>;
}
