use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{PreferenceError, PreferenceResult};
use crate::models::{PreferenceProfile, SavePreferences};
use crate::repository::PreferenceRepository;

/// Service layer for preference profile business logic
#[derive(Clone)]
pub struct PreferenceService<R: PreferenceRepository> {
    repository: Arc<R>,
}

impl<R: PreferenceRepository> PreferenceService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Save (create or replace) a user's preference profile
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn save_preferences(
        &self,
        input: SavePreferences,
    ) -> PreferenceResult<PreferenceProfile> {
        self.repository.upsert(input).await
    }

    /// Get a user's preference profile
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_preferences(&self, user_id: Uuid) -> PreferenceResult<PreferenceProfile> {
        self.repository
            .get_by_user(user_id)
            .await?
            .ok_or(PreferenceError::NotFound(user_id))
    }

    /// List every stored profile
    pub async fn list_profiles(&self) -> PreferenceResult<Vec<PreferenceProfile>> {
        self.repository.list_all().await
    }

    /// Delete a user's preference profile
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn delete_preferences(&self, user_id: Uuid) -> PreferenceResult<()> {
        let deleted = self.repository.delete(user_id).await?;

        if !deleted {
            return Err(PreferenceError::NotFound(user_id));
        }

        Ok(())
    }

    /// Check whether a user has a stored profile
    pub async fn has_preferences(&self, user_id: Uuid) -> PreferenceResult<bool> {
        self.repository.exists(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PreferenceFlags;
    use crate::repository::MockPreferenceRepository;

    #[tokio::test]
    async fn get_preferences_maps_missing_profile_to_not_found() {
        let mut mock_repo = MockPreferenceRepository::new();
        let user_id = Uuid::now_v7();

        mock_repo
            .expect_get_by_user()
            .with(mockall::predicate::eq(user_id))
            .returning(|_| Ok(None));

        let service = PreferenceService::new(mock_repo);
        let result = service.get_preferences(user_id).await;

        assert!(matches!(result, Err(PreferenceError::NotFound(id)) if id == user_id));
    }

    #[tokio::test]
    async fn delete_preferences_maps_missing_profile_to_not_found() {
        let mut mock_repo = MockPreferenceRepository::new();
        let user_id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(mockall::predicate::eq(user_id))
            .returning(|_| Ok(false));

        let service = PreferenceService::new(mock_repo);
        let result = service.delete_preferences(user_id).await;

        assert!(matches!(result, Err(PreferenceError::NotFound(id)) if id == user_id));
    }

    #[tokio::test]
    async fn storage_errors_propagate_unchanged() {
        let mut mock_repo = MockPreferenceRepository::new();

        mock_repo
            .expect_upsert()
            .returning(|_| Err(PreferenceError::Storage("connection reset".to_string())));

        let service = PreferenceService::new(mock_repo);
        let result = service
            .save_preferences(SavePreferences {
                user_id: Uuid::now_v7(),
                flags: PreferenceFlags::default(),
            })
            .await;

        assert!(matches!(result, Err(PreferenceError::Storage(_))));
    }
}
