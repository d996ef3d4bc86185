use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::PreferenceResult;
use crate::models::{PreferenceProfile, SavePreferences};
use crate::repository::PreferenceRepository;

/// In-process preference store keyed by user ID.
///
/// Cloning yields a handle to the same underlying store, the way a
/// database-backed repository clones its connection. Writers serialize
/// behind one lock, so an upsert is atomic with respect to concurrent
/// reads of the same user.
#[derive(Clone, Default)]
pub struct MemoryPreferenceRepository {
    profiles: Arc<RwLock<HashMap<Uuid, PreferenceProfile>>>,
}

impl MemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceRepository for MemoryPreferenceRepository {
    async fn upsert(&self, input: SavePreferences) -> PreferenceResult<PreferenceProfile> {
        let mut profiles = self.profiles.write().await;
        let now = Utc::now();

        let created_at = profiles
            .get(&input.user_id)
            .map(|existing| existing.created_at)
            .unwrap_or(now);

        let profile = PreferenceProfile {
            user_id: input.user_id,
            flags: input.flags,
            created_at,
            updated_at: now,
        };

        profiles.insert(input.user_id, profile.clone());
        tracing::info!(user_id = %input.user_id, "Saved preference profile");
        Ok(profile)
    }

    async fn get_by_user(&self, user_id: Uuid) -> PreferenceResult<Option<PreferenceProfile>> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn list_all(&self) -> PreferenceResult<Vec<PreferenceProfile>> {
        let mut all: Vec<PreferenceProfile> = self.profiles.read().await.values().cloned().collect();
        all.sort_by_key(|p| p.user_id);
        Ok(all)
    }

    async fn delete(&self, user_id: Uuid) -> PreferenceResult<bool> {
        let removed = self.profiles.write().await.remove(&user_id).is_some();
        if removed {
            tracing::info!(user_id = %user_id, "Deleted preference profile");
        }
        Ok(removed)
    }

    async fn exists(&self, user_id: Uuid) -> PreferenceResult<bool> {
        Ok(self.profiles.read().await.contains_key(&user_id))
    }
}
