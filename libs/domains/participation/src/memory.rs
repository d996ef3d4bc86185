use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ParticipationError, ParticipationResult};
use crate::models::{ApplicationStatus, ParticipationApplication, TravelPostRef};
use crate::repository::{ApplicationRepository, TravelPostReader};

#[derive(Default)]
struct State {
    by_id: HashMap<Uuid, ParticipationApplication>,
    // (applicant, post) uniqueness index
    by_pair: HashMap<(Uuid, Uuid), Uuid>,
}

/// In-process application store.
///
/// Cloning yields a handle to the same underlying store. One write lock
/// spans every check-then-act sequence, so the pair-uniqueness check in
/// `create` and the terminal-state check in `transition_from_pending` are
/// race-free without a database constraint.
#[derive(Clone, Default)]
pub struct MemoryApplicationRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationRepository for MemoryApplicationRepository {
    async fn create(
        &self,
        travel_post_id: Uuid,
        applicant_id: Uuid,
    ) -> ParticipationResult<ParticipationApplication> {
        let mut state = self.state.write().await;

        if state.by_pair.contains_key(&(applicant_id, travel_post_id)) {
            return Err(ParticipationError::AlreadyApplied {
                travel_post_id,
                applicant_id,
            });
        }

        let application = ParticipationApplication {
            id: Uuid::now_v7(),
            travel_post_id,
            applicant_id,
            status: ApplicationStatus::Pending,
            requested_at: Utc::now(),
        };

        state
            .by_pair
            .insert((applicant_id, travel_post_id), application.id);
        state.by_id.insert(application.id, application.clone());

        tracing::info!(
            application_id = %application.id,
            travel_post_id = %travel_post_id,
            applicant_id = %applicant_id,
            "Created participation application"
        );
        Ok(application)
    }

    async fn get_by_id(&self, id: Uuid) -> ParticipationResult<Option<ParticipationApplication>> {
        Ok(self.state.read().await.by_id.get(&id).cloned())
    }

    async fn find_by_applicant_and_post(
        &self,
        applicant_id: Uuid,
        travel_post_id: Uuid,
    ) -> ParticipationResult<Option<ParticipationApplication>> {
        let state = self.state.read().await;
        Ok(state
            .by_pair
            .get(&(applicant_id, travel_post_id))
            .and_then(|id| state.by_id.get(id))
            .cloned())
    }

    async fn transition_from_pending(
        &self,
        id: Uuid,
        to: ApplicationStatus,
    ) -> ParticipationResult<ParticipationApplication> {
        let mut state = self.state.write().await;

        let application = state
            .by_id
            .get_mut(&id)
            .ok_or(ParticipationError::ApplicationNotFound(id))?;

        if application.status != ApplicationStatus::Pending {
            return Err(ParticipationError::AlreadyProcessed(id));
        }

        application.status = to;
        tracing::info!(application_id = %id, status = %to, "Processed participation application");
        Ok(application.clone())
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> ParticipationResult<ParticipationApplication> {
        let mut state = self.state.write().await;

        let application = state
            .by_id
            .get_mut(&id)
            .ok_or(ParticipationError::ApplicationNotFound(id))?;

        application.status = status;
        tracing::info!(application_id = %id, status = %status, "Set application status");
        Ok(application.clone())
    }

    async fn delete(&self, id: Uuid) -> ParticipationResult<bool> {
        let mut state = self.state.write().await;

        match state.by_id.remove(&id) {
            Some(application) => {
                state
                    .by_pair
                    .remove(&(application.applicant_id, application.travel_post_id));
                tracing::info!(application_id = %id, "Deleted participation application");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_by_applicant(
        &self,
        applicant_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<Vec<ParticipationApplication>> {
        let state = self.state.read().await;
        let mut applications: Vec<ParticipationApplication> = state
            .by_id
            .values()
            .filter(|a| a.applicant_id == applicant_id)
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        // Newest request first
        applications.sort_by(|a, b| b.requested_at.cmp(&a.requested_at).then(b.id.cmp(&a.id)));
        Ok(applications)
    }

    async fn list_by_post(
        &self,
        travel_post_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<Vec<ParticipationApplication>> {
        let state = self.state.read().await;
        let mut applications: Vec<ParticipationApplication> = state
            .by_id
            .values()
            .filter(|a| a.travel_post_id == travel_post_id)
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        // Oldest request first
        applications.sort_by(|a, b| a.requested_at.cmp(&b.requested_at).then(a.id.cmp(&b.id)));
        Ok(applications)
    }

    async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> ParticipationResult<Vec<ParticipationApplication>> {
        let state = self.state.read().await;
        let mut applications: Vec<ParticipationApplication> = state
            .by_id
            .values()
            .filter(|a| a.status == status)
            .cloned()
            .collect();
        applications.sort_by(|a, b| a.requested_at.cmp(&b.requested_at).then(a.id.cmp(&b.id)));
        Ok(applications)
    }

    async fn count_by_post(
        &self,
        travel_post_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<usize> {
        let state = self.state.read().await;
        Ok(state
            .by_id
            .values()
            .filter(|a| a.travel_post_id == travel_post_id)
            .filter(|a| status.is_none_or(|s| a.status == s))
            .count())
    }

    async fn count_by_applicant(
        &self,
        applicant_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<usize> {
        let state = self.state.read().await;
        Ok(state
            .by_id
            .values()
            .filter(|a| a.applicant_id == applicant_id)
            .filter(|a| status.is_none_or(|s| a.status == s))
            .count())
    }

    async fn count_all(&self, status: Option<ApplicationStatus>) -> ParticipationResult<usize> {
        let state = self.state.read().await;
        Ok(state
            .by_id
            .values()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .count())
    }
}

/// In-process travel post source for composing the lifecycle manager in
/// tests and demos; production wires the surrounding application's post
/// storage behind the same trait.
#[derive(Clone, Default)]
pub struct MemoryTravelPosts {
    posts: Arc<RwLock<HashMap<Uuid, TravelPostRef>>>,
}

impl MemoryTravelPosts {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, post: TravelPostRef) {
        self.posts.write().await.insert(post.id, post);
    }

    pub async fn set_recruitment_closed(&self, travel_post_id: Uuid, closed: bool) {
        if let Some(post) = self.posts.write().await.get_mut(&travel_post_id) {
            post.recruitment_closed = closed;
        }
    }
}

#[async_trait]
impl TravelPostReader for MemoryTravelPosts {
    async fn get(&self, travel_post_id: Uuid) -> ParticipationResult<Option<TravelPostRef>> {
        Ok(self.posts.read().await.get(&travel_post_id).cloned())
    }
}
