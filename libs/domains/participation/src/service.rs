use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::error::{ParticipationError, ParticipationResult};
use crate::models::{ApplicationStatistics, ApplicationStatus, ParticipationApplication};
use crate::repository::{ApplicationRepository, TravelPostReader};

/// Service layer for the participation application lifecycle.
///
/// Owns the eligibility rules for `apply` and the state machine
/// PENDING -> APPROVED | REJECTED, with an explicit administrative
/// `reopen` back to PENDING. The atomicity of the uniqueness and
/// terminal-state checks is delegated to the repository contract.
#[derive(Clone)]
pub struct ParticipationService<R: ApplicationRepository, P: TravelPostReader> {
    applications: Arc<R>,
    posts: Arc<P>,
}

impl<R: ApplicationRepository, P: TravelPostReader> ParticipationService<R, P> {
    pub fn new(applications: R, posts: P) -> Self {
        Self {
            applications: Arc::new(applications),
            posts: Arc::new(posts),
        }
    }

    /// Apply to join a travel post.
    ///
    /// Checks, in order: the post exists, the applicant has no existing
    /// application for it (any status), the applicant is not the author,
    /// and recruitment is still open. On success a PENDING application is
    /// created, timestamped at acceptance.
    #[instrument(skip(self), fields(travel_post_id = %travel_post_id, applicant_id = %applicant_id))]
    pub async fn apply(
        &self,
        travel_post_id: Uuid,
        applicant_id: Uuid,
    ) -> ParticipationResult<ParticipationApplication> {
        let post = self
            .posts
            .get(travel_post_id)
            .await?
            .ok_or(ParticipationError::PostNotFound(travel_post_id))?;

        if self
            .applications
            .find_by_applicant_and_post(applicant_id, travel_post_id)
            .await?
            .is_some()
        {
            return Err(ParticipationError::AlreadyApplied {
                travel_post_id,
                applicant_id,
            });
        }

        if post.author_id == applicant_id {
            return Err(ParticipationError::SelfApplication(travel_post_id));
        }

        if post.recruitment_closed {
            return Err(ParticipationError::RecruitmentClosed(travel_post_id));
        }

        // The repository re-checks the pair under its own lock/constraint,
        // so a concurrent duplicate still loses.
        self.applications.create(travel_post_id, applicant_id).await
    }

    /// Approve a pending application
    #[instrument(skip(self), fields(application_id = %id))]
    pub async fn approve(&self, id: Uuid) -> ParticipationResult<ParticipationApplication> {
        self.applications
            .transition_from_pending(id, ApplicationStatus::Approved)
            .await
    }

    /// Reject a pending application
    #[instrument(skip(self), fields(application_id = %id))]
    pub async fn reject(&self, id: Uuid) -> ParticipationResult<ParticipationApplication> {
        self.applications
            .transition_from_pending(id, ApplicationStatus::Rejected)
            .await
    }

    /// Administrative reset back to PENDING, from any state.
    ///
    /// This is the cancellation semantic: a withdrawn decision puts the
    /// application back into the pending queue rather than into a separate
    /// cancelled state.
    #[instrument(skip(self), fields(application_id = %id))]
    pub async fn reopen(&self, id: Uuid) -> ParticipationResult<ParticipationApplication> {
        self.applications
            .set_status(id, ApplicationStatus::Pending)
            .await
    }

    /// Delete an application unconditionally, regardless of status
    #[instrument(skip(self), fields(application_id = %id))]
    pub async fn delete(&self, id: Uuid) -> ParticipationResult<()> {
        let deleted = self.applications.delete(id).await?;

        if !deleted {
            return Err(ParticipationError::ApplicationNotFound(id));
        }

        Ok(())
    }

    /// Get an application by ID
    pub async fn get_application(&self, id: Uuid) -> ParticipationResult<ParticipationApplication> {
        self.applications
            .get_by_id(id)
            .await?
            .ok_or(ParticipationError::ApplicationNotFound(id))
    }

    /// Whether the user has an application for the post, in any status.
    /// A missing post yields `false`, not an error.
    pub async fn has_applied(
        &self,
        travel_post_id: Uuid,
        applicant_id: Uuid,
    ) -> ParticipationResult<bool> {
        if self.posts.get(travel_post_id).await?.is_none() {
            return Ok(false);
        }

        Ok(self
            .applications
            .find_by_applicant_and_post(applicant_id, travel_post_id)
            .await?
            .is_some())
    }

    /// Applications for a post, oldest first
    pub async fn list_by_post(
        &self,
        travel_post_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<Vec<ParticipationApplication>> {
        self.applications.list_by_post(travel_post_id, status).await
    }

    /// A user's applications, newest first
    pub async fn list_by_applicant(
        &self,
        applicant_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<Vec<ParticipationApplication>> {
        self.applications
            .list_by_applicant(applicant_id, status)
            .await
    }

    /// All applications in a given status
    pub async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> ParticipationResult<Vec<ParticipationApplication>> {
        self.applications.list_by_status(status).await
    }

    /// Counts for one post
    pub async fn post_statistics(
        &self,
        travel_post_id: Uuid,
    ) -> ParticipationResult<ApplicationStatistics> {
        let pending = self
            .applications
            .count_by_post(travel_post_id, Some(ApplicationStatus::Pending))
            .await?;
        let approved = self
            .applications
            .count_by_post(travel_post_id, Some(ApplicationStatus::Approved))
            .await?;
        let rejected = self
            .applications
            .count_by_post(travel_post_id, Some(ApplicationStatus::Rejected))
            .await?;

        Ok(ApplicationStatistics::from_counts(pending, approved, rejected))
    }

    /// Counts for one applicant
    pub async fn applicant_statistics(
        &self,
        applicant_id: Uuid,
    ) -> ParticipationResult<ApplicationStatistics> {
        let pending = self
            .applications
            .count_by_applicant(applicant_id, Some(ApplicationStatus::Pending))
            .await?;
        let approved = self
            .applications
            .count_by_applicant(applicant_id, Some(ApplicationStatus::Approved))
            .await?;
        let rejected = self
            .applications
            .count_by_applicant(applicant_id, Some(ApplicationStatus::Rejected))
            .await?;

        Ok(ApplicationStatistics::from_counts(pending, approved, rejected))
    }

    /// Counts over the whole store
    pub async fn overall_statistics(&self) -> ParticipationResult<ApplicationStatistics> {
        let pending = self
            .applications
            .count_all(Some(ApplicationStatus::Pending))
            .await?;
        let approved = self
            .applications
            .count_all(Some(ApplicationStatus::Approved))
            .await?;
        let rejected = self
            .applications
            .count_all(Some(ApplicationStatus::Rejected))
            .await?;

        Ok(ApplicationStatistics::from_counts(pending, approved, rejected))
    }

    /// Share of a user's applications that were approved, absent when the
    /// user has none.
    pub async fn approval_rate(&self, applicant_id: Uuid) -> ParticipationResult<Option<f64>> {
        Ok(self.applicant_statistics(applicant_id).await?.approval_rate)
    }
}
