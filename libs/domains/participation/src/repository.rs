use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ParticipationResult;
use crate::models::{ApplicationStatus, ParticipationApplication, TravelPostRef};

/// Repository trait for participation application persistence.
///
/// `create` and `transition_from_pending` are check-then-act sequences and
/// MUST be atomic in every implementation: a unique constraint on
/// (applicant, post) - or per-application serialization - so that two
/// concurrent calls cannot both succeed. This is a required invariant,
/// not an optimization.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Insert a new PENDING application, timestamped at acceptance.
    /// Fails with `AlreadyApplied` when the (applicant, post) pair exists
    /// in any status.
    async fn create(
        &self,
        travel_post_id: Uuid,
        applicant_id: Uuid,
    ) -> ParticipationResult<ParticipationApplication>;

    /// Get an application by ID
    async fn get_by_id(&self, id: Uuid) -> ParticipationResult<Option<ParticipationApplication>>;

    /// Find the application of one user for one post, in any status
    async fn find_by_applicant_and_post(
        &self,
        applicant_id: Uuid,
        travel_post_id: Uuid,
    ) -> ParticipationResult<Option<ParticipationApplication>>;

    /// Atomically move a PENDING application to a terminal state.
    /// Fails with `ApplicationNotFound` for unknown IDs and with
    /// `AlreadyProcessed` when the status is no longer PENDING.
    async fn transition_from_pending(
        &self,
        id: Uuid,
        to: ApplicationStatus,
    ) -> ParticipationResult<ParticipationApplication>;

    /// Set the status unconditionally (administrative reopen).
    /// Fails only with `ApplicationNotFound`.
    async fn set_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> ParticipationResult<ParticipationApplication>;

    /// Remove an application regardless of its status
    async fn delete(&self, id: Uuid) -> ParticipationResult<bool>;

    /// Applications of one user, newest request first
    async fn list_by_applicant(
        &self,
        applicant_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<Vec<ParticipationApplication>>;

    /// Applications for one post, oldest request first
    async fn list_by_post(
        &self,
        travel_post_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<Vec<ParticipationApplication>>;

    /// All applications in a given status
    async fn list_by_status(
        &self,
        status: ApplicationStatus,
    ) -> ParticipationResult<Vec<ParticipationApplication>>;

    /// Count applications for a post, optionally restricted by status
    async fn count_by_post(
        &self,
        travel_post_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<usize>;

    /// Count applications of one user, optionally restricted by status
    async fn count_by_applicant(
        &self,
        applicant_id: Uuid,
        status: Option<ApplicationStatus>,
    ) -> ParticipationResult<usize>;

    /// Count all applications, optionally restricted by status
    async fn count_all(&self, status: Option<ApplicationStatus>) -> ParticipationResult<usize>;
}

/// Read-only access to travel posts, which live with the surrounding
/// application; the lifecycle manager never mutates them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TravelPostReader: Send + Sync {
    async fn get(&self, travel_post_id: Uuid) -> ParticipationResult<Option<TravelPostRef>>;
}
