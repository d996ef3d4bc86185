use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ParticipationError {
    #[error("Travel post not found: {0}")]
    PostNotFound(Uuid),

    #[error("User {applicant_id} already applied to post {travel_post_id}")]
    AlreadyApplied {
        travel_post_id: Uuid,
        applicant_id: Uuid,
    },

    #[error("Authors cannot apply to their own post: {0}")]
    SelfApplication(Uuid),

    #[error("Recruitment is closed for post: {0}")]
    RecruitmentClosed(Uuid),

    #[error("Participation application not found: {0}")]
    ApplicationNotFound(Uuid),

    #[error("Application already processed: {0}")]
    AlreadyProcessed(Uuid),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ParticipationResult<T> = Result<T, ParticipationError>;
