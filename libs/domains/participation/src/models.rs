use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Participation application status
///
/// `Approved` and `Rejected` are terminal: the only way out is an explicit
/// reopen back to `Pending`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Awaiting a decision by the post author
    #[default]
    Pending,
    /// Accepted into the trip
    Approved,
    /// Turned down
    Rejected,
}

impl ApplicationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Approved | ApplicationStatus::Rejected)
    }
}

/// One user's request to join one travel post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipationApplication {
    /// Unique identifier
    pub id: Uuid,
    /// The post applied to
    pub travel_post_id: Uuid,
    /// The applying user
    pub applicant_id: Uuid,
    /// Current lifecycle state
    pub status: ApplicationStatus,
    /// Timestamp of acceptance of the request
    pub requested_at: DateTime<Utc>,
}

impl ParticipationApplication {
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == ApplicationStatus::Approved
    }

    pub fn is_rejected(&self) -> bool {
        self.status == ApplicationStatus::Rejected
    }

    /// Approved or rejected
    pub fn is_processed(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Read-only view of the travel post, owned by the surrounding application.
///
/// The lifecycle manager reads the author and the recruitment flag and
/// never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPostRef {
    pub id: Uuid,
    pub author_id: Uuid,
    /// No further applications are accepted once recruitment closes
    pub recruitment_closed: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Application counts for a post, an applicant or the whole store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationStatistics {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// `approved / total`; absent rather than dividing by zero
    pub approval_rate: Option<f64>,
}

impl ApplicationStatistics {
    pub fn from_counts(pending: usize, approved: usize, rejected: usize) -> Self {
        let total = pending + approved + rejected;
        let approval_rate = if total == 0 {
            None
        } else {
            Some(approved as f64 / total as f64)
        };

        Self {
            total,
            pending,
            approved,
            rejected,
            approval_rate,
        }
    }
}
