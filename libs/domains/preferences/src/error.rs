use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference profile not found for user: {0}")]
    NotFound(Uuid),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;
