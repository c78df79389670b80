use thiserror::Error;

/// Rejections raised by roster mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}
