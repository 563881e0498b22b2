/// Errors raised by PlanUp commands before they cross the IPC boundary.
#[derive(Debug, thiserror::Error)]
pub enum PlanUpError {
    /// User input rejected by a creation flow; the message is shown as-is.
    #[error("{0}")]
    Validation(String),

    #[error("duplicate record id '{0}'")]
    DuplicateRecordId(String),

    #[error("record '{id}' is invalid: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("unknown project lead '{0}'")]
    UnknownLead(String),

    #[error("unknown project template '{0}'")]
    UnknownTemplate(String),

    #[error("{0} lock poisoned")]
    LockPoisoned(&'static str),
}

impl PlanUpError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<PlanUpError> for String {
    fn from(err: PlanUpError) -> Self {
        err.to_string()
    }
}
