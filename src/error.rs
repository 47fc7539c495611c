/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Precondition failed: {0}")]
    GuardViolation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the failure came from talking to a collaborator.
    ///
    /// Transient failures leave the widget idle so the user can simply retry;
    /// guard violations never reached the network in the first place.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AppError::HttpClient(_) | AppError::ExternalApi(_) | AppError::Decode(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
