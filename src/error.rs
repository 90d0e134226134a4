use thiserror::Error;

/// Failures raised by the performance scorer. There is no partial success:
/// any of these aborts scoring for the whole match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inconsistent match data: {0}")]
    InconsistentData(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Player not found in match: {0}")]
    PlayerNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
