use thiserror::Error;

/// Domain errors. Every variant is recoverable: the shell prints it and
/// goes back to the menu.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("User not found.")]
    UserNotFound(String),

    #[error("Invalid genre choice.")]
    InvalidGenreChoice(i64),

    #[error("Unknown genre {0}.")]
    UnknownGenre(String),

    #[error("Invalid watch duration {0}: minutes must be between 0 and 4294967295.")]
    InvalidDuration(i64),

    #[error("No watch history to make a recommendation.")]
    NoHistory(String),

    #[error("No titles available for genre {0}.")]
    NoTitles(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),
}

pub type AppResult<T> = Result<T, AppError>;
