use thiserror::Error;

/// A field constraint on a chat was violated before anything reached storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Chat code must not be empty")]
    EmptyCode,

    #[error("Chat code is {len} characters long, at most {max} allowed")]
    CodeTooLong { len: usize, max: usize },

    #[error("Chat title is {len} characters long, at most {max} allowed")]
    TitleTooLong { len: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Chat with code {code:?} already exists")]
    UniquenessViolation { code: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
