#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("ApiError: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HeaderError: {0}")]
    HeaderError(String),
}

pub type Result<T> = std::result::Result<T, RestError>;
