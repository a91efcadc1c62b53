#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("No player found with the name {0}. Check for a misspelling.")]
    PlayerNotFound(String),

    #[error("Stats service unavailable: {0}")]
    ResolverUnavailable(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
