use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
