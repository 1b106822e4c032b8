use thiserror::Error;

pub type Result<T> = std::result::Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend client is missing an application id")]
    NotConfigured,

    #[error("invalid backend url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request path leaves the app url: {0}")]
    InvalidPath(String),

    #[error("this backend requires authentication but no access token is set")]
    Unauthenticated,
}
