use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid report url: {0}")]
    Url(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service response error: {0}")]
    Api(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
