use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("request to concepts API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("concepts API error: {0}")]
    Upstream(String),

    #[error("failed to decode concept: {0}")]
    Decode(#[from] serde_json::Error),
}
