use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Unknown feed: {0}")]
    UnknownFeed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
