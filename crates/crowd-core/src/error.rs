use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CrowdError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CrowdError>;
