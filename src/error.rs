use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot generate a symbol from an empty pin list")]
    EmptyPinList,

    #[error("Invalid package pin count: {0}")]
    InvalidPinCount(u32),

    #[error("Data parsing error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
