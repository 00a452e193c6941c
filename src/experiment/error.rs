use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("malformed experiment record: {0}")]
    MalformedRecord(String),
    #[error("failed to read experiment record: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid measurement index ({index}), experiment has {count} traces")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("averaging with trace alternance ({0}) is not implemented")]
    UnsupportedAlternance(i64),
    #[error("cannot average an empty selection of traces")]
    EmptySelection,
    #[error("multisine length mismatch at trace {index}: expected {expected} samples, got {actual}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

impl From<serde_json::Error> for ExperimentError {
    fn from(value: serde_json::Error) -> Self {
        ExperimentError::MalformedRecord(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExperimentError>;
