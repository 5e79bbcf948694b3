use thiserror::Error;

#[derive(Error, Debug)]
pub enum CircletError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Cannot finalize a round with zero recorded attempts")]
    EmptyRound,
}

pub type CResult<T> = Result<T, CircletError>;
