use thiserror::Error;

#[derive(Error, Debug)]
pub enum CogloadError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("Invalid payload: {0}")]
    Validation(String),

    #[error("Calculation error: {0}")]
    Computation(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CogloadError>;
