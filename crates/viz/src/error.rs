use std::path::PathBuf;

use leibniz_series::TermCountError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Terms(#[from] TermCountError),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
