//! Error types for export rendering.

use std::string::FromUtf8Error;

use roster_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export layout has no columns")]
    EmptyLayout,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("html writer error: {0}")]
    Html(String),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
