use roster_core::EngineError;
use roster_model::ModelError;
use roster_output::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, ScreenError>;
