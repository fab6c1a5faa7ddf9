use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("record identifier must not be empty")]
    EmptyRecordId,
    #[error("duplicate record identifier: {0}")]
    DuplicateRecordId(String),
    #[error("field name must not be empty")]
    EmptyFieldName,
    #[error("duplicate field in schema: {0}")]
    DuplicateField(String),
    #[error("unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
