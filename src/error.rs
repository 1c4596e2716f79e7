use thiserror::Error;

/// Errors raised while encoding or decoding column values.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid identifier: {value:?} is not a number")]
    InvalidId { value: String },

    #[error("Structured value must be encoded to JSON text before it is bound to SQLite")]
    UnencodedJson,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown column {column} in table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, TransformError>;
