use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    /// The raw field payload could not be decoded as JSON.
    #[error("field payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded payload does not have the expected shape.
    #[error("malformed field payload: {0}")]
    MalformedInput(String),

    /// A row carries more cells than the column schema defines.
    #[error("row {row} has {cells} cells but the schema defines {columns} columns")]
    MalformedRow {
        row: usize,
        cells: usize,
        columns: usize,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;
