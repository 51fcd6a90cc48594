use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, TableError};

/// A raw cell scalar. Interpretation depends on the owning column's type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Bool(bool),
    Null,
}

impl Cell {
    /// Reads a cell from a decoded payload.
    ///
    /// JSON numbers in fixtures are carried as text; nested structures
    /// are rejected since cells are scalars.
    pub fn from_value(value: Value) -> Result<Cell> {
        match value {
            Value::String(text) => Ok(Cell::Text(text)),
            Value::Bool(flag) => Ok(Cell::Bool(flag)),
            Value::Null => Ok(Cell::Null),
            Value::Number(number) => Ok(Cell::Text(number.to_string())),
            Value::Array(_) | Value::Object(_) => Err(TableError::MalformedInput(
                "row cell is not a scalar".to_string(),
            )),
        }
    }

    /// Text embedded into the rendered table body.
    pub fn display_text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Bool(true) => "1",
            Cell::Bool(false) | Cell::Null => "",
        }
    }
}
