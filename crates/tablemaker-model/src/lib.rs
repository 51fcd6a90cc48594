//! Data model for the user-definable table field.
//!
//! - **column**: column schema (`Column`, `CellType`, `Align`) and the
//!   defaulting path from partially specified stored columns
//! - **cell**: raw cell scalars and their display text
//! - **value**: the normalized field value and its storage shape
//! - **error**: the shared error type for the normalization pipeline

pub mod cell;
pub mod column;
pub mod error;
pub mod value;

pub use cell::Cell;
pub use column::{Align, CellType, Column, ColumnOption, PartialColumn, RawOptions};
pub use error::{Result, TableError};
pub use value::{RawHtml, Row, TableValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_context() {
        let err = TableError::MalformedRow {
            row: 2,
            cells: 4,
            columns: 3,
        };
        assert_eq!(
            err.to_string(),
            "row 2 has 4 cells but the schema defines 3 columns"
        );
    }
}
