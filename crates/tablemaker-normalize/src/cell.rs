use tablemaker_model::{Cell, CellType};

use crate::{color, datetime};

/// Coerce a cell to its column type's canonical form.
///
/// Color, date and time cells that cannot be parsed degrade to
/// [`Cell::Null`] instead of failing the normalize call; every other
/// type passes through unchanged.
pub fn normalize_cell_value(cell_type: CellType, cell: Cell) -> Cell {
    match cell_type {
        CellType::Color => coerce(cell, "color", color::normalize_color),
        CellType::Date => coerce(cell, "date", datetime::normalize_date),
        CellType::Time => coerce(cell, "time", datetime::normalize_time),
        _ => cell,
    }
}

fn coerce(cell: Cell, kind: &str, parse: impl Fn(&str) -> Option<String>) -> Cell {
    match cell {
        Cell::Text(text) => match parse(&text) {
            Some(canonical) => Cell::Text(canonical),
            None => {
                if !text.trim().is_empty() {
                    tracing::warn!(kind, value = %text, "dropping unparsable cell");
                }
                Cell::Null
            }
        },
        Cell::Bool(_) | Cell::Null => Cell::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_cells_canonicalize() {
        assert_eq!(
            normalize_cell_value(CellType::Color, Cell::Text("#F00".to_string())),
            Cell::Text("#ff0000".to_string())
        );
        assert_eq!(
            normalize_cell_value(CellType::Color, Cell::Text("#".to_string())),
            Cell::Null
        );
    }

    #[test]
    fn date_cells_degrade_to_null_when_unparsable() {
        assert_eq!(
            normalize_cell_value(CellType::Date, Cell::Text("soon".to_string())),
            Cell::Null
        );
    }

    #[test]
    fn other_types_pass_through() {
        let cell = Cell::Text("  anything  ".to_string());
        assert_eq!(
            normalize_cell_value(CellType::Singleline, cell.clone()),
            cell
        );
        assert_eq!(
            normalize_cell_value(CellType::Checkbox, Cell::Bool(true)),
            Cell::Bool(true)
        );
    }
}
