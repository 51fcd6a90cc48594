//! Raw payload to [`TableValue`] normalization.
//!
//! Accepts both storage shape (dense sequences) and posted form shape,
//! where `columns` and `rows` arrive as associative maps keyed
//! `col{i}` / `row{i}`. Associative values are taken in input order.

use serde_json::Value;
use tablemaker_model::{Cell, Column, PartialColumn, Result, Row, TableError, TableValue};

use crate::cell::normalize_cell_value;
use crate::html::render_table;

/// Decode a stored or posted JSON string and normalize it.
pub fn normalize_str(raw: &str) -> Result<TableValue> {
    let value: Value = serde_json::from_str(raw)?;
    normalize_value(value)
}

/// Normalize a decoded field payload.
///
/// Missing `columns` or `rows` default to empty; each column is fully
/// defaulted, each cell coerced to its column type, and the derived
/// HTML rendering attached.
pub fn normalize_value(raw: Value) -> Result<TableValue> {
    let Value::Object(mut map) = raw else {
        return Err(TableError::MalformedInput(
            "field payload is not an object".to_string(),
        ));
    };

    let columns = match map.remove("columns") {
        Some(value) => collect_columns(value)?,
        None => Vec::new(),
    };
    let rows = match map.remove("rows") {
        Some(value) => collect_rows(value, &columns)?,
        None => Vec::new(),
    };

    tracing::debug!(
        columns = columns.len(),
        rows = rows.len(),
        "normalized table value"
    );

    let table = render_table(&columns, &rows);
    Ok(TableValue {
        columns,
        rows,
        table,
    })
}

/// Re-entry for an already-normalized value: columns and rows are
/// untouched, only the derived rendering is recomputed.
pub fn renormalize(mut value: TableValue) -> TableValue {
    value.table = render_table(&value.columns, &value.rows);
    value
}

/// Unwraps a sequence that may arrive dense or keyed, preserving order.
fn entries(value: Value, what: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(map) => Ok(map.into_iter().map(|(_, item)| item).collect()),
        Value::Null => Ok(Vec::new()),
        _ => Err(TableError::MalformedInput(format!(
            "{what} is not a sequence"
        ))),
    }
}

fn collect_columns(value: Value) -> Result<Vec<Column>> {
    entries(value, "columns")?
        .into_iter()
        .map(|entry| {
            let partial: PartialColumn = serde_json::from_value(entry)?;
            partial.into_column()
        })
        .collect()
}

fn collect_rows(value: Value, columns: &[Column]) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for (index, entry) in entries(value, "rows")?.into_iter().enumerate() {
        let cells = entries(entry, "row")?;
        if cells.len() > columns.len() {
            return Err(TableError::MalformedRow {
                row: index,
                cells: cells.len(),
                columns: columns.len(),
            });
        }
        let row = cells
            .into_iter()
            .zip(columns)
            .map(|(raw, column)| {
                Cell::from_value(raw).map(|cell| normalize_cell_value(column.cell_type, cell))
            })
            .collect::<Result<Row>>()?;
        rows.push(row);
    }
    Ok(rows)
}
