use serde::Serialize;
use std::fmt;

use crate::cell::Cell;
use crate::column::Column;

/// One record's cells, aligned positionally to the column schema.
pub type Row = Vec<Cell>;

/// Markup that consuming templates must embed literally, without
/// re-escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHtml(String);

impl RawHtml {
    pub fn new(html: String) -> Self {
        RawHtml(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The field's normalized in-memory value.
///
/// Serializing a `TableValue` yields the storage shape: dense `columns`
/// and `rows` sequences and nothing else. The derived `table` rendering
/// is recomputed on every normalize call and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TableValue {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    #[serde(skip)]
    pub table: RawHtml,
}

impl TableValue {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}
