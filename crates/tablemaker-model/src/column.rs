//! Column schema types.
//!
//! A stored column may omit any of its attributes; [`PartialColumn`]
//! captures that shape and converts to a fully defaulted [`Column`]
//! exactly once, at the normalization boundary. Everything downstream
//! works with populated columns only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TableError};

/// Horizontal alignment of a column, applied to its header and body cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Returns the value used in markup and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(format!("Unknown alignment: {s}")),
        }
    }
}

// The editor posts `"align": ""` for a column that was never aligned,
// so deserialization goes through `FromStr`, which treats the empty
// string as left.
impl<'de> Deserialize<'de> for Align {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The input type of a column's cells.
///
/// Most types are editor affordances only; `color`, `date` and `time`
/// additionally drive cell coercion during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    #[default]
    Singleline,
    Multiline,
    Number,
    Checkbox,
    Lightswitch,
    Color,
    Date,
    Time,
    Email,
    Url,
    Select,
}

impl CellType {
    /// Every supported cell type, in declaration order.
    pub const ALL: [CellType; 11] = [
        CellType::Singleline,
        CellType::Multiline,
        CellType::Number,
        CellType::Checkbox,
        CellType::Lightswitch,
        CellType::Color,
        CellType::Date,
        CellType::Time,
        CellType::Email,
        CellType::Url,
        CellType::Select,
    ];

    /// Returns the storage token.
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Singleline => "singleline",
            CellType::Multiline => "multiline",
            CellType::Number => "number",
            CellType::Checkbox => "checkbox",
            CellType::Lightswitch => "lightswitch",
            CellType::Color => "color",
            CellType::Date => "date",
            CellType::Time => "time",
            CellType::Email => "email",
            CellType::Url => "url",
            CellType::Select => "select",
        }
    }

    /// Returns the source-language display label for the settings dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            CellType::Singleline => "Single-line text",
            CellType::Multiline => "Multi-line text",
            CellType::Number => "Number",
            CellType::Checkbox => "Checkbox",
            CellType::Lightswitch => "Lightswitch",
            CellType::Color => "Color",
            CellType::Date => "Date",
            CellType::Time => "Time",
            CellType::Email => "Email",
            CellType::Url => "URL",
            CellType::Select => "Dropdown",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CellType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CellType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| format!("Unknown cell type: {s}"))
    }
}

/// One entry of a `select` column's dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOption {
    pub label: String,
    pub value: String,
    pub default: bool,
}

/// A fully defaulted column definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Column {
    pub heading: String,
    pub align: Align,
    pub width: String,
    #[serde(rename = "type")]
    pub cell_type: CellType,
    /// Dropdown entries; meaningful for `select` columns, preserved as
    /// stored for everything else.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ColumnOption>,
}

/// The `options` attribute as it appears in raw payloads: either
/// structured, or a JSON-encoded string posted by the settings editor.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawOptions {
    Encoded(String),
    Structured(Vec<ColumnOption>),
}

/// A column as stored or posted, with every attribute optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialColumn {
    pub heading: Option<String>,
    pub align: Option<Align>,
    pub width: Option<String>,
    #[serde(rename = "type")]
    pub cell_type: Option<CellType>,
    pub options: Option<RawOptions>,
}

impl PartialColumn {
    /// Fills in defaults and decodes string-encoded options.
    pub fn into_column(self) -> Result<Column> {
        let options = match self.options {
            None => Vec::new(),
            Some(RawOptions::Structured(options)) => options,
            Some(RawOptions::Encoded(encoded)) => {
                if encoded.trim().is_empty() {
                    Vec::new()
                } else {
                    serde_json::from_str(&encoded).map_err(TableError::Json)?
                }
            }
        };
        Ok(Column {
            heading: self.heading.unwrap_or_default(),
            align: self.align.unwrap_or_default(),
            width: self.width.unwrap_or_default(),
            cell_type: self.cell_type.unwrap_or_default(),
            options,
        })
    }
}
