//! Editor widget payloads.
//!
//! Shapes the data handed to the host's editable-table template call
//! and to the client-side widget: the per-field settings record with
//! its label fallbacks, the `col{i}` / `row{i}` keyed maps, and the
//! two editor configurations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tablemaker_model::{Cell, CellType, Column, Row, TableValue};

use crate::host::{AssetBundle, AssetRegistrar, Translator};
use crate::schema::{
    ColumnEditorSchema, OptionEditorSchema, column_editor_schema, option_editor_schema,
};

/// Per-field persisted settings: custom labels and instructions for the
/// two editors. Every entry is optional; missing entries fall back to
/// built-in defaults, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSettings {
    pub columns_label: Option<String>,
    pub columns_instructions: Option<String>,
    pub columns_add_row_label: Option<String>,
    pub rows_label: Option<String>,
    pub rows_instructions: Option<String>,
    pub rows_add_row_label: Option<String>,
}

/// Payload for one host editable-table template call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableTableConfig {
    pub label: String,
    pub instructions: String,
    pub id: String,
    pub name: String,
    pub cols: Value,
    pub rows: Value,
    pub add_row_label: String,
}

/// Initialization payload for the client-side widget.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInit {
    pub field_id: String,
    pub columns_input_id: String,
    pub rows_input_id: String,
    pub columns_input_name: String,
    pub rows_input_name: String,
    pub columns: Value,
    pub rows: Value,
    pub column_settings: ColumnEditorSchema,
    pub dropdown_settings: OptionEditorSchema,
}

/// Everything the host needs to render the field's input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPayload {
    pub init: WidgetInit,
    pub columns_editor: EditableTableConfig,
    pub rows_editor: EditableTableConfig,
    pub options_editor: EditableTableConfig,
}

/// Builds the settings-panel and input-widget payloads for one field.
pub struct FieldInputBuilder<'a> {
    handle: &'a str,
    settings: &'a FieldSettings,
    translator: &'a dyn Translator,
}

impl<'a> FieldInputBuilder<'a> {
    pub fn new(
        handle: &'a str,
        settings: &'a FieldSettings,
        translator: &'a dyn Translator,
    ) -> Self {
        FieldInputBuilder {
            handle,
            settings,
            translator,
        }
    }

    /// Assembles the full widget payload and registers the client-side
    /// bundles the editors need.
    pub fn build(
        &self,
        value: Option<&TableValue>,
        registrar: &mut dyn AssetRegistrar,
    ) -> WidgetPayload {
        registrar.register(AssetBundle::FieldEditor);
        registrar.register(AssetBundle::TableSettings);

        let columns = value.map(|v| v.columns.as_slice()).unwrap_or_default();
        let rows = value.map(|v| v.rows.as_slice()).unwrap_or_default();

        let keyed_columns = keyed_columns(columns);
        let keyed_rows = keyed_rows(rows);

        let columns_input_id = format!("{}-columns", self.handle);
        let rows_input_id = format!("{}-rows", self.handle);
        let columns_input_name = format!("{}[columns]", self.handle);
        let rows_input_name = format!("{}[rows]", self.handle);

        let column_settings = column_editor_schema(self.translator);
        let dropdown_settings = option_editor_schema(self.translator);

        let columns_editor = EditableTableConfig {
            label: self.label_or(&self.settings.columns_label, "Table Columns"),
            instructions: self.label_or(
                &self.settings.columns_instructions,
                "Define the columns your table should have.",
            ),
            id: columns_input_id.clone(),
            name: columns_input_name.clone(),
            cols: to_config_value(&column_settings),
            rows: keyed_columns.clone(),
            add_row_label: self.label_or(&self.settings.columns_add_row_label, "Add a column"),
        };

        let rows_editor = EditableTableConfig {
            label: self.label_or(&self.settings.rows_label, "Table Content"),
            instructions: self.label_or(
                &self.settings.rows_instructions,
                "Input the content of your table.",
            ),
            id: rows_input_id.clone(),
            name: rows_input_name.clone(),
            // the user-defined columns drive the rows editor
            cols: keyed_columns.clone(),
            rows: keyed_rows.clone(),
            add_row_label: self.label_or(&self.settings.rows_add_row_label, "Add a row"),
        };

        let options_editor = EditableTableConfig {
            label: self.translator.translate("Dropdown Options"),
            instructions: self.translator.translate("Define the available options."),
            id: "__ID__".to_string(),
            name: "__NAME__".to_string(),
            cols: to_config_value(&dropdown_settings),
            rows: json!({}),
            add_row_label: self.translator.translate("Add an option"),
        };

        WidgetPayload {
            init: WidgetInit {
                field_id: self.handle.to_string(),
                columns_input_id,
                rows_input_id,
                columns_input_name,
                rows_input_name,
                columns: keyed_columns,
                rows: keyed_rows,
                column_settings,
                dropdown_settings,
            },
            columns_editor,
            rows_editor,
            options_editor,
        }
    }

    fn label_or(&self, custom: &Option<String>, fallback: &str) -> String {
        self.translator.translate(custom.as_deref().unwrap_or(fallback))
    }
}

/// Keys the user's columns as `col{i}` for the editor grid.
///
/// A field with no columns yet gets one blank single-line column.
fn keyed_columns(columns: &[Column]) -> Value {
    if columns.is_empty() {
        return json!({
            "col0": {"heading": "", "align": "", "width": "", "type": "singleline"},
        });
    }
    let mut map = Map::new();
    for (index, column) in columns.iter().enumerate() {
        let mut entry = json!({
            "heading": column.heading,
            "align": column.align.as_str(),
            "width": column.width,
            "type": column.cell_type.as_str(),
        });
        // only select columns expose their dropdown options
        if column.cell_type == CellType::Select {
            entry["options"] = Value::Array(
                column
                    .options
                    .iter()
                    .map(|option| {
                        json!({
                            "label": option.label,
                            "value": option.value,
                            "default": option.default,
                        })
                    })
                    .collect(),
            );
        }
        map.insert(format!("col{index}"), entry);
    }
    Value::Object(map)
}

/// Keys the rows as `row{i}` with `col{j}` cells for the editor grid.
///
/// A field with no rows yet gets one empty row.
fn keyed_rows(rows: &[Row]) -> Value {
    if rows.is_empty() {
        return json!({"row0": {}});
    }
    let mut map = Map::new();
    for (row_index, row) in rows.iter().enumerate() {
        let mut cells = Map::new();
        for (cell_index, cell) in row.iter().enumerate() {
            cells.insert(format!("col{cell_index}"), cell_to_value(cell));
        }
        map.insert(format!("row{row_index}"), Value::Object(cells));
    }
    Value::Object(map)
}

fn cell_to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Text(text) => Value::String(text.clone()),
        Cell::Bool(flag) => Value::Bool(*flag),
        Cell::Null => Value::Null,
    }
}

fn to_config_value(schema: &impl Serialize) -> Value {
    serde_json::to_value(schema).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DefaultTranslator;
    use tablemaker_model::{Align, ColumnOption, RawHtml};

    struct RecordingRegistrar(Vec<AssetBundle>);

    impl AssetRegistrar for RecordingRegistrar {
        fn register(&mut self, bundle: AssetBundle) {
            self.0.push(bundle);
        }
    }

    fn select_column() -> Column {
        Column {
            heading: "Size".to_string(),
            cell_type: CellType::Select,
            options: vec![ColumnOption {
                label: "Small".to_string(),
                value: "s".to_string(),
                default: true,
            }],
            ..Column::default()
        }
    }

    fn value_with(columns: Vec<Column>, rows: Vec<Row>) -> TableValue {
        TableValue {
            columns,
            rows,
            table: RawHtml::default(),
        }
    }

    #[test]
    fn empty_field_falls_back_to_one_blank_column_and_row() {
        let settings = FieldSettings::default();
        let builder = FieldInputBuilder::new("specs", &settings, &DefaultTranslator);
        let payload = builder.build(None, &mut crate::host::NoopRegistrar);

        assert_eq!(
            payload.init.columns,
            json!({"col0": {"heading": "", "align": "", "width": "", "type": "singleline"}})
        );
        assert_eq!(payload.init.rows, json!({"row0": {}}));
    }

    #[test]
    fn only_select_columns_carry_options() {
        let settings = FieldSettings::default();
        let builder = FieldInputBuilder::new("specs", &settings, &DefaultTranslator);
        let value = value_with(
            vec![
                Column {
                    heading: "Name".to_string(),
                    ..Column::default()
                },
                select_column(),
            ],
            vec![vec![Cell::Text("Widget".to_string()), Cell::Text("s".to_string())]],
        );
        let payload = builder.build(Some(&value), &mut crate::host::NoopRegistrar);

        assert!(payload.init.columns["col0"].get("options").is_none());
        assert_eq!(
            payload.init.columns["col1"]["options"][0]["label"],
            "Small"
        );
        assert_eq!(payload.init.rows["row0"]["col1"], "s");
    }

    #[test]
    fn date_and_time_cells_reach_the_editor_grid_as_iso() {
        let settings = FieldSettings::default();
        let builder = FieldInputBuilder::new("specs", &settings, &DefaultTranslator);
        let value = value_with(
            vec![
                Column {
                    heading: "Day".to_string(),
                    cell_type: CellType::Date,
                    ..Column::default()
                },
                Column {
                    heading: "At".to_string(),
                    cell_type: CellType::Time,
                    ..Column::default()
                },
            ],
            vec![vec![
                Cell::Text("2024-01-15T00:00:00+00:00".to_string()),
                Cell::Text("17:30:00".to_string()),
            ]],
        );
        let payload = builder.build(Some(&value), &mut crate::host::NoopRegistrar);

        assert_eq!(
            payload.init.rows["row0"]["col0"],
            "2024-01-15T00:00:00+00:00"
        );
        assert_eq!(payload.init.rows["row0"]["col1"], "17:30:00");
        assert_eq!(payload.rows_editor.rows, payload.init.rows);
    }

    #[test]
    fn custom_labels_override_defaults() {
        let settings = FieldSettings {
            columns_label: Some("Product Columns".to_string()),
            rows_add_row_label: Some("Add a product".to_string()),
            ..FieldSettings::default()
        };
        let builder = FieldInputBuilder::new("specs", &settings, &DefaultTranslator);
        let payload = builder.build(None, &mut crate::host::NoopRegistrar);

        assert_eq!(payload.columns_editor.label, "Product Columns");
        assert_eq!(payload.columns_editor.instructions, "Define the columns your table should have.");
        assert_eq!(payload.rows_editor.add_row_label, "Add a product");
        assert_eq!(payload.columns_editor.name, "specs[columns]");
        assert_eq!(payload.rows_editor.id, "specs-rows");
    }

    #[test]
    fn build_registers_both_asset_bundles() {
        let settings = FieldSettings::default();
        let builder = FieldInputBuilder::new("specs", &settings, &DefaultTranslator);
        let mut registrar = RecordingRegistrar(Vec::new());
        builder.build(None, &mut registrar);
        assert_eq!(
            registrar.0,
            vec![AssetBundle::FieldEditor, AssetBundle::TableSettings]
        );
    }

    #[test]
    fn rows_editor_uses_the_user_columns_as_schema() {
        let settings = FieldSettings::default();
        let builder = FieldInputBuilder::new("specs", &settings, &DefaultTranslator);
        let value = value_with(
            vec![Column {
                heading: "Name".to_string(),
                align: Align::Center,
                ..Column::default()
            }],
            vec![],
        );
        let payload = builder.build(Some(&value), &mut crate::host::NoopRegistrar);

        assert_eq!(payload.rows_editor.cols["col0"]["heading"], "Name");
        assert_eq!(payload.rows_editor.cols["col0"]["align"], "center");
        assert_eq!(payload.rows_editor.rows, json!({"row0": {}}));
    }

    #[test]
    fn settings_round_trip_with_camel_case_keys() {
        let settings: FieldSettings = serde_json::from_value(json!({
            "columnsLabel": "Cols",
            "rowsInstructions": "Fill in.",
        }))
        .unwrap();
        assert_eq!(settings.columns_label.as_deref(), Some("Cols"));
        assert_eq!(settings.rows_instructions.as_deref(), Some("Fill in."));
        assert!(settings.rows_label.is_none());
    }
}
