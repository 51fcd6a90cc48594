//! Fixed schemas for the settings editors.
//!
//! These describe the *columns editor itself* and the dropdown-options
//! sub-editor, not user data. Field declaration order is the widget's
//! render order.

use serde::Serialize;
use tablemaker_model::CellType;

use crate::host::Translator;

/// One dropdown entry in a settings select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        SelectOption {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One column definition consumed by the editable-table widget.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsColumn {
    pub heading: String,
    #[serde(rename = "type")]
    pub input_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autopopulate: Option<&'static str>,
    #[serde(rename = "radioMode", skip_serializing_if = "std::ops::Not::not")]
    pub radio_mode: bool,
}

impl SettingsColumn {
    fn new(heading: String, input_type: &'static str) -> Self {
        SettingsColumn {
            heading,
            input_type,
            class: None,
            width: None,
            options: Vec::new(),
            autopopulate: None,
            radio_mode: false,
        }
    }

    pub fn singleline(heading: String) -> Self {
        SettingsColumn::new(heading, "singleline")
    }

    pub fn select(heading: String, options: Vec<SelectOption>) -> Self {
        let mut column = SettingsColumn::new(heading, "select");
        column.options = options;
        column
    }

    pub fn checkbox(heading: String) -> Self {
        SettingsColumn::new(heading, "checkbox")
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn autopopulating(mut self, target: &'static str) -> Self {
        self.autopopulate = Some(target);
        self
    }

    /// Checkbox behaves as an exclusive radio across rows.
    pub fn radio(mut self) -> Self {
        self.radio_mode = true;
        self
    }
}

/// Schema for the columns editor: one row per user-defined column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnEditorSchema {
    pub heading: SettingsColumn,
    pub width: SettingsColumn,
    pub align: SettingsColumn,
    #[serde(rename = "type")]
    pub cell_type: SettingsColumn,
}

/// Schema for a select column's dropdown-options sub-editor.
#[derive(Debug, Clone, Serialize)]
pub struct OptionEditorSchema {
    pub label: SettingsColumn,
    pub value: SettingsColumn,
    pub default: SettingsColumn,
}

/// Cell-type dropdown entries, sorted alphabetically by translated label.
pub fn cell_type_options(translator: &dyn Translator) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = CellType::ALL
        .iter()
        .map(|ty| SelectOption::new(ty.as_str(), translator.translate(ty.label())))
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

/// Builds the fixed columns-editor schema.
pub fn column_editor_schema(translator: &dyn Translator) -> ColumnEditorSchema {
    ColumnEditorSchema {
        heading: SettingsColumn::singleline(translator.translate("Heading")),
        width: SettingsColumn::singleline(translator.translate("Width"))
            .with_class("code")
            .with_width(50),
        align: SettingsColumn::select(
            translator.translate("Alignment"),
            vec![
                SelectOption::new("left", translator.translate("Left")),
                SelectOption::new("center", translator.translate("Center")),
                SelectOption::new("right", translator.translate("Right")),
            ],
        )
        .with_class("thin"),
        cell_type: SettingsColumn::select(translator.translate("Type"), cell_type_options(translator))
            .with_class("thin"),
    }
}

/// Builds the dropdown-options sub-editor schema.
pub fn option_editor_schema(translator: &dyn Translator) -> OptionEditorSchema {
    OptionEditorSchema {
        label: SettingsColumn::singleline(translator.translate("Option Label"))
            .with_class("option-label")
            .autopopulating("value"),
        value: SettingsColumn::singleline(translator.translate("Value"))
            .with_class("option-value code"),
        default: SettingsColumn::checkbox(translator.translate("Default?"))
            .with_class("option-default thin")
            .radio(),
    }
}
