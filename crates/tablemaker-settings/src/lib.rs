//! Settings-panel schema resolver for the table field.
//!
//! Pure configuration construction: the fixed schemas that drive the
//! columns editor and the dropdown-options sub-editor, and the payloads
//! handed to the host's editable-table template call and the
//! client-side widget. Host concerns arrive as injected capabilities
//! ([`Translator`], [`AssetRegistrar`]) rather than ambient globals.

pub mod host;
pub mod schema;
pub mod widget;

pub use host::{AssetBundle, AssetRegistrar, DefaultTranslator, NoopRegistrar, Translator};
pub use schema::{
    ColumnEditorSchema, OptionEditorSchema, SelectOption, SettingsColumn, cell_type_options,
    column_editor_schema, option_editor_schema,
};
pub use widget::{
    EditableTableConfig, FieldInputBuilder, FieldSettings, WidgetInit, WidgetPayload,
};
