//! Capabilities supplied by the host CMS.

/// Host-supplied translation capability.
///
/// The host owns the translation catalog; the resolver only hands it
/// source-language strings.
pub trait Translator {
    fn translate(&self, message: &str) -> String;
}

/// Identity translator used when the host supplies none.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn translate(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Client-side bundles the editor widget needs loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetBundle {
    /// The field's own editor scripts and styles.
    FieldEditor,
    /// The shared editable-table settings scripts.
    TableSettings,
}

/// Host-supplied asset registration capability.
pub trait AssetRegistrar {
    fn register(&mut self, bundle: AssetBundle);
}

/// Registrar for hosts without an asset pipeline, and for tests.
#[derive(Debug, Default)]
pub struct NoopRegistrar;

impl AssetRegistrar for NoopRegistrar {
    fn register(&mut self, _bundle: AssetBundle) {}
}
