//! Validatable trait for document-backed fields.

use pagedom::Document;

/// Trait for fields that can be validated.
///
/// Fields are thin handles onto document elements: the value and the error
/// display both live in the document, so every method takes it.
pub trait Validatable {
    /// Extract the current (untrimmed) value for validation.
    fn validation_value(&self, document: &Document) -> String;

    /// Display a validation error on this field.
    fn set_error(&self, document: &mut Document, msg: &str);

    /// Clear the validation error.
    fn clear_error(&self, document: &mut Document);

    /// Get the currently displayed error message (if any).
    fn error(&self, document: &Document) -> Option<String>;

    /// Check if the field currently displays an error.
    fn has_error(&self, document: &Document) -> bool {
        self.error(document).is_some()
    }

    /// Get the element id for focusing.
    fn element_id(&self) -> String;
}
