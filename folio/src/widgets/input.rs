use pagedom::Document;

use crate::validation::Validatable;

/// Class put on a field while it displays an error.
pub const ERROR_CLASS: &str = "error";

/// A text field bound to a document element.
///
/// The error message is shown in a sibling element named by convention
/// `{id}Error`; the field itself carries the [`ERROR_CLASS`] marker while an
/// error is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    id: String,
    error_id: String,
}

impl Input {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let error_id = format!("{id}Error");
        Self { id, error_id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the element displaying this field's error.
    pub fn error_id(&self) -> &str {
        &self.error_id
    }

    /// Raw value of the field (empty if the element is missing).
    pub fn value(&self, document: &Document) -> String {
        document
            .get(&self.id)
            .map(|el| el.value.clone())
            .unwrap_or_default()
    }

    pub fn set_value(&self, document: &mut Document, value: impl Into<String>) {
        if let Some(el) = document.get_mut(&self.id) {
            el.set_value(value);
        }
    }

    /// Empty the value and drop any displayed error.
    pub fn reset(&self, document: &mut Document) {
        self.set_value(document, "");
        self.clear_error(document);
    }
}

impl Validatable for Input {
    fn validation_value(&self, document: &Document) -> String {
        self.value(document)
    }

    fn set_error(&self, document: &mut Document, msg: &str) {
        if let Some(el) = document.get_mut(&self.error_id) {
            el.set_text(msg);
        }
        if let Some(el) = document.get_mut(&self.id) {
            el.add_class(ERROR_CLASS);
        }
    }

    fn clear_error(&self, document: &mut Document) {
        if let Some(el) = document.get_mut(&self.error_id) {
            el.set_text("");
        }
        if let Some(el) = document.get_mut(&self.id) {
            el.remove_class(ERROR_CLASS);
        }
    }

    fn error(&self, document: &Document) -> Option<String> {
        document
            .get(&self.error_id)
            .map(|el| el.text.clone())
            .filter(|text| !text.is_empty())
    }

    fn element_id(&self) -> String {
        self.id.clone()
    }
}
