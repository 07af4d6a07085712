//! Validator builder for fluent validation API.

use log::trace;
use pagedom::Document;

use super::result::{FieldError, ValidationResult};
use super::rules::is_email;
use super::validatable::Validatable;

/// A rule: predicate over the trimmed value plus the message shown when it fails.
struct Rule {
    check: Box<dyn Fn(&str) -> bool>,
    message: String,
}

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    widget: Box<dyn Validatable>,
    rules: Vec<Rule>,
}

impl FieldEntry {
    /// Clear the displayed error, then run rules in order; the first
    /// failure is displayed and returned.
    fn run(&self, document: &mut Document) -> Option<FieldError> {
        self.widget.clear_error(document);

        let raw = self.widget.validation_value(document);
        let value = raw.trim();
        let failed = self.rules.iter().find(|rule| !(rule.check)(value))?;

        trace!("field '{}' failed: {}", self.name, failed.message);
        self.widget.set_error(document, &failed.message);
        Some(FieldError {
            field: self.name.clone(),
            element_id: self.widget.element_id(),
            message: failed.message.clone(),
        })
    }
}

/// Builder for validating multiple form fields.
///
/// Every field is validated (so every error gets displayed), but within a
/// field only the first failing rule counts.
///
/// # Example
///
/// ```ignore
/// let result = Validator::new()
///     .field(&name, "name")
///         .required("Name is required")
///     .field(&message, "message")
///         .required("Message is required")
///         .min_length(10, "Too short")
///     .validate(document);
///
/// if result.is_valid() {
///     // Submit form
/// }
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<W: Validatable + Clone + 'static>(
        self,
        widget: &W,
        name: impl Into<String>,
    ) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            widget: Box::new(widget.clone()),
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Run all validations against the document.
    pub fn validate(self, document: &mut Document) -> ValidationResult {
        ValidationResult::from_errors(
            self.fields
                .iter()
                .filter_map(|field| field.run(document))
                .collect(),
        )
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    widget: Box<dyn Validatable>,
    name: String,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom validation rule. `f` receives the trimmed value.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.rules.push(Rule {
            check: Box::new(f),
            message: msg.into(),
        });
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require a valid email address.
    ///
    /// Empty is valid; use `required()` for non-empty.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.is_empty() || is_email(v), msg)
    }

    /// Continue to the next field.
    pub fn field<W: Validatable + Clone + 'static>(
        self,
        widget: &W,
        name: impl Into<String>,
    ) -> FieldBuilder {
        self.finalize().field(widget, name)
    }

    /// Finalize and run all validations.
    pub fn validate(self, document: &mut Document) -> ValidationResult {
        self.finalize().validate(document)
    }

    /// Finalize this field and return the validator.
    pub fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name: self.name,
            widget: self.widget,
            rules: self.rules,
        });
        validator
    }
}
