/// A field that failed, with the message now displayed next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub element_id: String,
    pub message: String,
}

/// Outcome of a [`Validator`](super::Validator) run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    /// Failed fields in validation order. Never empty.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// `Valid` when `errors` is empty.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldError] {
        if let Self::Invalid(errors) = self {
            errors
        } else {
            &[]
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Message displayed for `field`, if it failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Element to focus after a failed submit.
    pub fn first_invalid_element(&self) -> Option<&str> {
        self.first_error().map(|e| e.element_id.as_str())
    }
}
