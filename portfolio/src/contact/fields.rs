//! The contact form's fixed fields and their rules.

use folio::validation::{ValidationResult, Validator};
use folio::widgets::Input;
use pagedom::Document;
use thiserror::Error;

/// Validation failures, displayed verbatim next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {0} characters")]
    TooShort(usize),
}

/// One of the four contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Subject,
        FieldId::Message,
    ];

    /// Element id of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }

    /// Element id of the field's error region.
    pub fn error_id(self) -> String {
        format!("{}Error", self.as_str())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == id)
    }

    pub fn input(self) -> Input {
        Input::new(self.as_str())
    }
}

/// Rules of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub required: bool,
    pub email: bool,
    pub min_length: Option<usize>,
}

impl FieldSpec {
    /// Rules for `id`; `message_min_length` applies to the message field only.
    pub fn for_field(id: FieldId, message_min_length: usize) -> Self {
        Self {
            id,
            required: true,
            email: id == FieldId::Email,
            min_length: (id == FieldId::Message).then_some(message_min_length),
        }
    }

    /// Validate this field against the document, updating its error display.
    ///
    /// Rules run in order (required, email format, minimum length) and the
    /// first failure is displayed.
    pub fn validate(&self, document: &mut Document) -> bool {
        self.add_to(Validator::new()).validate(document).is_valid()
    }

    /// Append this field and its rules to a validator.
    pub fn add_to(&self, validator: Validator) -> Validator {
        let mut field = validator.field(&self.id.input(), self.id.as_str());
        if self.required {
            field = field.required(ValidationError::Required.to_string());
        }
        if self.email {
            field = field.email(ValidationError::InvalidEmail.to_string());
        }
        if let Some(min) = self.min_length {
            field = field.min_length(min, ValidationError::TooShort(min).to_string());
        }
        field.finalize()
    }
}

/// The four field specs in form order.
pub fn contact_fields(message_min_length: usize) -> [FieldSpec; 4] {
    FieldId::ALL.map(|id| FieldSpec::for_field(id, message_min_length))
}

/// Validate every field (so every error is displayed).
pub fn validate_all(fields: &[FieldSpec], document: &mut Document) -> ValidationResult {
    fields
        .iter()
        .fold(Validator::new(), |validator, spec| spec.add_to(validator))
        .validate(document)
}
