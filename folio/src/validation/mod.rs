//! Form validation for Folio pages.
//!
//! A fluent API over fields living in the document. Each field gets an
//! ordered list of rules; the first failing rule decides the field's error
//! message. Rules always see the trimmed value.
//!
//! # Example
//!
//! ```ignore
//! use folio::validation::Validator;
//! use folio::widgets::Input;
//!
//! let result = Validator::new()
//!     .field(&Input::new("name"), "name")
//!         .required("This field is required")
//!     .field(&Input::new("email"), "email")
//!         .required("This field is required")
//!         .email("Please enter a valid email address")
//!     .validate(cx.document_mut());
//!
//! if result.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

mod result;
mod rules;
mod validatable;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use rules::is_email;
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
