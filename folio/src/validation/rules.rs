//! Pure predicates behind the built-in rules.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld`: no whitespace or `@` in any part, at least one dot
/// after the `@`.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Whether `value` looks like an email address.
///
/// The value is matched as given; trim it first if needed.
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}
