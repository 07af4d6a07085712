use folio::prelude::*;
use folio::validation::is_email;
use folio::widgets::ERROR_CLASS;

fn form() -> Document {
    Document::new(Viewport::default())
        .with(
            Element::new("form")
                .id("form")
                .child(Element::input("text").id("username"))
                .child(Element::div().id("usernameError"))
                .child(Element::input("email").id("email"))
                .child(Element::div().id("emailError")),
        )
        .unwrap()
}

// =============================================================================
// Email Predicate
// =============================================================================

#[test]
fn test_is_email_accepts() {
    assert!(is_email("a@b.c"));
    assert!(is_email("user.name@sub.domain.org"));
}

#[test]
fn test_is_email_rejects() {
    for value in ["plaintext", "a@b", "@b.c", "a b@c.d", "a@b.c ", "a@@b.c", ""] {
        assert!(!is_email(value), "{value:?} should be rejected");
    }
}

// =============================================================================
// Input Widget
// =============================================================================

#[test]
fn test_input_error_display() {
    let mut doc = form();
    let input = Input::new("username");
    assert_eq!(input.error_id(), "usernameError");
    assert!(!input.has_error(&doc));

    input.set_error(&mut doc, "Nope");
    assert_eq!(input.error(&doc).as_deref(), Some("Nope"));
    assert!(doc.get("username").unwrap().has_class(ERROR_CLASS));

    input.clear_error(&mut doc);
    assert_eq!(input.error(&doc), None);
    assert!(!doc.get("username").unwrap().has_class(ERROR_CLASS));
}

#[test]
fn test_input_reset() {
    let mut doc = form();
    let input = Input::new("username");
    input.set_value(&mut doc, "jane");
    input.set_error(&mut doc, "Nope");
    input.reset(&mut doc);
    assert_eq!(input.value(&doc), "");
    assert!(!input.has_error(&doc));
}

// =============================================================================
// Validator
// =============================================================================

#[test]
fn test_first_failing_rule_wins() {
    let mut doc = form();
    let email = Input::new("email");

    let result = Validator::new()
        .field(&email, "email")
        .required("required")
        .email("bad email")
        .validate(&mut doc);
    assert_eq!(result.first_error().unwrap().message, "required");
    assert_eq!(email.error(&doc).as_deref(), Some("required"));

    email.set_value(&mut doc, "nope");
    let result = Validator::new()
        .field(&email, "email")
        .required("required")
        .email("bad email")
        .validate(&mut doc);
    assert_eq!(result.first_error().unwrap().message, "bad email");
    assert_eq!(email.error(&doc).as_deref(), Some("bad email"));
}

#[test]
fn test_rules_see_trimmed_value() {
    let mut doc = form();
    let username = Input::new("username");
    username.set_value(&mut doc, "   ab   ");

    let result = Validator::new()
        .field(&username, "username")
        .min_length(3, "too short")
        .validate(&mut doc);
    assert!(result.is_invalid());

    username.set_value(&mut doc, "  abc  ");
    let result = Validator::new()
        .field(&username, "username")
        .min_length(3, "too short")
        .max_length(3, "too long")
        .validate(&mut doc);
    assert!(result.is_valid());
}

#[test]
fn test_length_counts_characters() {
    let mut doc = form();
    let username = Input::new("username");

    // Five emoji: 20 bytes, 10 UTF-16 units, 5 characters
    username.set_value(&mut doc, "😀😀😀😀😀");
    let result = Validator::new()
        .field(&username, "username")
        .min_length(10, "too short")
        .validate(&mut doc);
    assert_eq!(result.message_for("username"), Some("too short"));

    username.set_value(&mut doc, "éééééééééé");
    let result = Validator::new()
        .field(&username, "username")
        .min_length(10, "too short")
        .max_length(10, "too long")
        .validate(&mut doc);
    assert!(result.is_valid());
}

#[test]
fn test_every_field_is_validated() {
    let mut doc = form();
    let result = Validator::new()
        .field(&Input::new("username"), "username")
        .required("username required")
        .field(&Input::new("email"), "email")
        .required("email required")
        .validate(&mut doc);

    assert_eq!(result.errors().len(), 2);
    assert_eq!(result.first_invalid_element(), Some("username"));
    assert_eq!(result.message_for("email"), Some("email required"));
    assert_eq!(doc.get("emailError").unwrap().text, "email required");
}

#[test]
fn test_valid_field_clears_previous_error() {
    let mut doc = form();
    let username = Input::new("username");
    username.set_error(&mut doc, "stale");
    username.set_value(&mut doc, "jane");

    let result = Validator::new()
        .field(&username, "username")
        .required("required")
        .validate(&mut doc);
    assert_eq!(result, ValidationResult::Valid);
    assert!(!username.has_error(&doc));
}

#[test]
fn test_custom_rule() {
    let mut doc = form();
    let username = Input::new("username");
    username.set_value(&mut doc, "admin");

    let result = Validator::new()
        .field(&username, "username")
        .rule(|v| v != "admin", "reserved")
        .validate(&mut doc);
    assert_eq!(result.first_error().unwrap().message, "reserved");
}
