use pagedom::{Document, DomError, Element, Event, Viewport};

fn sample() -> Document {
    Document::new(Viewport::new(1024.0, 600.0))
        .with(
            Element::new("form")
                .id("contactForm")
                .child(Element::input("text").id("name"))
                .child(Element::div().id("nameError").class("error-message"))
                .child(Element::button("Send").id("send").attr("type", "submit")),
        )
        .and_then(|doc| {
            doc.with(
                Element::new("section")
                    .id("about")
                    .class("fade-in")
                    .layout(900.0, 400.0),
            )
        })
        .and_then(|doc| {
            doc.with(Element::div().id("footer").class("fade-in").layout(1800.0, 200.0))
        })
        .unwrap()
}

// ============================================================================
// Building & Lookup
// ============================================================================

#[test]
fn test_children_are_flattened_in_document_order() {
    let doc = sample();
    let ids: Vec<&str> = doc.elements().map(|el| el.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["contactForm", "name", "nameError", "send", "about", "footer"]
    );
    assert!(doc.elements().all(|el| el.children.is_empty()));
}

#[test]
fn test_parent_links() {
    let doc = sample();
    assert_eq!(doc.get("name").unwrap().parent(), Some("contactForm"));
    assert_eq!(doc.get("contactForm").unwrap().parent(), None);
    assert!(doc.is_descendant_of("send", "contactForm"));
    assert!(!doc.is_descendant_of("about", "contactForm"));
}

#[test]
fn test_find_within() {
    let doc = sample();
    let submit = doc
        .find_within("contactForm", |el| el.attribute("type") == Some("submit"))
        .unwrap();
    assert_eq!(submit.id, "send");
    assert!(doc
        .find_within("about", |el| el.attribute("type") == Some("submit"))
        .is_none());
}

#[test]
fn test_by_class() {
    let doc = sample();
    assert_eq!(doc.by_class("fade-in"), vec!["about", "footer"]);
    assert!(doc.by_class("missing").is_empty());
}

#[test]
fn test_require_missing_element() {
    let doc = sample();
    assert_eq!(
        doc.require("nope").unwrap_err(),
        DomError::NotFound("nope".to_string())
    );
}

#[test]
fn test_duplicate_id_rejected() {
    let mut doc = sample();
    let err = doc.append(Element::div().id("about")).unwrap_err();
    assert_eq!(err, DomError::DuplicateId("about".to_string()));
}

#[test]
fn test_append_to_unknown_parent() {
    let mut doc = sample();
    let err = doc.append_to("ghost", Element::div()).unwrap_err();
    assert_eq!(err, DomError::NotFound("ghost".to_string()));
}

#[test]
fn test_append_to_sets_parent() {
    let mut doc = sample();
    doc.append_to("about", Element::div().id("inner")).unwrap();
    assert!(doc.is_descendant_of("inner", "about"));
}

// ============================================================================
// Element Mutation
// ============================================================================

#[test]
fn test_class_toggling() {
    let mut doc = sample();
    let el = doc.get_mut("name").unwrap();
    assert!(el.add_class("error"));
    assert!(!el.add_class("error"));
    assert!(el.has_class("error"));
    assert!(!el.toggle_class("error"));
    assert!(!el.has_class("error"));
    assert!(el.toggle_class("error"));
    assert!(el.remove_class("error"));
    assert!(!el.remove_class("error"));
}

#[test]
fn test_inline_style() {
    let mut doc = sample();
    let el = doc.get_mut("about").unwrap();
    el.set_style("z-index", "10");
    assert_eq!(el.style_value("z-index"), Some("10"));
    assert_eq!(el.remove_style("z-index").as_deref(), Some("10"));
    assert_eq!(el.style_value("z-index"), None);
}

// ============================================================================
// Default Actions
// ============================================================================

#[test]
fn test_input_updates_value() {
    let mut doc = sample();
    doc.apply(&Event::input("name", "Jane"));
    assert_eq!(doc.get("name").unwrap().value, "Jane");
}

#[test]
fn test_input_for_unknown_target_is_ignored() {
    let mut doc = sample();
    doc.apply(&Event::input("ghost", "x"));
    assert!(!doc.contains("ghost"));
}

#[test]
fn test_scroll_is_clamped() {
    let mut doc = sample();
    // Document ends at 2000, viewport is 600 tall
    doc.apply(&Event::Scroll { y: 5000.0 });
    assert_eq!(doc.scroll_y(), 1400.0);
    doc.apply(&Event::Scroll { y: -20.0 });
    assert_eq!(doc.scroll_y(), 0.0);
    doc.apply(&Event::Scroll { y: 120.0 });
    assert_eq!(doc.scroll_y(), 120.0);
}

#[test]
fn test_resize_updates_viewport() {
    let mut doc = sample();
    doc.apply(&Event::Resize {
        width: 500.0,
        height: 900.0,
    });
    let viewport = doc.viewport();
    assert_eq!(viewport.width, 500.0);
    assert_eq!(viewport.height, 900.0);
}

// ============================================================================
// Event Serialization
// ============================================================================

#[test]
fn test_event_json_shape() {
    let event: Event =
        serde_json::from_str(r#"{"type":"input","target":"email","value":"a@b.c"}"#).unwrap();
    assert_eq!(event, Event::input("email", "a@b.c"));
    assert_eq!(event.target(), Some("email"));
    assert_eq!(event.name(), "input");

    let event: Event = serde_json::from_str(r#"{"type":"mouse_move","x":3,"y":4.5}"#).unwrap();
    assert_eq!(event, Event::MouseMove { x: 3.0, y: 4.5 });
    assert_eq!(event.target(), None);
}
