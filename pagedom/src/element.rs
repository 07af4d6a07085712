use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of the page.
///
/// Elements are built with the consuming builder methods and then inserted
/// into a [`Document`](crate::Document), which flattens `children` into its
/// own arena. After insertion, mutate elements through the `&mut self`
/// methods (`add_class`, `set_style`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub text: String,
    /// Current value of form controls (`input`, `textarea`).
    pub value: String,

    // Visual
    pub classes: BTreeSet<String>,
    /// Inline style declarations, property name -> value.
    pub style: BTreeMap<String, String>,
    pub attrs: BTreeMap<String, String>,

    // Layout box in document coordinates (vertical axis only)
    pub top: f64,
    pub height: f64,

    // State
    pub disabled: bool,

    pub(crate) parent: Option<String>,
    /// Children awaiting insertion. Always empty once the element is part of a document.
    pub children: Vec<Element>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            text: String::new(),
            value: String::new(),
            classes: BTreeSet::new(),
            style: BTreeMap::new(),
            attrs: BTreeMap::new(),
            top: 0.0,
            height: 0.0,
            disabled: false,
            parent: None,
            children: Vec::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    /// Create an `<input>` of the given type (`text`, `email`, ...).
    pub fn input(kind: &str) -> Self {
        Self::new("input").attr("type", kind)
    }

    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").text(label)
    }

    /// Create an anchor pointing at `href`.
    pub fn link(href: &str, label: impl Into<String>) -> Self {
        Self::new("a").attr("href", href).text(label)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    // Visual
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    // Layout
    pub fn layout(mut self, top: f64, height: f64) -> Self {
        self.top = top;
        self.height = height;
        self
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // Queries

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Inline style value for `property`, if set.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Bottom edge of the layout box.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    // Mutation

    /// Add a class. Returns true if it was not present.
    pub fn add_class(&mut self, class: &str) -> bool {
        self.classes.insert(class.to_string())
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    /// Toggle a class. Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.style.insert(property.to_string(), value.into());
    }

    pub fn remove_style(&mut self, property: &str) -> Option<String> {
        self.style.remove(property)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
