use std::collections::HashMap;

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::Element;
use crate::event::Event;
use crate::geometry::Span;

/// Document error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("element not found: #{0}")]
    NotFound(String),
    #[error("duplicate element id: #{0}")]
    DuplicateId(String),
}

/// Visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Vertical scroll offset of the window.
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    /// Visible extent in document coordinates, with `bottom_margin` added to
    /// the bottom edge (negative values shrink it).
    pub fn visible_span(&self, bottom_margin: f64) -> Span {
        Span::new(self.scroll_y, self.scroll_y + self.height + bottom_margin)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// In-memory page: a flat arena of elements in document order plus the viewport.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    index: HashMap<String, usize>,
    viewport: Viewport,
}

impl Document {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            elements: Vec::new(),
            index: HashMap::new(),
            viewport,
        }
    }

    /// Builder form of [`append`](Self::append).
    pub fn with(mut self, element: Element) -> Result<Self, DomError> {
        self.append(element)?;
        Ok(self)
    }

    /// Insert a top-level element and its children.
    pub fn append(&mut self, element: Element) -> Result<(), DomError> {
        self.insert(None, element)
    }

    /// Insert an element (and its children) under `parent`.
    pub fn append_to(&mut self, parent: &str, element: Element) -> Result<(), DomError> {
        if !self.index.contains_key(parent) {
            return Err(DomError::NotFound(parent.to_string()));
        }
        self.insert(Some(parent.to_string()), element)
    }

    fn insert(&mut self, parent: Option<String>, mut element: Element) -> Result<(), DomError> {
        if self.index.contains_key(&element.id) {
            return Err(DomError::DuplicateId(element.id));
        }
        let children = std::mem::take(&mut element.children);
        let id = element.id.clone();
        element.parent = parent;

        trace!("insert #{} <{}>", id, element.tag);
        self.index.insert(id.clone(), self.elements.len());
        self.elements.push(element);

        for child in children {
            self.insert(Some(id.clone()), child)?;
        }
        Ok(())
    }

    // Lookup

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.index.get(id).map(|&i| &mut self.elements[i])
    }

    pub fn require(&self, id: &str) -> Result<&Element, DomError> {
        self.get(id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    pub fn require_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.get_mut(id)
            .ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    /// All elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Ids of elements carrying `class`, in document order.
    pub fn by_class(&self, class: &str) -> Vec<String> {
        self.ids_where(|el| el.has_class(class))
    }

    /// Ids of elements matching `predicate`, in document order.
    pub fn ids_where(&self, predicate: impl Fn(&Element) -> bool) -> Vec<String> {
        self.elements
            .iter()
            .filter(|el| predicate(el))
            .map(|el| el.id.clone())
            .collect()
    }

    /// First element matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.elements.iter().find(|el| predicate(el))
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub fn is_descendant_of(&self, id: &str, ancestor: &str) -> bool {
        let mut current = self.get(id).and_then(Element::parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.get(parent).and_then(Element::parent);
        }
        false
    }

    /// First descendant of `ancestor` matching `predicate`.
    pub fn find_within(
        &self,
        ancestor: &str,
        predicate: impl Fn(&Element) -> bool,
    ) -> Option<&Element> {
        self.elements
            .iter()
            .find(|el| predicate(el) && self.is_descendant_of(&el.id, ancestor))
    }

    // Viewport

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y
    }

    /// Total document height (lowest element edge).
    pub fn scroll_height(&self) -> f64 {
        self.elements
            .iter()
            .map(Element::bottom)
            .fold(self.viewport.height, f64::max)
    }

    /// Scroll the window, clamping to the scrollable range.
    pub fn scroll_to(&mut self, y: f64) {
        let max = (self.scroll_height() - self.viewport.height).max(0.0);
        self.viewport.scroll_y = y.clamp(0.0, max);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
        let y = self.viewport.scroll_y;
        self.scroll_to(y);
    }

    /// Apply the host's default action for an event before handlers run.
    ///
    /// Inputs update the control's value, scrolls move the window and
    /// resizes change the viewport. Everything else has no default action.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Input { target, value } => {
                if let Some(el) = self.get_mut(target) {
                    el.set_value(value.clone());
                }
            }
            Event::Scroll { y } => self.scroll_to(*y),
            Event::Resize { width, height } => self.resize(*width, *height),
            _ => {}
        }
    }
}
