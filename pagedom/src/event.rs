use serde::{Deserialize, Serialize};

/// Page events with element targeting.
///
/// Serialized as internally tagged JSON, e.g.
/// `{"type":"input","target":"email","value":"a@b.c"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Window scrolled to a vertical offset
    Scroll { y: f64 },
    /// Element clicked
    Click { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Form control value changed
    Input { target: String, value: String },
    /// Form submitted (default navigation is always suppressed)
    Submit { target: String },
    /// Pointer moved, in viewport coordinates
    MouseMove { x: f64, y: f64 },
    /// Pointer entered an element
    MouseEnter { target: String },
    /// Pointer left an element
    MouseLeave { target: String },
    /// Viewport resized
    Resize { width: f64, height: f64 },
}

impl Event {
    /// Id of the element the event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target }
            | Event::Blur { target }
            | Event::Input { target, .. }
            | Event::Submit { target }
            | Event::MouseEnter { target }
            | Event::MouseLeave { target } => Some(target),
            Event::Scroll { .. } | Event::MouseMove { .. } | Event::Resize { .. } => None,
        }
    }

    /// Short name, matching the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Scroll { .. } => "scroll",
            Event::Click { .. } => "click",
            Event::Blur { .. } => "blur",
            Event::Input { .. } => "input",
            Event::Submit { .. } => "submit",
            Event::MouseMove { .. } => "mouse_move",
            Event::MouseEnter { .. } => "mouse_enter",
            Event::MouseLeave { .. } => "mouse_leave",
            Event::Resize { .. } => "resize",
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }

    pub fn blur(target: impl Into<String>) -> Self {
        Event::Blur {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Event::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Event::Submit {
            target: target.into(),
        }
    }
}
