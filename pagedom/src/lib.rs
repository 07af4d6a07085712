pub mod document;
pub mod element;
pub mod event;
pub mod geometry;

pub use document::{Document, DomError, Viewport};
pub use element::Element;
pub use event::Event;
pub use geometry::{intersection_ratio, Span};
