//! Handles onto document elements with widget behavior.

mod input;

pub use input::{ERROR_CLASS, Input};
