//! Scroll-triggered fade-in.

use folio::prelude::*;
use log::debug;
use pagedom::{Span, intersection_ratio};

use crate::config::RevealConfig;

pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

/// Marks `.fade-in` elements `visible` the first time enough of them is on screen.
pub struct Reveal {
    threshold: f64,
    bottom_margin: f64,
}

impl Reveal {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin: config.bottom_margin,
        }
    }

    fn check(&self, document: &mut Document) {
        let root = document.viewport().visible_span(self.bottom_margin);
        let due = document.ids_where(|el| {
            el.has_class(FADE_IN_CLASS)
                && !el.has_class(VISIBLE_CLASS)
                && intersection_ratio(Span::new(el.top, el.bottom()), root) >= self.threshold
        });

        for id in due {
            if let Some(el) = document.get_mut(&id) {
                el.add_class(VISIBLE_CLASS);
                debug!("Revealed #{}", id);
            }
        }
    }
}

impl Component for Reveal {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn on_start(&mut self, cx: &mut Context<'_>) {
        self.check(cx.document_mut());
    }

    fn on_event(&mut self, event: &Event, cx: &mut Context<'_>) {
        if matches!(event, Event::Scroll { .. } | Event::Resize { .. }) {
            self.check(cx.document_mut());
        }
    }
}
