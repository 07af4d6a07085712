//! Typewriter effect on the hero title.

use folio::prelude::*;
use log::{debug, warn};

use crate::config::TypingConfig;

pub const HERO_TITLE_CLASS: &str = "hero-title";

/// Clears the hero title on start and types it back one character at a time.
pub struct TypingEffect {
    config: TypingConfig,
    target: Option<String>,
    text: Vec<char>,
    typed: usize,
}

impl TypingEffect {
    pub fn new(config: &TypingConfig) -> Self {
        Self {
            config: config.clone(),
            target: None,
            text: Vec::new(),
            typed: 0,
        }
    }
}

impl Component for TypingEffect {
    fn name(&self) -> &'static str {
        "typing-effect"
    }

    fn on_start(&mut self, cx: &mut Context<'_>) {
        let Some(id) = cx.document().by_class(HERO_TITLE_CLASS).into_iter().next() else {
            warn!("No .{} on the page", HERO_TITLE_CLASS);
            return;
        };
        let Some(title) = cx.document_mut().get_mut(&id) else {
            return;
        };

        self.text = title.text.chars().collect();
        title.set_text("");
        debug!("Typing {} characters into #{}", self.text.len(), id);
        self.target = Some(id);

        if !self.text.is_empty() {
            cx.set_timeout(self.config.start_delay(), 0);
        }
    }

    fn on_timer(&mut self, _tag: u32, cx: &mut Context<'_>) {
        let Some(id) = self.target.as_deref() else {
            return;
        };
        let Some(&next) = self.text.get(self.typed) else {
            return;
        };
        if let Some(title) = cx.document_mut().get_mut(id) {
            title.text.push(next);
        }
        self.typed += 1;

        if self.typed < self.text.len() {
            cx.set_timeout(self.config.char_delay(), 0);
        } else {
            debug!("Typing finished");
        }
    }
}
