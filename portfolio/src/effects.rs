//! Small cosmetic behaviors.

use chrono::{Datelike, Local};
use folio::prelude::*;
use log::{debug, trace};

use crate::config::EffectsConfig;

pub const HERO_BACKGROUND_CLASS: &str = "hero-background";
pub const PORTFOLIO_ITEM_CLASS: &str = "portfolio-item";
pub const SERVICE_CARD_CLASS: &str = "service-card";
pub const YEAR_ID: &str = "year";

/// Moves the hero background at a fraction of the scroll speed.
pub struct Parallax {
    factor: f64,
}

impl Parallax {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            factor: config.parallax_factor,
        }
    }
}

impl Component for Parallax {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn on_event(&mut self, event: &Event, cx: &mut Context<'_>) {
        let Event::Scroll { .. } = event else {
            return;
        };
        let document = cx.document_mut();
        let offset = document.scroll_y() * self.factor;
        for id in document.by_class(HERO_BACKGROUND_CLASS) {
            if let Some(el) = document.get_mut(&id) {
                el.set_style("transform", format!("translateY({offset}px)"));
            }
        }
        trace!("parallax offset {}", offset);
    }
}

/// Raises the hovered portfolio item above its neighbours.
pub struct HoverLift {
    hover: i32,
    rest: i32,
}

impl HoverLift {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            hover: config.hover_z_index,
            rest: config.rest_z_index,
        }
    }
}

impl Component for HoverLift {
    fn name(&self) -> &'static str {
        "hover-lift"
    }

    fn on_event(&mut self, event: &Event, cx: &mut Context<'_>) {
        let (target, z_index) = match event {
            Event::MouseEnter { target } => (target, self.hover),
            Event::MouseLeave { target } => (target, self.rest),
            _ => return,
        };
        match cx.document_mut().get_mut(target) {
            Some(el) if el.has_class(PORTFOLIO_ITEM_CLASS) => {
                el.set_style("z-index", z_index.to_string());
            }
            _ => {}
        }
    }
}

/// Delay of the card at `index`, in seconds, rounded to the millisecond.
pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    (index as f64 * step_secs * 1000.0).round() / 1000.0
}

/// Staggers the entry animation of the service cards.
pub struct StaggerCards {
    step_secs: f64,
}

impl StaggerCards {
    pub fn new(config: &EffectsConfig) -> Self {
        Self {
            step_secs: config.stagger_step_secs,
        }
    }
}

impl Component for StaggerCards {
    fn name(&self) -> &'static str {
        "stagger-cards"
    }

    fn on_start(&mut self, cx: &mut Context<'_>) {
        let document = cx.document_mut();
        let cards = document.by_class(SERVICE_CARD_CLASS);
        for (index, id) in cards.iter().enumerate() {
            if let Some(el) = document.get_mut(id) {
                let delay = stagger_delay(index, self.step_secs);
                el.set_style("animation-delay", format!("{delay}s"));
            }
        }
        debug!("Staggered {} service cards", cards.len());
    }
}

/// Writes the current year into the footer.
#[derive(Debug, Default)]
pub struct FooterYear {
    year: Option<i32>,
}

impl FooterYear {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed year instead of the local clock.
    pub fn with_year(year: i32) -> Self {
        Self { year: Some(year) }
    }
}

impl Component for FooterYear {
    fn name(&self) -> &'static str {
        "footer-year"
    }

    fn on_start(&mut self, cx: &mut Context<'_>) {
        let year = self.year.unwrap_or_else(|| Local::now().year());
        if let Some(el) = cx.document_mut().get_mut(YEAR_ID) {
            el.set_text(year.to_string());
        }
    }
}
