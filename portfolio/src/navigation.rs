//! Navbar scroll state, mobile menu and smooth in-page scrolling.

use folio::prelude::*;
use log::{debug, trace, warn};

use crate::config::NavigationConfig;

pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_CLASS: &str = "nav-link";

const SCROLLED_CLASS: &str = "scrolled";
const ACTIVE_CLASS: &str = "active";

/// Marks the navbar `scrolled` once the page is scrolled past a threshold.
pub struct NavbarScroll {
    threshold: f64,
    last_scroll: f64,
}

impl NavbarScroll {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            threshold: config.scrolled_threshold,
            last_scroll: 0.0,
        }
    }

    fn update(&mut self, document: &mut Document) {
        let y = document.scroll_y();
        self.last_scroll = y;
        let Some(navbar) = document.get_mut(NAVBAR_ID) else {
            return;
        };
        let changed = if y > self.threshold {
            navbar.add_class(SCROLLED_CLASS)
        } else {
            navbar.remove_class(SCROLLED_CLASS)
        };
        if changed {
            debug!("Navbar scrolled: {}", y > self.threshold);
        }
    }
}

impl Component for NavbarScroll {
    fn name(&self) -> &'static str {
        "navbar-scroll"
    }

    fn on_start(&mut self, cx: &mut Context<'_>) {
        if !cx.document().contains(NAVBAR_ID) {
            warn!("No #{} on the page", NAVBAR_ID);
        }
        self.update(cx.document_mut());
    }

    fn on_event(&mut self, event: &Event, cx: &mut Context<'_>) {
        if let Event::Scroll { .. } = event {
            self.update(cx.document_mut());
        }
    }
}

/// Opens and closes the collapsed navigation menu.
#[derive(Debug, Default)]
pub struct MobileMenu;

impl MobileMenu {
    pub fn new() -> Self {
        Self
    }
}

impl Component for MobileMenu {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }

    fn on_start(&mut self, cx: &mut Context<'_>) {
        let document = cx.document();
        if !document.contains(NAV_TOGGLE_ID) || !document.contains(NAV_MENU_ID) {
            warn!("Mobile menu elements missing, menu toggling is inert");
        }
    }

    fn on_event(&mut self, event: &Event, cx: &mut Context<'_>) {
        let Event::Click { target } = event else {
            return;
        };
        let document = cx.document_mut();

        if target == NAV_TOGGLE_ID {
            let mut open = false;
            for id in [NAV_MENU_ID, NAV_TOGGLE_ID] {
                if let Some(el) = document.get_mut(id) {
                    open = el.toggle_class(ACTIVE_CLASS);
                }
            }
            debug!("Mobile menu open: {}", open);
        } else if document
            .get(target)
            .is_some_and(|el| el.has_class(NAV_LINK_CLASS))
        {
            for id in [NAV_MENU_ID, NAV_TOGGLE_ID] {
                if let Some(el) = document.get_mut(id) {
                    el.remove_class(ACTIVE_CLASS);
                }
            }
        }
    }
}

/// Animates the window to in-page anchors instead of jumping.
pub struct SmoothScroll {
    offset: f64,
    duration: std::time::Duration,
    tween: Option<Tween>,
    frame: Option<FrameHandle>,
}

impl SmoothScroll {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            offset: config.anchor_offset,
            duration: config.smooth_scroll(),
            tween: None,
            frame: None,
        }
    }

    /// Scroll destination for a click on `target`, if it is an in-page anchor.
    fn destination(&self, document: &Document, target: &str) -> Option<f64> {
        let href = document.get(target)?.attribute("href")?;
        let anchor = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        let Some(section) = document.get(anchor) else {
            debug!("Anchor #{} has no target", anchor);
            return None;
        };
        Some(section.top - self.offset)
    }
}

impl Component for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    fn on_event(&mut self, event: &Event, cx: &mut Context<'_>) {
        let Event::Click { target } = event else {
            return;
        };
        let Some(to) = self.destination(cx.document(), target) else {
            return;
        };

        if let Some(frame) = self.frame.take() {
            cx.cancel_frame(frame);
        }
        let from = cx.document().scroll_y();
        debug!("Smooth scroll {} -> {}", from, to);
        self.tween = Some(Tween::new(
            from,
            to,
            cx.now(),
            self.duration,
            Easing::EaseInOut,
        ));
        self.frame = Some(cx.request_frame());
    }

    fn on_frame(&mut self, cx: &mut Context<'_>) {
        self.frame = None;
        let Some(tween) = self.tween else {
            return;
        };

        let now = cx.now();
        let y = tween.value_at(now);
        trace!("smooth scroll step to {}", y);
        cx.scroll_to(y);

        if tween.is_complete(now) {
            self.tween = None;
        } else {
            self.frame = Some(cx.request_frame());
        }
    }

    fn on_stop(&mut self, cx: &mut Context<'_>) {
        self.tween = None;
        if let Some(frame) = self.frame.take() {
            cx.cancel_frame(frame);
        }
    }
}
