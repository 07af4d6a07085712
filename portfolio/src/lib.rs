//! Portfolio page behaviors on top of the folio runtime.
//!
//! [`install`] mounts every behavior of the page on a runtime; the modules
//! can also be mounted one by one.

pub mod config;
pub mod contact;
pub mod cursor_trail;
pub mod effects;
pub mod navigation;
pub mod page;
pub mod paths;
pub mod reveal;
pub mod summary;
pub mod typing;

use folio::Runtime;
use folio::state::State;
use log::info;

use crate::config::PortfolioConfig;
use crate::contact::{ContactForm, SimulatedTransport, SubmissionState, SubmitTransport};
use crate::cursor_trail::{CursorTrail, TrailHandle};
use crate::effects::{FooterYear, HoverLift, Parallax, StaggerCards};
use crate::navigation::{MobileMenu, NavbarScroll, SmoothScroll};
use crate::reveal::Reveal;
use crate::typing::TypingEffect;

/// Observers of the mounted page, handed back by [`install`].
#[derive(Debug, Clone)]
pub struct PageHandles {
    pub contact: State<SubmissionState>,
    pub trail: TrailHandle,
    /// Frames rendered by the cursor trail so far.
    pub trail_frames: State<u64>,
}

/// Mount every page behavior, delivering contact messages through the
/// simulated transport.
pub fn install(runtime: &mut Runtime, config: &PortfolioConfig) -> PageHandles {
    install_with_transport(runtime, config, SimulatedTransport)
}

pub fn install_with_transport(
    runtime: &mut Runtime,
    config: &PortfolioConfig,
    transport: impl SubmitTransport + 'static,
) -> PageHandles {
    runtime.mount(NavbarScroll::new(&config.navigation));
    runtime.mount(MobileMenu::new());
    runtime.mount(SmoothScroll::new(&config.navigation));
    runtime.mount(Reveal::new(&config.reveal));
    runtime.mount(TypingEffect::new(&config.typing));

    let form = ContactForm::new(&config.contact).with_transport(transport);
    let contact = form.status();
    runtime.mount(form);

    runtime.mount(Parallax::new(&config.effects));
    runtime.mount(HoverLift::new(&config.effects));
    runtime.mount(StaggerCards::new(&config.effects));
    runtime.mount(FooterYear::new());

    let (trail, handle) = CursorTrail::new(&config.trail);
    let trail_frames = trail.frames();
    runtime.mount(trail);

    info!("Mounted {} page behaviors", runtime.mounted());
    PageHandles {
        contact,
        trail: handle,
        trail_frames,
    }
}
