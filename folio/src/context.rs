use std::collections::VecDeque;
use std::time::Duration;

use pagedom::{Document, Event};

use crate::component::ComponentId;
use crate::scheduler::{FrameHandle, Scheduler, TimerHandle};

/// Handler context passed to every [`Component`](crate::Component) hook.
///
/// Gives access to the document and schedules work on behalf of the
/// component the hook belongs to.
pub struct Context<'a> {
    owner: ComponentId,
    document: &'a mut Document,
    scheduler: &'a mut Scheduler,
    events: &'a mut VecDeque<Event>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        owner: ComponentId,
        document: &'a mut Document,
        scheduler: &'a mut Scheduler,
        events: &'a mut VecDeque<Event>,
    ) -> Self {
        Self {
            owner,
            document,
            scheduler,
            events,
        }
    }

    /// The component this context belongs to.
    pub fn owner(&self) -> ComponentId {
        self.owner
    }

    pub fn document(&self) -> &Document {
        &*self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut *self.document
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    // Scheduling

    /// Schedule `on_timer(tag)` on this component after `delay`.
    pub fn set_timeout(&mut self, delay: Duration, tag: u32) -> TimerHandle {
        self.scheduler.set_timeout(self.owner, delay, tag)
    }

    pub fn cancel_timeout(&mut self, handle: TimerHandle) -> bool {
        self.scheduler.cancel_timeout(handle)
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.scheduler.is_pending(handle)
    }

    /// Schedule `on_frame` on this component at the next frame tick.
    pub fn request_frame(&mut self) -> FrameHandle {
        self.scheduler.request_frame(self.owner)
    }

    pub fn cancel_frame(&mut self, handle: FrameHandle) -> bool {
        self.scheduler.cancel_frame(handle)
    }

    // Events

    /// Queue an event for dispatch once the current hook returns.
    pub fn emit(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Scroll the window and notify listeners with a scroll event.
    pub fn scroll_to(&mut self, y: f64) {
        self.document.scroll_to(y);
        let y = self.document.scroll_y();
        self.emit(Event::Scroll { y });
    }
}
