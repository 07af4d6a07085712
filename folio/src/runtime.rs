//! Folio runtime - owns the document, the scheduler and the mounted components.

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, info, trace};
use pagedom::{Document, Event};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::component::{Component, ComponentId};
use crate::context::Context;
use crate::scheduler::{Due, Scheduler};

/// Folio runtime - the main entry point for running a page.
///
/// Events go in through [`dispatch`](Self::dispatch). Time moves either
/// deterministically through [`advance`](Self::advance) or in real time
/// through [`run`](Self::run).
pub struct Runtime {
    document: Document,
    scheduler: Scheduler,
    components: Vec<Option<Box<dyn Component>>>,
    queued: VecDeque<Event>,
}

impl Runtime {
    /// Create a runtime for a document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            scheduler: Scheduler::default(),
            components: Vec::new(),
            queued: VecDeque::new(),
        }
    }

    /// Set the frame interval. Only meaningful before anything is scheduled.
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.scheduler = Scheduler::new(interval);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of mounted components.
    pub fn mounted(&self) -> usize {
        self.components.iter().flatten().count()
    }

    // Lifecycle

    /// Mount a component and run its `on_start` hook.
    pub fn mount(&mut self, component: impl Component + 'static) -> ComponentId {
        let id = ComponentId::from_index(self.components.len());
        debug!("Mounting {} as {:?}", component.name(), id);
        self.components.push(Some(Box::new(component)));
        self.with_component(id, |component, cx| component.on_start(cx));
        self.flush();
        id
    }

    /// Unmount a component: run `on_stop`, then cancel everything it scheduled.
    pub fn unmount(&mut self, id: ComponentId) -> bool {
        let Some(slot) = self.components.get_mut(id.index()) else {
            return false;
        };
        let Some(mut component) = slot.take() else {
            return false;
        };

        let mut cx = Context::new(
            id,
            &mut self.document,
            &mut self.scheduler,
            &mut self.queued,
        );
        component.on_stop(&mut cx);
        let cancelled = self.scheduler.cancel_owned(id);
        debug!(
            "Unmounted {} ({:?}), cancelled {} pending item(s)",
            component.name(),
            id,
            cancelled
        );
        self.flush();
        true
    }

    /// Unmount every component (page teardown).
    pub fn stop(&mut self) {
        info!("Stopping runtime at {:?}", self.now());
        for index in 0..self.components.len() {
            self.unmount(ComponentId::from_index(index));
        }
        self.scheduler.clear();
        self.queued.clear();
    }

    // Events

    /// Dispatch an event to every component, after the document's default action.
    ///
    /// Events emitted by handlers are dispatched afterwards, in order.
    pub fn dispatch(&mut self, event: Event) {
        self.queued.push_back(event);
        self.flush();
    }

    fn flush(&mut self) {
        while let Some(event) = self.queued.pop_front() {
            trace!("dispatch {:?}", event);
            self.document.apply(&event);
            for (index, slot) in self.components.iter_mut().enumerate() {
                if let Some(component) = slot {
                    let mut cx = Context::new(
                        ComponentId::from_index(index),
                        &mut self.document,
                        &mut self.scheduler,
                        &mut self.queued,
                    );
                    component.on_event(&event, &mut cx);
                }
            }
        }
    }

    fn with_component<F>(&mut self, id: ComponentId, f: F)
    where
        F: FnOnce(&mut dyn Component, &mut Context<'_>),
    {
        let Some(Some(component)) = self.components.get_mut(id.index()) else {
            return;
        };
        let mut cx = Context::new(
            id,
            &mut self.document,
            &mut self.scheduler,
            &mut self.queued,
        );
        f(component.as_mut(), &mut cx);
    }

    // Time

    /// Advance virtual time by `duration`, firing timers and frame ticks in order.
    pub fn advance(&mut self, duration: Duration) {
        let until = self.now() + duration;
        self.advance_to(until);
    }

    /// Advance virtual time to `until` (no-op if already past it).
    pub fn advance_to(&mut self, until: Duration) {
        while let Some(due) = self.scheduler.pop_due(until) {
            self.fire(due);
        }
        self.scheduler.set_now(until);
    }

    /// Advance frame by frame until `count` more ticks have been served or
    /// no frame is requested anymore. Returns the number of ticks served.
    pub fn run_frames(&mut self, count: u64) -> u64 {
        let start = self.scheduler.frame_count();
        while self.scheduler.frame_count() - start < count {
            let Some(deadline) = self.scheduler.next_deadline() else {
                break;
            };
            if !self.scheduler.has_frame_requests() {
                break;
            }
            self.advance_to(deadline);
        }
        self.scheduler.frame_count() - start
    }

    fn fire(&mut self, due: Due) {
        match due {
            Due::Timer { owner, tag, .. } => {
                trace!("timer tag {} for {:?} at {:?}", tag, owner, self.now());
                self.with_component(owner, |component, cx| component.on_timer(tag, cx));
            }
            Due::Frame => {
                for request in self.scheduler.take_frame_requests() {
                    self.with_component(request.owner, |component, cx| component.on_frame(cx));
                }
            }
        }
        self.flush();
    }

    /// Drive the page in real time until `events` closes.
    ///
    /// Virtual time follows the tokio clock from the moment this is called.
    pub async fn run(&mut self, mut events: mpsc::Receiver<Event>) {
        let origin = Instant::now();
        let base = self.now();
        info!("Runtime started at {:?}", base);

        loop {
            let deadline = self
                .scheduler
                .next_deadline()
                .map(|at| origin + at.saturating_sub(base));

            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        self.advance_to(base + origin.elapsed());
                        self.dispatch(event);
                    }
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or(origin)), if deadline.is_some() => {
                    self.advance_to(base + origin.elapsed());
                }
            }
        }

        info!("Event source closed at {:?}", self.now());
    }
}
