//! Virtual-time scheduler for timers and animation frames.
//!
//! The scheduler never reads a wall clock. Time only moves when a driver
//! pops due work with [`Scheduler::pop_due`]: the deterministic
//! [`Runtime::advance`](crate::Runtime::advance) in tests, or the tokio
//! driver in [`Runtime::run`](crate::Runtime::run).
//!
//! Frames tick on multiples of the frame interval, and only while at least
//! one frame request is pending. All requests pending at a tick are served
//! by that tick; requests made while serving it wait for the next one. The
//! tick a request waits for is fixed when it is made, so a timer firing on
//! the same boundary runs first but never pushes the frame back.

use std::time::Duration;

use log::trace;

use crate::component::ComponentId;

/// Default frame interval (roughly 60 frames per second).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Handle to a pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Handle to a pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Timer {
    handle: TimerHandle,
    deadline: Duration,
    owner: ComponentId,
    tag: u32,
}

/// A frame request waiting for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pub handle: FrameHandle,
    pub owner: ComponentId,
}

/// Work that became due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    /// A timer fired.
    Timer {
        handle: TimerHandle,
        owner: ComponentId,
        tag: u32,
    },
    /// A frame tick. Take the requests with [`Scheduler::take_frame_requests`].
    Frame,
}

#[derive(Debug)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
    frames: Vec<FrameRequest>,
    frame_interval: Duration,
    frame_count: u64,
    // Ticks at or before this instant are never served.
    tick_floor: Duration,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

impl Scheduler {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
            frames: Vec::new(),
            frame_interval: frame_interval.max(Duration::from_millis(1)),
            frame_count: 0,
            tick_floor: Duration::ZERO,
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Number of frame ticks served so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // Timers

    /// Schedule a one-shot timer `delay` from now.
    pub fn set_timeout(&mut self, owner: ComponentId, delay: Duration, tag: u32) -> TimerHandle {
        let handle = TimerHandle(self.next_id());
        let deadline = self.now + delay;
        trace!("timer {:?} for {:?} tag {} at {:?}", handle, owner, tag, deadline);
        self.timers.push(Timer {
            handle,
            deadline,
            owner,
            tag,
        });
        handle
    }

    /// Cancel a timer. Returns false if it already fired or was cancelled.
    pub fn cancel_timeout(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        before != self.timers.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // Frames

    /// Ask for `owner`'s frame hook to run at the next tick.
    pub fn request_frame(&mut self, owner: ComponentId) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        if self.frames.is_empty() {
            self.tick_floor = self.tick_floor.max(self.now);
        }
        self.frames.push(FrameRequest { handle, owner });
        handle
    }

    /// Cancel a frame request. Returns false if it was already served.
    pub fn cancel_frame(&mut self, handle: FrameHandle) -> bool {
        let before = self.frames.len();
        self.frames.retain(|f| f.handle != handle);
        before != self.frames.len()
    }

    pub fn has_frame_requests(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Drain the requests to serve at the current tick.
    pub fn take_frame_requests(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.frames)
    }

    // Ownership

    /// Cancel every timer and frame request owned by `owner`.
    pub fn cancel_owned(&mut self, owner: ComponentId) -> usize {
        let before = self.timers.len() + self.frames.len();
        self.timers.retain(|t| t.owner != owner);
        self.frames.retain(|f| f.owner != owner);
        before - self.timers.len() - self.frames.len()
    }

    /// Drop all pending work.
    pub fn clear(&mut self) {
        self.timers.clear();
        self.frames.clear();
    }

    // Driving

    /// First tick strictly after the last served tick or the time the
    /// oldest pending request was made, whichever is later.
    fn next_tick(&self) -> Duration {
        let interval = self.frame_interval.as_nanos();
        let ticks = self.tick_floor.as_nanos() / interval + 1;
        Duration::from_nanos((ticks * interval) as u64)
    }

    fn earliest_timer(&self) -> Option<(usize, Timer)> {
        self.timers
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|(_, t)| (t.deadline, t.handle.0))
    }

    /// When the next piece of work becomes due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        let timer = self.earliest_timer().map(|(_, t)| t.deadline);
        let frame = self.has_frame_requests().then(|| self.next_tick());
        match (timer, frame) {
            (Some(t), Some(f)) => Some(t.min(f)),
            (t, f) => t.or(f),
        }
    }

    /// Pop the next work item due at or before `until`, moving the clock to
    /// its deadline. Timers win ties against frame ticks.
    pub fn pop_due(&mut self, until: Duration) -> Option<Due> {
        let timer = self.earliest_timer();
        let frame = self.has_frame_requests().then(|| self.next_tick());

        let timer_first = match (timer, frame) {
            (Some((_, t)), Some(f)) => t.deadline <= f,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };

        if timer_first {
            let (index, t) = timer?;
            if t.deadline > until {
                return None;
            }
            self.timers.remove(index);
            self.now = self.now.max(t.deadline);
            Some(Due::Timer {
                handle: t.handle,
                owner: t.owner,
                tag: t.tag,
            })
        } else {
            let tick = frame?;
            if tick > until {
                return None;
            }
            self.now = self.now.max(tick);
            self.tick_floor = tick;
            self.frame_count += 1;
            Some(Due::Frame)
        }
    }

    /// Move the clock forward without firing anything.
    ///
    /// Callers must have drained everything due before `to`.
    pub fn set_now(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }
}
