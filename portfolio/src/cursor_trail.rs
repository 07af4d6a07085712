//! Cursor trail: a ring of markers lazily chasing the pointer.
//!
//! Each frame walks the chain from the leader. The working point starts at
//! the pointer; every marker is placed on it, then the point moves a fixed
//! fraction of the way toward the next marker's last recorded position and
//! that becomes the marker's new recorded position. The last marker's
//! "next" is the leader, read after the leader was updated this frame.

use folio::prelude::*;
use log::{debug, trace, warn};

use crate::config::TrailConfig;

pub const MARKER_CLASS: &str = "cursor-circle";

/// Last recorded position of one marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrailNode {
    pub x: f64,
    pub y: f64,
}

/// Where and how to draw one marker for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Fixed-length chain of trail nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    nodes: Vec<TrailNode>,
    lag: f64,
    marker_size: f64,
    max_opacity: f64,
}

impl Trail {
    pub fn new(len: usize, config: &TrailConfig) -> Self {
        Self {
            nodes: vec![TrailNode::default(); len],
            lag: config.lag,
            marker_size: config.marker_size,
            max_opacity: config.max_opacity,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[TrailNode] {
        &self.nodes
    }

    /// Visual weight of the marker at `index`: 1.0 for the leader, 1/n for the tail.
    pub fn weight(&self, index: usize) -> f64 {
        let n = self.nodes.len() as f64;
        (n - index as f64) / n
    }

    /// Advance one frame toward `pointer`, returning one placement per marker.
    pub fn step(&mut self, pointer: (f64, f64)) -> Vec<Placement> {
        let n = self.nodes.len();
        let half = self.marker_size / 2.0;
        let (mut x, mut y) = pointer;
        let mut placements = Vec::with_capacity(n);

        for index in 0..n {
            let weight = self.weight(index);
            placements.push(Placement {
                left: x - half,
                top: y - half,
                scale: weight,
                opacity: weight * self.max_opacity,
            });

            let next = self.nodes[(index + 1) % n];
            x += (next.x - x) * self.lag;
            y += (next.y - y) * self.lag;
            self.nodes[index] = TrailNode { x, y };
        }

        placements
    }
}

/// Stops a running trail from outside the runtime.
///
/// The loop ends at the next frame boundary: that frame is neither
/// rendered nor re-requested.
#[derive(Debug, Clone, Default)]
pub struct TrailHandle {
    cancelled: State<bool>,
}

impl TrailHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// The cursor trail behavior.
pub struct CursorTrail {
    config: TrailConfig,
    handle: TrailHandle,
    markers: Vec<String>,
    trail: Trail,
    pointer: (f64, f64),
    frame: Option<FrameHandle>,
    frames: State<u64>,
}

impl CursorTrail {
    pub fn new(config: &TrailConfig) -> (Self, TrailHandle) {
        let handle = TrailHandle::default();
        let trail = Self {
            config: config.clone(),
            handle: handle.clone(),
            markers: Vec::new(),
            trail: Trail::new(0, config),
            pointer: (0.0, 0.0),
            frame: None,
            frames: State::new(0),
        };
        (trail, handle)
    }

    /// Counter of frame ticks rendered. The placement made at start is not
    /// counted.
    pub fn frames(&self) -> State<u64> {
        self.frames.clone()
    }

    fn create_markers(&self, document: &mut Document) {
        let size = format!("{}px", self.config.marker_size);
        for index in 0..self.config.count {
            let marker = Element::div()
                .id(format!("{MARKER_CLASS}-{index}"))
                .class(MARKER_CLASS)
                .style("position", "fixed")
                .style("width", size.clone())
                .style("height", size.clone())
                .style("border-radius", "50%")
                .style("background", "var(--primary-light)")
                .style("pointer-events", "none")
                .style("opacity", "0")
                .style("z-index", "9999")
                .style("transition", "opacity 0.3s");
            if let Err(err) = document.append(marker) {
                warn!("Failed to create trail marker: {}", err);
            }
        }
    }

    fn step_and_render(&mut self, document: &mut Document) {
        let placements = self.trail.step(self.pointer);
        for (id, placement) in self.markers.iter().zip(&placements) {
            let Some(marker) = document.get_mut(id) else {
                continue;
            };
            marker.set_style("left", format!("{}px", placement.left));
            marker.set_style("top", format!("{}px", placement.top));
            marker.set_style("transform", format!("scale({})", placement.scale));
            marker.set_style("opacity", placement.opacity.to_string());
        }
    }
}

impl Component for CursorTrail {
    fn name(&self) -> &'static str {
        "cursor-trail"
    }

    fn on_start(&mut self, cx: &mut Context<'_>) {
        if !self.config.enabled {
            debug!("Cursor trail disabled by config");
            return;
        }
        let width = cx.document().viewport().width;
        if width <= self.config.min_viewport_width {
            debug!("Cursor trail skipped on a {}px wide viewport", width);
            return;
        }

        if cx.document().by_class(MARKER_CLASS).is_empty() {
            self.create_markers(cx.document_mut());
        }
        self.markers = cx.document().by_class(MARKER_CLASS);
        if self.markers.is_empty() {
            return;
        }

        self.trail = Trail::new(self.markers.len(), &self.config);
        debug!("Cursor trail running with {} markers", self.markers.len());
        self.step_and_render(cx.document_mut());
        self.frame = Some(cx.request_frame());
    }

    fn on_event(&mut self, event: &Event, _cx: &mut Context<'_>) {
        if let Event::MouseMove { x, y } = event {
            self.pointer = (*x, *y);
        }
    }

    fn on_frame(&mut self, cx: &mut Context<'_>) {
        self.frame = None;
        if self.handle.is_cancelled() {
            debug!("Cursor trail cancelled after {} frames", self.frames.get());
            return;
        }

        self.step_and_render(cx.document_mut());
        self.frames.update(|count| *count += 1);
        trace!("trail frame at {:?}", cx.now());

        self.frame = Some(cx.request_frame());
    }

    fn on_stop(&mut self, cx: &mut Context<'_>) {
        if let Some(frame) = self.frame.take() {
            cx.cancel_frame(frame);
        }
    }
}
