//! Vertical box math used for visibility checks.

/// A half-open vertical extent `[start, end)` in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0.0
    }

    /// Overlapping part of two spans, if any.
    pub fn intersect(&self, other: &Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Span { start, end })
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.start && y < self.end
    }
}

/// Fraction of `target` that lies inside `root` (0.0 to 1.0).
///
/// A zero-height target counts as fully visible when its position lies
/// inside the root, matching how intersection observers treat empty boxes.
pub fn intersection_ratio(target: Span, root: Span) -> f64 {
    if target.is_empty() {
        return if root.contains(target.start) { 1.0 } else { 0.0 };
    }
    match target.intersect(&root) {
        Some(overlap) => (overlap.len() / target.len()).min(1.0),
        None => 0.0,
    }
}
