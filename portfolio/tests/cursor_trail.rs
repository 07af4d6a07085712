use folio::prelude::*;
use portfolio::config::TrailConfig;
use portfolio::cursor_trail::{CursorTrail, MARKER_CLASS, Trail, TrailNode};

fn runtime(width: f64) -> Runtime {
    Runtime::new(Document::new(Viewport::new(width, 800.0)))
}

fn style<'a>(runtime: &'a Runtime, id: &str, property: &str) -> &'a str {
    runtime
        .document()
        .get(id)
        .and_then(|el| el.style_value(property))
        .unwrap_or_default()
}

// =============================================================================
// Trail Recurrence
// =============================================================================

#[test]
fn test_chain_weights() {
    let mut trail = Trail::new(20, &TrailConfig::default());
    assert_eq!(trail.weight(0), 1.0);
    assert_eq!(trail.weight(19), 1.0 / 20.0);

    let placements = trail.step((0.0, 0.0));
    assert_eq!(placements.len(), 20);
    assert_eq!(placements[0].scale, 1.0);
    assert!((placements[0].opacity - 0.3).abs() < 1e-12);
    assert!((placements[19].scale - 0.05).abs() < 1e-12);
    assert!((placements[19].opacity - 0.015).abs() < 1e-12);

    // Weights strictly decrease along the chain
    for pair in placements.windows(2) {
        assert!(pair[0].scale > pair[1].scale);
    }
}

#[test]
fn test_leader_is_centered_on_pointer() {
    let mut trail = Trail::new(20, &TrailConfig::default());
    let placements = trail.step((200.0, 120.0));
    assert_eq!(placements[0].left, 195.0);
    assert_eq!(placements[0].top, 115.0);
}

#[test]
fn test_gap_shrinks_by_lag_per_step() {
    let mut trail = Trail::new(20, &TrailConfig::default());
    for _ in 0..3 {
        trail.step((100.0, 50.0));
    }

    let before: Vec<TrailNode> = trail.nodes().to_vec();
    let placements = trail.step((100.0, 50.0));
    let after = trail.nodes();

    // Each marker is drawn at the working point, which then closes 30% of
    // the gap to its successor's recorded position.
    for i in 0..19 {
        let drawn = placements[i].left + 5.0;
        let next = before[i + 1].x;
        let gap_before = next - drawn;
        let gap_after = next - after[i].x;
        assert!((gap_after - 0.7 * gap_before).abs() < 1e-9, "marker {i}");
    }
    // The tail chases the leader's position from this same frame
    let drawn = placements[19].left + 5.0;
    let gap_after = after[0].x - after[19].x;
    assert!((gap_after - 0.7 * (after[0].x - drawn)).abs() < 1e-9);
}

#[test]
fn test_constant_pointer_converges_without_overshoot() {
    let mut trail = Trail::new(20, &TrailConfig::default());
    let target = (100.0, 50.0);
    let mut previous = trail.nodes().to_vec();

    for _ in 0..300 {
        trail.step(target);
        for (node, old) in trail.nodes().iter().zip(&previous) {
            assert!(node.x >= old.x - 1e-12 && node.y >= old.y - 1e-12, "moved away");
            assert!(node.x <= target.0 + 1e-9 && node.y <= target.1 + 1e-9, "overshoot");
        }
        previous = trail.nodes().to_vec();
    }

    for node in trail.nodes() {
        assert!((node.x - target.0).abs() < 1e-9);
        assert!((node.y - target.1).abs() < 1e-9);
    }
}

// =============================================================================
// Component
// =============================================================================

#[test]
fn test_markers_created_on_wide_viewport() {
    let mut runtime = runtime(1280.0);
    let (trail, _handle) = CursorTrail::new(&TrailConfig::default());
    runtime.mount(trail);

    let markers = runtime.document().by_class(MARKER_CLASS);
    assert_eq!(markers.len(), 20);
    let first = &markers[0];
    assert_eq!(style(&runtime, first, "position"), "fixed");
    assert_eq!(style(&runtime, first, "width"), "10px");
    assert_eq!(style(&runtime, first, "border-radius"), "50%");
    assert_eq!(style(&runtime, first, "pointer-events"), "none");
    assert_eq!(style(&runtime, first, "z-index"), "9999");
}

#[test]
fn test_first_placement_happens_at_start() {
    let mut runtime = runtime(1280.0);
    let (trail, _handle) = CursorTrail::new(&TrailConfig::default());
    let frames = trail.frames();
    runtime.mount(trail);

    let markers = runtime.document().by_class(MARKER_CLASS);
    let leader = &markers[0];
    assert_eq!(style(&runtime, leader, "left"), "-5px");
    assert_eq!(style(&runtime, leader, "top"), "-5px");
    assert_eq!(style(&runtime, leader, "transform"), "scale(1)");
    assert_eq!(style(&runtime, leader, "opacity"), "0.3");
    assert_eq!(style(&runtime, &markers[19], "transform"), "scale(0.05)");
    assert_eq!(frames.get(), 0);
    assert!(runtime.scheduler().has_frame_requests());
}

#[test]
fn test_existing_markers_are_reused() {
    let mut document = Document::new(Viewport::new(1280.0, 800.0));
    for i in 0..3 {
        document
            .append(Element::div().id(format!("dot{i}")).class(MARKER_CLASS))
            .unwrap();
    }
    let mut runtime = Runtime::new(document);
    let (trail, _handle) = CursorTrail::new(&TrailConfig::default());
    runtime.mount(trail);

    assert_eq!(runtime.document().by_class(MARKER_CLASS).len(), 3);
    runtime.run_frames(1);
    assert_eq!(style(&runtime, "dot0", "transform"), "scale(1)");
    assert_eq!(style(&runtime, "dot2", "transform"), format!("scale({})", 1.0 / 3.0));
}

#[test]
fn test_narrow_viewport_has_no_trail() {
    let mut runtime = runtime(768.0);
    let (trail, _handle) = CursorTrail::new(&TrailConfig::default());
    let frames = trail.frames();
    runtime.mount(trail);

    assert!(runtime.document().by_class(MARKER_CLASS).is_empty());
    assert!(!runtime.scheduler().has_frame_requests());
    assert_eq!(runtime.run_frames(5), 0);
    assert_eq!(frames.get(), 0);
}

#[test]
fn test_disabled_trail() {
    let mut runtime = runtime(1920.0);
    let config = TrailConfig {
        enabled: false,
        ..TrailConfig::default()
    };
    let (trail, _handle) = CursorTrail::new(&config);
    runtime.mount(trail);

    assert!(runtime.document().by_class(MARKER_CLASS).is_empty());
    assert_eq!(runtime.run_frames(5), 0);
}

#[test]
fn test_frame_renders_pointer_position() {
    let mut runtime = runtime(1280.0);
    let (trail, _handle) = CursorTrail::new(&TrailConfig::default());
    runtime.mount(trail);

    runtime.dispatch(Event::MouseMove { x: 300.0, y: 200.0 });
    assert_eq!(runtime.run_frames(1), 1);

    let markers = runtime.document().by_class(MARKER_CLASS);
    let leader = &markers[0];
    assert_eq!(style(&runtime, leader, "left"), "295px");
    assert_eq!(style(&runtime, leader, "top"), "195px");
    assert_eq!(style(&runtime, leader, "transform"), "scale(1)");
    assert_eq!(style(&runtime, leader, "opacity"), "0.3");

    let tail = &markers[19];
    assert_eq!(style(&runtime, tail, "transform"), "scale(0.05)");
    let opacity: f64 = style(&runtime, tail, "opacity").parse().unwrap();
    assert!((opacity - 0.015).abs() < 1e-12);
}

#[test]
fn test_cancel_stops_at_next_frame() {
    let mut runtime = runtime(1280.0);
    let (trail, handle) = CursorTrail::new(&TrailConfig::default());
    let frames = trail.frames();
    runtime.mount(trail);

    assert_eq!(runtime.run_frames(5), 5);
    assert_eq!(frames.get(), 5);

    handle.cancel();
    assert!(handle.is_cancelled());
    // One last tick is served but neither renders nor re-requests
    assert_eq!(runtime.run_frames(5), 1);
    assert_eq!(frames.get(), 5);
    assert!(!runtime.scheduler().has_frame_requests());
}

#[test]
fn test_unmount_cancels_frame_request() {
    let mut runtime = runtime(1280.0);
    let (trail, _handle) = CursorTrail::new(&TrailConfig::default());
    let frames = trail.frames();
    let id = runtime.mount(trail);

    runtime.run_frames(3);
    assert!(runtime.unmount(id));
    assert!(!runtime.scheduler().has_frame_requests());
    assert_eq!(runtime.run_frames(3), 0);
    assert_eq!(frames.get(), 3);
}
