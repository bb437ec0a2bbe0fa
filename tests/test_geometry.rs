use pantheon::geometry::{Rect, Shape};

use proptest::prelude::*;

fn rect(x: f32, y: f32, w: f32, h: f32) -> Shape {
    Shape::Rect(Rect::new(x, y, w, h))
}

fn ellipse(x: f32, y: f32, w: f32, h: f32) -> Shape {
    Shape::Ellipse(Rect::new(x, y, w, h))
}

// ── Rectangles ────────────────────────────────────────────────────────────────

#[test]
fn overlapping_rects_hit() {
    assert!(rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(5.0, 5.0, 10.0, 10.0)));
}

#[test]
fn rects_sharing_an_edge_do_not_hit() {
    assert!(!rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(10.0, 0.0, 10.0, 10.0)));
    assert!(!rect(0.0, 0.0, 10.0, 10.0).intersects(&rect(0.0, 10.0, 10.0, 10.0)));
}

#[test]
fn empty_rect_never_hits() {
    assert!(!rect(0.0, 0.0, 0.0, 10.0).intersects(&rect(-5.0, -5.0, 20.0, 20.0)));
}

#[test]
fn inset_keeps_centre() {
    let r = Rect::new(100.0, 200.0, 100.0, 125.0);
    let shrunk = r.inset(0.3, 0.2);
    let (sx, sy) = shrunk.center();
    let (cx, cy) = r.center();
    assert!((sx - cx).abs() < 1e-3 && (sy - cy).abs() < 1e-3);
    assert!((shrunk.w - 70.0).abs() < 1e-4);
    assert!((shrunk.h - 100.0).abs() < 1e-4);
}

// ── Rectangle vs ellipse ──────────────────────────────────────────────────────

#[test]
fn rect_in_bounding_box_corner_misses_circle() {
    // Boxes overlap but the rect sits in the corner outside the circle.
    let circle = ellipse(0.0, 0.0, 100.0, 100.0);
    let corner = rect(0.0, 0.0, 10.0, 10.0);
    assert!(circle.bounds().overlaps(&corner.bounds()));
    assert!(!circle.intersects(&corner));
    assert!(!corner.intersects(&circle));
}

#[test]
fn rect_dipping_into_circle_edge_hits() {
    let circle = ellipse(0.0, 0.0, 100.0, 100.0);
    assert!(circle.intersects(&rect(45.0, -5.0, 10.0, 10.0)));
}

#[test]
fn rect_containing_ellipse_hits() {
    let small = ellipse(40.0, 40.0, 20.0, 10.0);
    assert!(rect(0.0, 0.0, 100.0, 100.0).intersects(&small));
}

#[test]
fn flat_ellipse_misses_rect_above_its_rim() {
    // Ellipse spans y 40..60; the rect's bottom edge is at 39.
    let flat = ellipse(0.0, 40.0, 200.0, 20.0);
    assert!(!flat.intersects(&rect(90.0, 0.0, 20.0, 39.0)));
    assert!(flat.intersects(&rect(90.0, 0.0, 20.0, 45.0)));
}

// ── Ellipse vs ellipse ────────────────────────────────────────────────────────

#[test]
fn circles_just_closer_than_their_radii_hit() {
    let a = ellipse(0.0, 0.0, 100.0, 100.0);
    assert!(a.intersects(&ellipse(99.0, 0.0, 100.0, 100.0)));
}

#[test]
fn tangent_circles_do_not_hit() {
    let a = ellipse(0.0, 0.0, 100.0, 100.0);
    assert!(!a.intersects(&ellipse(100.0, 0.0, 100.0, 100.0)));
}

#[test]
fn diagonal_circles_with_overlapping_boxes_can_miss() {
    let a = ellipse(0.0, 0.0, 100.0, 100.0);
    // Centres ~106 apart.
    let far = ellipse(75.0, 75.0, 100.0, 100.0);
    assert!(a.bounds().overlaps(&far.bounds()));
    assert!(!a.intersects(&far));
    assert!(!far.intersects(&a));
    // Centres ~85 apart.
    let near = ellipse(60.0, 60.0, 100.0, 100.0);
    assert!(a.intersects(&near));
    assert!(near.intersects(&a));
}

#[test]
fn ellipse_inside_another_hits() {
    let outer = ellipse(0.0, 0.0, 300.0, 100.0);
    let inner = ellipse(140.0, 45.0, 20.0, 10.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn elongated_ellipses_crossing_hit() {
    let wide = ellipse(0.0, 45.0, 200.0, 10.0);
    let tall = ellipse(95.0, 0.0, 10.0, 100.0);
    assert!(wide.intersects(&tall));
}

// ── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn disjoint_boxes_never_hit(
        x in 0.0f32..500.0, y in 0.0f32..500.0,
        w in 1.0f32..100.0, h in 1.0f32..100.0,
        gap in 0.0f32..50.0,
        round_a in any::<bool>(), round_b in any::<bool>(),
    ) {
        let make = |round: bool, r: Rect| if round { Shape::Ellipse(r) } else { Shape::Rect(r) };
        let a = make(round_a, Rect::new(x, y, w, h));
        let b = make(round_b, Rect::new(x + w + gap, y, w, h));
        prop_assert!(!a.intersects(&b));
    }

    #[test]
    fn concentric_shapes_always_hit(
        cx in 0.0f32..500.0, cy in 0.0f32..500.0,
        w1 in 1.0f32..200.0, h1 in 1.0f32..200.0,
        w2 in 1.0f32..200.0, h2 in 1.0f32..200.0,
    ) {
        let a = Shape::Ellipse(Rect::new(cx - w1 / 2.0, cy - h1 / 2.0, w1, h1));
        let b = Shape::Ellipse(Rect::new(cx - w2 / 2.0, cy - h2 / 2.0, w2, h2));
        prop_assert!(a.intersects(&b));
        let r = Shape::Rect(Rect::new(cx - w2 / 2.0, cy - h2 / 2.0, w2, h2));
        prop_assert!(a.intersects(&r));
    }
}
