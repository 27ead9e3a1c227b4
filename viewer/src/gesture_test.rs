#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{MAX_SCALE, MIN_SCALE};

const EPSILON: f64 = 1e-9;

// =============================================================
// Helpers
// =============================================================

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn controller() -> GestureController {
    let mut c = GestureController::default();
    c.set_viewport(viewport());
    c
}

/// Controller whose wheel step is 1.0 so a single notch lands on scale 2 exactly.
fn controller_at_scale_two() -> GestureController {
    let mut c = GestureController::new(GestureConfig { wheel_step: 1.0, ..GestureConfig::default() });
    c.set_viewport(viewport());
    c.on_wheel(-1.0);
    assert_eq!(c.transform().scale, 2.0);
    c
}

fn assert_within_bounds(c: &GestureController) {
    let t = c.transform();
    assert!(t.scale >= MIN_SCALE && t.scale <= MAX_SCALE, "scale out of range: {}", t.scale);
    let vp = c.viewport();
    let max_x = (t.scale - 1.0) * vp.width / (2.0 * t.scale);
    let max_y = (t.scale - 1.0) * vp.height / (2.0 * t.scale);
    assert!(t.offset_x.abs() <= max_x + EPSILON, "offset_x {} exceeds {max_x}", t.offset_x);
    assert!(t.offset_y.abs() <= max_y + EPSILON, "offset_y {} exceeds {max_y}", t.offset_y);
}

// =============================================================
// Construction and reset
// =============================================================

#[test]
fn new_controller_is_identity_and_idle() {
    let c = GestureController::default();
    assert!(c.transform().is_identity());
    assert!(c.session().is_idle());
    assert!(!c.was_dragging());
}

#[test]
fn reset_restores_identity_from_any_state() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(500.0, 350.0)]);
    assert!(!c.transform().is_identity());
    assert!(c.session().is_dragging());

    c.reset();
    assert_eq!(c.transform(), Transform::IDENTITY);
    assert_eq!(c.session(), PointerSession::Idle);
    assert!(!c.was_dragging());
}

#[test]
fn reset_mid_pinch_clears_session() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    assert!(c.session().is_pinching());
    c.reset();
    assert!(c.session().is_idle());
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_up_zooms_in_by_one_step() {
    let mut c = controller();
    assert!(c.on_wheel(-100.0));
    assert!(approx_eq(c.transform().scale, 1.1));
}

#[test]
fn wheel_four_notches_reach_one_point_four() {
    let mut c = controller();
    for _ in 0..4 {
        c.on_wheel(-100.0);
    }
    assert!(approx_eq(c.transform().scale, 1.4));
}

#[test]
fn wheel_step_ignores_delta_magnitude() {
    let mut a = controller();
    let mut b = controller();
    a.on_wheel(-1.0);
    b.on_wheel(-5000.0);
    assert_eq!(a.transform().scale, b.transform().scale);
}

#[test]
fn wheel_down_at_identity_stays_at_one() {
    let mut c = controller();
    assert!(!c.on_wheel(100.0));
    assert_eq!(c.transform().scale, 1.0);
}

#[test]
fn wheel_zero_delta_is_noop() {
    let mut c = controller();
    assert!(!c.on_wheel(0.0));
    assert!(c.transform().is_identity());
}

#[test]
fn wheel_nan_delta_is_noop() {
    let mut c = controller();
    assert!(!c.on_wheel(f64::NAN));
    assert!(c.transform().is_identity());
}

#[test]
fn wheel_clamps_at_max_scale() {
    let mut c = controller();
    for _ in 0..500 {
        c.on_wheel(-1.0);
    }
    assert_eq!(c.transform().scale, MAX_SCALE);
    assert!(!c.on_wheel(-1.0));
}

#[test]
fn wheel_zoom_out_to_one_recenters_image() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(800.0, 600.0)]);
    c.on_pointer_up();
    assert!(c.transform().offset_x > 0.0);

    c.on_wheel(1.0);
    assert_eq!(c.transform(), Transform::IDENTITY);
}

#[test]
fn wheel_zoom_out_shrinks_offsets_to_new_bound() {
    let mut c = GestureController::new(GestureConfig { wheel_step: 1.0, ..GestureConfig::default() });
    c.set_viewport(viewport());
    c.on_wheel(-1.0);
    c.on_wheel(-1.0);
    c.on_wheel(-1.0);
    assert_eq!(c.transform().scale, 4.0);
    c.on_pointer_down(&[pt(0.0, 0.0)]);
    c.on_pointer_move(&[pt(10_000.0, 10_000.0)]);
    c.on_pointer_up();
    // bound at 4x: 3 * 800 / 8 = 300
    assert!(approx_eq(c.transform().offset_x, 300.0));

    c.on_wheel(1.0);
    // bound at 3x: 2 * 800 / 6
    assert!(approx_eq(c.transform().offset_x, 800.0 / 3.0));
    assert_within_bounds(&c);
}

// =============================================================
// Pinch
// =============================================================

#[test]
fn pinch_down_starts_pinching_with_initial_distance() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    assert_eq!(c.session(), PointerSession::Pinching { last_distance: 100.0 });
}

#[test]
fn pinch_spread_fifty_pixels_adds_half() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    assert!(c.on_pointer_move(&[pt(0.0, 0.0), pt(150.0, 0.0)]));
    assert!(approx_eq(c.transform().scale, 1.5));
    assert_eq!(c.session(), PointerSession::Pinching { last_distance: 150.0 });
}

#[test]
fn pinch_is_relative_to_pre_pinch_scale() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    c.on_pointer_move(&[pt(0.0, 0.0), pt(150.0, 0.0)]);
    assert!(approx_eq(c.transform().scale, 2.5));
}

#[test]
fn pinch_accumulates_across_moves() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    c.on_pointer_move(&[pt(0.0, 0.0), pt(120.0, 0.0)]);
    c.on_pointer_move(&[pt(0.0, 0.0), pt(160.0, 0.0)]);
    assert!(approx_eq(c.transform().scale, 1.6));
}

#[test]
fn pinch_clamps_to_max_scale() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(10.0, 0.0)]);
    c.on_pointer_move(&[pt(0.0, 0.0), pt(5000.0, 0.0)]);
    assert_eq!(c.transform().scale, MAX_SCALE);
}

#[test]
fn pinch_in_clamps_to_min_scale() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(500.0, 0.0)]);
    c.on_pointer_move(&[pt(0.0, 0.0), pt(1.0, 0.0)]);
    assert_eq!(c.transform(), Transform::IDENTITY);
}

#[test]
fn pinch_uses_euclidean_distance() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(30.0, 40.0)]);
    assert_eq!(c.session(), PointerSession::Pinching { last_distance: 50.0 });
}

#[test]
fn pinch_third_finger_is_ignored() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    assert!(!c.on_pointer_move(&[pt(0.0, 0.0), pt(200.0, 0.0), pt(50.0, 50.0)]));
    assert_eq!(c.transform().scale, 1.0);
    assert_eq!(c.session(), PointerSession::Pinching { last_distance: 100.0 });
}

#[test]
fn pinch_single_contact_move_is_ignored() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    assert!(!c.on_pointer_move(&[pt(300.0, 0.0)]));
    assert!(c.session().is_pinching());
}

#[test]
fn two_contacts_pinch_even_at_scale_one() {
    let mut c = controller();
    c.on_pointer_down(&[pt(10.0, 10.0), pt(20.0, 10.0)]);
    assert!(c.session().is_pinching());
}

// =============================================================
// Drag
// =============================================================

#[test]
fn single_contact_at_scale_one_starts_no_session() {
    let mut c = controller();
    c.on_pointer_down(&[pt(100.0, 100.0)]);
    assert!(c.session().is_idle());
    assert!(!c.on_pointer_move(&[pt(200.0, 200.0)]));
    assert!(c.transform().is_identity());
}

#[test]
fn single_contact_when_zoomed_starts_drag() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    assert!(c.session().is_dragging());
}

#[test]
fn drag_moves_offset_in_pre_scale_units() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    assert!(c.on_pointer_move(&[pt(450.0, 280.0)]));
    assert!(approx_eq(c.transform().offset_x, 25.0));
    assert!(approx_eq(c.transform().offset_y, -10.0));
}

#[test]
fn drag_first_move_at_press_point_keeps_offset() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(460.0, 300.0)]);
    c.on_pointer_up();
    let before = c.transform();

    c.on_pointer_down(&[pt(100.0, 100.0)]);
    assert!(!c.on_pointer_move(&[pt(100.0, 100.0)]));
    assert_eq!(c.transform(), before);
}

#[test]
fn drag_resumes_from_previous_offset() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(420.0, 300.0)]);
    c.on_pointer_up();
    c.on_pointer_down(&[pt(0.0, 0.0)]);
    c.on_pointer_move(&[pt(20.0, 0.0)]);
    assert!(approx_eq(c.transform().offset_x, 20.0));
}

#[test]
fn drag_clamps_to_pan_bound() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(-5000.0, 9000.0)]);
    assert!(approx_eq(c.transform().offset_x, -200.0));
    assert!(approx_eq(c.transform().offset_y, 150.0));
}

#[test]
fn drag_two_contact_move_is_ignored() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    assert!(!c.on_pointer_move(&[pt(410.0, 300.0), pt(500.0, 300.0)]));
    assert!(c.transform().offset_x.abs() < EPSILON);
}

#[test]
fn drag_with_zero_viewport_cannot_pan() {
    let mut c = GestureController::new(GestureConfig { wheel_step: 1.0, ..GestureConfig::default() });
    c.on_wheel(-1.0);
    c.on_pointer_down(&[pt(0.0, 0.0)]);
    c.on_pointer_move(&[pt(100.0, 100.0)]);
    assert_eq!(c.transform().offset_x, 0.0);
    assert_eq!(c.transform().offset_y, 0.0);
}

// =============================================================
// Tap vs drag
// =============================================================

#[test]
fn press_move_release_is_a_drag() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(401.0, 300.0)]);
    c.on_pointer_up();
    assert!(c.was_dragging());
}

#[test]
fn press_release_is_a_tap() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_up();
    assert!(!c.was_dragging());
}

#[test]
fn sub_pixel_jitter_is_still_a_tap() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(400.4, 300.3)]);
    c.on_pointer_up();
    assert!(!c.was_dragging());
}

#[test]
fn drag_flag_clears_on_next_press() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(450.0, 300.0)]);
    c.on_pointer_up();
    assert!(c.was_dragging());

    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_up();
    assert!(!c.was_dragging());
}

#[test]
fn drag_flag_survives_return_to_press_point() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(440.0, 300.0)]);
    c.on_pointer_move(&[pt(400.0, 300.0)]);
    c.on_pointer_up();
    assert!(c.was_dragging());
}

#[test]
fn single_contact_at_scale_one_is_never_a_drag() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0)]);
    c.on_pointer_move(&[pt(300.0, 300.0)]);
    c.on_pointer_up();
    assert!(!c.was_dragging());
}

// =============================================================
// Session lifecycle and malformed input
// =============================================================

#[test]
fn pointer_up_ends_any_session() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(10.0, 0.0)]);
    c.on_pointer_up();
    assert!(c.session().is_idle());

    c.on_pointer_down(&[pt(0.0, 0.0)]);
    c.on_pointer_up();
    assert!(c.session().is_idle());
}

#[test]
fn move_without_press_is_noop() {
    let mut c = controller_at_scale_two();
    assert!(!c.on_pointer_move(&[pt(50.0, 50.0)]));
    assert!(!c.on_pointer_move(&[pt(0.0, 0.0), pt(100.0, 0.0)]));
    assert_eq!(c.transform().offset_x, 0.0);
    assert_eq!(c.transform().scale, 2.0);
}

#[test]
fn empty_points_are_noop() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[]);
    assert!(c.session().is_idle());
    assert!(!c.on_pointer_move(&[]));
}

#[test]
fn three_contacts_down_starts_no_session() {
    let mut c = controller();
    c.on_pointer_down(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)]);
    assert!(c.session().is_idle());
}

#[test]
fn non_finite_points_are_ignored() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(f64::NAN, 0.0)]);
    assert!(c.session().is_idle());

    c.on_pointer_down(&[pt(400.0, 300.0)]);
    assert!(!c.on_pointer_move(&[pt(f64::INFINITY, 300.0)]));
    assert!(c.transform().offset_x.abs() < EPSILON);
}

#[test]
fn shrinking_viewport_reclamps_offsets() {
    let mut c = controller_at_scale_two();
    c.on_pointer_down(&[pt(400.0, 300.0)]);
    c.on_pointer_move(&[pt(800.0, 300.0)]);
    assert!(approx_eq(c.transform().offset_x, 200.0));

    assert!(c.set_viewport(Viewport::new(400.0, 600.0)));
    assert!(approx_eq(c.transform().offset_x, 100.0));
}

#[test]
fn non_finite_viewport_is_ignored() {
    let mut c = controller();
    assert!(!c.set_viewport(Viewport::new(f64::NAN, 100.0)));
    assert_eq!(c.viewport(), viewport());
}

// =============================================================
// Invariants over mixed input
// =============================================================

/// Small deterministic generator so the sequence is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_precision_loss)]
        let value = (self.0 >> 11) as f64 / (1_u64 << 53) as f64;
        value
    }

    fn coord(&mut self) -> f64 {
        self.next_unit() * 1600.0 - 400.0
    }
}

#[test]
fn scale_and_offsets_stay_bounded_under_mixed_input() {
    let mut rng = Lcg(42);
    let mut c = controller();
    for _ in 0..5000 {
        let roll = rng.next_unit();
        if roll < 0.2 {
            c.on_wheel(rng.next_unit() - 0.5);
        } else if roll < 0.35 {
            let p = pt(rng.coord(), rng.coord());
            c.on_pointer_down(&[p]);
        } else if roll < 0.45 {
            let (a, b) = (pt(rng.coord(), rng.coord()), pt(rng.coord(), rng.coord()));
            c.on_pointer_down(&[a, b]);
        } else if roll < 0.65 {
            let p = pt(rng.coord(), rng.coord());
            c.on_pointer_move(&[p]);
        } else if roll < 0.85 {
            let (a, b) = (pt(rng.coord(), rng.coord()), pt(rng.coord(), rng.coord()));
            c.on_pointer_move(&[a, b]);
        } else {
            c.on_pointer_up();
        }
        assert_within_bounds(&c);
        if c.transform().scale == 1.0 {
            assert_eq!(c.transform().offset_x, 0.0);
            assert_eq!(c.transform().offset_y, 0.0);
        }
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn inverted_scale_range_falls_back_to_defaults() {
    let mut c = GestureController::new(GestureConfig { min_scale: 5.0, max_scale: 2.0, ..GestureConfig::default() });
    c.set_viewport(viewport());
    assert_eq!(*c.config(), GestureConfig::default());
    assert_eq!(c.transform().scale, MIN_SCALE);
    assert!(c.on_wheel(-100.0));
    assert!(approx_eq(c.transform().scale, 1.1));
    c.on_pointer_down(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    c.on_pointer_move(&[pt(0.0, 0.0), pt(5000.0, 0.0)]);
    assert_eq!(c.transform().scale, MAX_SCALE);
    assert_within_bounds(&c);
}
