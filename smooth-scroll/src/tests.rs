use crate::*;

use std::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    /// Uniform-ish value in `[-span, span)`.
    fn gen_signed(&mut self, span: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * span
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn scroller(limit: f64) -> SmoothScroller {
    let mut s = SmoothScroller::default();
    s.set_layout(Layout::new(limit + 800.0, 800.0));
    s
}

#[test]
fn update_target_stays_within_limit() {
    let mut s = scroller(1000.0);
    let mut rng = Lcg::new(7);
    for _ in 0..2_000 {
        s.update_target(rng.gen_signed(700.0));
        assert!(s.target() >= 0.0, "target {} < 0", s.target());
        assert!(s.target() <= 1000.0, "target {} > limit", s.target());
    }
}

#[test]
fn update_target_clamps_both_ends() {
    let mut s = scroller(500.0);
    s.update_target(-10.0);
    assert_eq!(s.target(), 0.0);
    s.update_target(10_000.0);
    assert_eq!(s.target(), 500.0);
    s.update_target(-120.0);
    assert_eq!(s.target(), 380.0);
    assert_eq!(s.current(), 0.0);
}

#[test]
fn update_target_ignores_non_finite_deltas() {
    let mut s = scroller(500.0);
    s.update_target(100.0);
    s.update_target(f64::NAN);
    s.update_target(f64::INFINITY);
    assert_eq!(s.target(), 100.0);
}

#[test]
fn zero_limit_pins_target_to_zero() {
    let mut s = SmoothScroller::default();
    assert_eq!(s.set_layout(Layout::new(600.0, 800.0)), 0.0);
    s.update_target(250.0);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn lerp_moves_strictly_between_endpoints() {
    for (a, b) in [(0.0, 60.0), (60.0, 0.0), (-3.5, 2.25), (1000.0, 999.0)] {
        let v = lerp(a, b, SMOOTHING);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        assert!(v > lo && v < hi, "lerp({a}, {b}) = {v}");
    }
    for a in [0.0, 0.3, 17.125, 1e6] {
        assert_eq!(lerp(a, a, SMOOTHING), a);
    }
}

#[test]
fn clamp_prefers_min_when_bounds_cross() {
    assert_eq!(clamp(0.0, 5.0, 10.0), 5.0);
    assert_eq!(clamp(0.0, -5.0, 10.0), 0.0);
    assert_eq!(clamp(0.0, 15.0, 10.0), 10.0);
    assert_eq!(clamp(0.0, 5.0, -1.0), 0.0);
}

#[test]
fn wheel_then_frame_matches_reference_numbers() {
    let mut s = scroller(1000.0);
    s.on_wheel(100.0);
    assert!(approx_eq(s.target(), 60.0));

    let render = s.frame(16.0);
    assert!(approx_eq(s.current(), 6.0));
    assert!(s.is_scrolling());
    match render {
        Some(Render::ScrollTo { x, y }) => {
            assert_eq!(x, 0.0);
            assert!(approx_eq(y, 6.0));
        }
        other => panic!("expected native scroll, got {other:?}"),
    }
}

#[test]
fn frames_converge_and_stop_rendering_exactly_when_settled() {
    let mut s = scroller(1000.0);
    s.on_wheel(100.0);

    let mut frames = 0;
    let mut now = 0.0;
    loop {
        let before = (s.target() - s.current()).abs();
        now += 16.0;
        let render = s.frame(now);
        frames += 1;
        let gap = (s.target() - s.current()).abs();
        assert!(gap < before, "not monotonic at frame {frames}");
        assert_eq!(s.is_scrolling(), gap > EPSILON);
        assert_eq!(render.is_some(), s.is_scrolling());
        if !s.is_scrolling() {
            break;
        }
        assert!(frames < 1_000, "did not converge");
    }
    assert!((s.target() - s.current()).abs() <= EPSILON);

    // Settled frames keep idling without render calls.
    assert_eq!(s.frame(now + 16.0), None);
    assert!(!s.is_scrolling());
}

#[test]
fn frame_records_elapsed_time_without_using_it() {
    let mut a = scroller(1000.0);
    let mut b = scroller(1000.0);
    a.on_wheel(100.0);
    b.on_wheel(100.0);

    a.frame(0.0);
    b.frame(0.0);
    assert_eq!(a.last_frame_delta_ms(), 0.0);
    a.frame(16.0);
    b.frame(100.0);
    assert_eq!(a.last_frame_delta_ms(), 16.0);
    assert_eq!(b.last_frame_delta_ms(), 100.0);
    assert_eq!(b.last_frame_ms(), Some(100.0));
    assert_eq!(a.current(), b.current());
}

#[test]
fn first_move_of_a_gesture_is_ignored() {
    let mut s = scroller(1000.0);
    s.on_wheel(500.0);
    let before = s.target();

    s.on_press_start();
    s.on_press_move(Pointer::new(0.0, 420.0));
    assert_eq!(s.target(), before);
    assert_eq!(s.gesture().prev(), 420.0);

    s.on_press_move(Pointer::new(0.0, 400.0));
    assert!(approx_eq(s.target(), before + 20.0));
}

#[test]
fn horizontal_drag_uses_mouse_speed() {
    let opts = ScrollOptions::new().with_axis(Axis::Horizontal);
    let mut s = SmoothScroller::new(opts);
    s.set_layout(Layout::new(3000.0, 1000.0));

    s.on_press_start();
    s.on_press_move(Pointer::new(200.0, 10.0));
    assert_eq!(s.target(), 0.0);
    assert_eq!(s.gesture().prev(), 200.0);

    s.on_press_move(Pointer::new(150.0, 99.0));
    assert!(approx_eq(s.target(), 50.0));
}

#[test]
fn touch_devices_use_touch_speed() {
    let mut s = scroller(1000.0);
    s.set_touch_device(true);
    s.on_press_start();
    s.on_press_move(Pointer::new(0.0, 300.0));
    s.on_press_move(Pointer::new(0.0, 290.0));
    assert!(approx_eq(s.target(), 10.0 * Speeds::DEFAULT_TOUCH));
}

#[test]
fn moves_without_press_are_ignored() {
    let mut s = scroller(1000.0);
    s.on_press_move(Pointer::new(0.0, 300.0));
    s.on_press_move(Pointer::new(0.0, 100.0));
    assert_eq!(s.target(), 0.0);
    assert_eq!(s.gesture().prev(), 0.0);
    assert!(!s.is_touch_down());
}

#[test]
fn release_resets_gesture_and_next_move_restarts() {
    let mut s = scroller(1000.0);
    s.on_press_start();
    s.on_press_move(Pointer::new(0.0, 500.0));
    s.on_press_move(Pointer::new(0.0, 450.0));
    assert!(approx_eq(s.target(), 50.0));

    s.on_press_end();
    assert!(!s.is_touch_down());
    assert_eq!(s.gesture().prev(), 0.0);
    assert_eq!(s.gesture().current(), 0.0);

    s.on_press_start();
    s.on_press_move(Pointer::new(0.0, 100.0));
    assert!(approx_eq(s.target(), 50.0));
}

#[test]
fn gesture_axis_is_independent_of_scroll_axis() {
    let opts = ScrollOptions::new()
        .with_direction(Axis::Horizontal)
        .with_gesture_direction(Axis::Vertical);
    let mut s = SmoothScroller::new(opts);
    s.set_layout(Layout::new(5000.0, 1000.0));

    s.on_press_start();
    s.on_press_move(Pointer::new(10.0, 300.0));
    s.on_press_move(Pointer::new(900.0, 200.0));
    assert!(approx_eq(s.target(), 100.0));

    match s.frame(0.0) {
        Some(Render::ScrollTo { x, y }) => {
            assert!(approx_eq(x, 10.0));
            assert_eq!(y, 0.0);
        }
        other => panic!("expected horizontal native scroll, got {other:?}"),
    }
}

#[test]
fn native_scroll_syncs_only_while_idle() {
    let mut s = scroller(5000.0);
    s.on_native_scroll(1234.5);
    assert_eq!(s.target(), 1234.5);
    assert_eq!(s.current(), 1234.5);

    s.on_wheel(100.0);
    s.frame(0.0);
    assert!(s.is_scrolling());
    let before = s.state();
    s.on_native_scroll(10.0);
    assert_eq!(s.state(), before);
}

#[test]
fn transform_strategy_translates_against_the_scroll_axis() {
    let mut s = scroller(1000.0);
    s.set_touch_device(true);
    assert_eq!(s.strategy(), RenderStrategy::Transform);
    s.on_wheel(100.0);
    match s.frame(0.0) {
        Some(Render::Translate(t)) => {
            assert_eq!(t.x, 0.0);
            assert!(approx_eq(t.y, -6.0));
            assert_eq!(t.z, 0.0);
        }
        other => panic!("expected translate, got {other:?}"),
    }

    let mut h = SmoothScroller::new(ScrollOptions::new().with_direction(Axis::Horizontal));
    h.set_layout(Layout::new(2000.0, 1000.0));
    h.set_touch_device(true);
    h.update_target(100.0);
    assert_eq!(
        h.frame(0.0),
        Some(Render::Translate(Translate {
            x: -10.0,
            y: 0.0,
            z: 0.0
        }))
    );
}

#[test]
fn shrinking_layout_reclamps_target_and_eases_current_back() {
    let mut s = scroller(1000.0);
    s.update_target(900.0);
    for i in 0..200 {
        s.frame(i as f64 * 16.0);
    }
    let before = s.current();
    assert!(before > 400.0);

    assert_eq!(s.set_layout(Layout::new(1200.0, 800.0)), 400.0);
    assert_eq!(s.target(), 400.0);
    assert_eq!(s.current(), before);

    let mut last = before;
    for i in 200..400 {
        s.frame(i as f64 * 16.0);
        assert!(s.current() <= last);
        assert!(s.target() <= s.limit());
        last = s.current();
    }
    assert!((s.current() - 400.0).abs() <= EPSILON);

    // Growing the layout again does not move the target.
    s.set_layout(Layout::new(3000.0, 800.0));
    assert_eq!(s.target(), 400.0);
}

#[test]
fn custom_speeds_are_applied() {
    let opts = ScrollOptions::new()
        .with_wheel_speed(1.0)
        .with_mouse_drag_speed(2.0);
    let mut s = SmoothScroller::new(opts);
    s.set_layout(Layout::new(2000.0, 1000.0));
    s.on_wheel(30.0);
    assert_eq!(s.target(), 30.0);

    s.on_press_start();
    let mut seen = Vec::new();
    for y in [500.0, 490.0, 480.0] {
        s.on_press_move(Pointer::new(0.0, y));
        seen.push(s.target());
    }
    assert_eq!(seen, [30.0, 50.0, 70.0]);
}

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_with_defaults() {
    let opts: ScrollOptions =
        serde_json::from_str(r#"{ "direction": "horizontal", "speeds": { "wheel": 1.5 } }"#)
            .unwrap();
    assert_eq!(opts.direction, Axis::Horizontal);
    assert_eq!(opts.gesture_direction, Axis::Vertical);
    assert_eq!(opts.speeds.wheel, 1.5);
    assert_eq!(opts.speeds.touch, Speeds::DEFAULT_TOUCH);
    assert_eq!(opts.speeds.mouse_drag, Speeds::DEFAULT_MOUSE_DRAG);
}
