// Example: a mouse drag with an independent gesture axis.
use smooth_scroll::{Axis, Layout, Pointer, ScrollOptions, SmoothScroller};

fn main() {
    // Page scrolls horizontally, drags are read vertically.
    let opts = ScrollOptions::new()
        .with_direction(Axis::Horizontal)
        .with_gesture_direction(Axis::Vertical);
    let mut s = SmoothScroller::new(opts);
    s.set_layout(Layout::new(6_000.0, 1_280.0));

    s.on_press_start();
    for y in [400.0, 380.0, 350.0, 300.0] {
        s.on_press_move(Pointer::new(640.0, y));
        println!("move y={y} -> target={}", s.target());
    }
    s.on_press_end();

    for i in 0..5 {
        let render = s.frame(i as f64 * 16.0);
        println!("frame {i}: {render:?}");
    }
    println!("state={:?}", s.state());
}
