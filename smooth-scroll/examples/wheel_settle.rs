// Example: feed one wheel notch and tick frames until the scroller settles.
use smooth_scroll::{Layout, Render, ScrollOptions, SmoothScroller};

fn main() {
    let mut s = SmoothScroller::new(ScrollOptions::new());
    s.set_layout(Layout::new(4_000.0, 900.0));
    println!("limit={}", s.limit());

    s.on_wheel(120.0);
    println!("after wheel: target={}", s.target());

    let mut now_ms = 0.0;
    let mut frame = 0u32;
    // Simulate a 60fps tick.
    while let Some(render) = {
        now_ms += 16.0;
        s.frame(now_ms)
    } {
        frame += 1;
        if frame % 10 == 0 {
            if let Render::ScrollTo { y, .. } = render {
                println!("frame={frame} t={now_ms}ms scroll_y={y:.3}");
            }
        }
    }

    println!(
        "settled after {frame} frames: current={:.3} target={}",
        s.current(),
        s.target()
    );
}
