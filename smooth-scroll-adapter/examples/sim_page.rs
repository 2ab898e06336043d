// Example: drive a controller against an in-memory host at 60fps.
use smooth_scroll::{Pointer, ScrollOptions};
use smooth_scroll_adapter::{Controller, HostEvent, SimHost};

fn main() {
    let host = SimHost::new(1280.0, 720.0).with_container(1280.0, 5_000.0);
    let mut c = Controller::new(host, ScrollOptions::default());
    c.start();
    println!(
        "started: listeners={} limit={}",
        c.host().active_listeners(),
        c.scroller().limit()
    );

    // A wheel burst, then a short mouse drag.
    for _ in 0..3 {
        c.dispatch(HostEvent::Wheel { delta_y: 120.0 });
    }
    c.dispatch(HostEvent::MouseDown);
    for y in [500.0, 470.0, 420.0] {
        c.dispatch(HostEvent::MouseMove(Pointer::new(640.0, y)));
    }
    c.dispatch(HostEvent::MouseUp);
    println!("target={}", c.scroller().target());

    let mut frame = 0u32;
    while c.step(16.0) {
        frame += 1;
        if frame % 15 == 0 {
            println!(
                "t={}ms current={:.2} scrolling={}",
                c.host().now_ms(),
                c.scroller().current(),
                c.scroller().is_scrolling()
            );
        }
        if !c.scroller().is_scrolling() {
            break;
        }
    }

    // An in-page search jumps the native offset while idle.
    c.host_mut().set_native_scroll(0.0, 3_200.0);
    c.dispatch(HostEvent::Scroll);
    println!("after search jump: {:?}", c.scroller().state());

    c.stop();
    println!(
        "stopped: listeners={} pending_frame={:?} renders={}",
        c.host().active_listeners(),
        c.host().pending_frame(),
        c.host().renders().len()
    );
}
