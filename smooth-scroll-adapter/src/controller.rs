use alloc::vec::Vec;

use smooth_scroll::{Render, ScrollOptions, SmoothScroller};

use crate::{EventKind, FrameHandle, Host, HostEvent, ListenerId, Propagation};

#[derive(Clone, Debug, Default)]
enum Lifecycle {
    #[default]
    Stopped,
    Running {
        listeners: Vec<ListenerId>,
        frame: Option<FrameHandle>,
    },
}

/// A framework-neutral controller that binds a [`SmoothScroller`] to a [`Host`].
///
/// The host drives it by calling:
/// - `start` / `stop` to acquire and release every event subscription and the frame callback
/// - `handle_event` for each delivered event
/// - `on_frame(handle, now_ms)` when a requested frame fires
///
/// While running the controller keeps exactly one frame requested at a time. `stop` releases
/// all listeners and cancels that frame, and is safe to call whether or not any frame fired.
#[derive(Clone, Debug)]
pub struct Controller<H> {
    host: H,
    scroller: SmoothScroller,
    lifecycle: Lifecycle,
}

impl<H: Host> Controller<H> {
    pub fn new(host: H, options: ScrollOptions) -> Self {
        Self::from_scroller(host, SmoothScroller::new(options))
    }

    pub fn from_scroller(host: H, scroller: SmoothScroller) -> Self {
        Self {
            host,
            scroller,
            lifecycle: Lifecycle::Stopped,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Gives the host back. Call `stop` first if the controller is running.
    pub fn into_host(self) -> H {
        self.host
    }

    pub fn scroller(&self) -> &SmoothScroller {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut SmoothScroller {
        &mut self.scroller
    }

    pub fn is_running(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Running { .. })
    }

    /// The frame currently requested from the host, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        match &self.lifecycle {
            Lifecycle::Running { frame, .. } => *frame,
            Lifecycle::Stopped => None,
        }
    }

    /// Measures the host, subscribes to every [`EventKind`] and requests the first frame.
    ///
    /// Does nothing if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            adebug!("Controller::start: already running");
            return;
        }

        self.init_layout();

        let listeners: Vec<ListenerId> = EventKind::ALL
            .iter()
            .map(|&kind| self.host.subscribe(kind))
            .collect();
        let frame = self.host.request_frame();
        adebug!(
            listeners = listeners.len(),
            limit = self.scroller.limit(),
            "Controller::start"
        );
        self.lifecycle = Lifecycle::Running {
            listeners,
            frame: Some(frame),
        };
    }

    /// Removes every listener and cancels the pending frame.
    ///
    /// Does nothing if already stopped.
    pub fn stop(&mut self) {
        let Lifecycle::Running { listeners, frame } = core::mem::take(&mut self.lifecycle) else {
            adebug!("Controller::stop: not running");
            return;
        };

        for id in listeners.iter().copied() {
            self.host.unsubscribe(id);
        }
        if let Some(frame) = frame {
            self.host.cancel_frame(frame);
        }
        adebug!(listeners = listeners.len(), "Controller::stop");
    }

    /// Routes a host event into the scroller.
    ///
    /// Returns whether the host should suppress the event's default behaviour. Events that
    /// arrive while stopped are ignored.
    pub fn handle_event(&mut self, event: HostEvent) -> Propagation {
        if !self.is_running() {
            atrace!(kind = ?event.kind(), "handle_event: stopped, ignoring");
            return Propagation::Continue;
        }

        match event {
            HostEvent::MouseDown | HostEvent::TouchStart => {
                self.scroller.on_press_start();
                Propagation::Continue
            }
            HostEvent::MouseMove(pointer) | HostEvent::TouchMove(pointer) => {
                self.scroller.on_press_move(pointer);
                Propagation::PreventDefault
            }
            HostEvent::MouseUp | HostEvent::TouchEnd => {
                self.scroller.on_press_end();
                Propagation::Continue
            }
            HostEvent::Wheel { delta_y } => {
                self.scroller.on_wheel(delta_y);
                Propagation::PreventDefault
            }
            HostEvent::Resize => {
                self.init_layout();
                Propagation::Continue
            }
            HostEvent::Scroll => {
                let offset = self.host.scroll_offset(self.scroller.direction());
                self.scroller.on_native_scroll(offset);
                Propagation::Continue
            }
        }
    }

    /// Runs one simulation step for a frame requested earlier and requests the next one.
    ///
    /// Frames that are not the pending one (e.g. delivered after `stop`) are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) {
        match &self.lifecycle {
            Lifecycle::Running {
                frame: Some(pending),
                ..
            } if *pending == handle => {}
            _ => {
                awarn!(?handle, "on_frame: not the pending frame, ignoring");
                return;
            }
        }

        if let Some(render) = self.scroller.frame(now_ms) {
            atrace!(?render, now_ms, "on_frame: render");
            self.apply(render);
        }

        let next = self.host.request_frame();
        if let Lifecycle::Running { frame, .. } = &mut self.lifecycle {
            *frame = Some(next);
        }
    }

    fn init_layout(&mut self) {
        self.scroller.set_touch_device(self.host.supports_touch());
        let layout = self.host.layout(self.scroller.direction());
        self.scroller.set_layout(layout);
    }

    fn apply(&mut self, render: Render) {
        match render {
            Render::Translate(translate) => self.host.set_transform(translate),
            Render::ScrollTo { x, y } => self.host.scroll_to(x, y),
        }
    }
}
