use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use smooth_scroll::{Axis, Layout, Render, Translate};

use crate::{Controller, EventKind, FrameHandle, Host, HostEvent, ListenerId, Propagation};

/// An in-memory [`Host`] for tests, demos and headless simulations.
///
/// It keeps a registry of active listeners, a single pending-frame slot driven by a fake clock,
/// a native scroll offset that `scroll_to` writes, and a log of every render call.
#[derive(Clone, Debug)]
pub struct SimHost {
    container: (f64, f64),
    viewport: (f64, f64),
    touch: bool,
    listeners: BTreeMap<ListenerId, EventKind>,
    next_listener: u64,
    pending_frame: Option<FrameHandle>,
    next_frame: u64,
    now_ms: f64,
    scroll: (f64, f64),
    renders: Vec<Render>,
}

impl SimHost {
    /// A `width × height` viewport over a container of the same size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            container: (width, height),
            viewport: (width, height),
            touch: false,
            listeners: BTreeMap::new(),
            next_listener: 1,
            pending_frame: None,
            next_frame: 1,
            now_ms: 0.0,
            scroll: (0.0, 0.0),
            renders: Vec::new(),
        }
    }

    pub fn with_container(mut self, width: f64, height: f64) -> Self {
        self.container = (width, height);
        self
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn set_container(&mut self, width: f64, height: f64) {
        self.container = (width, height);
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    pub fn set_touch(&mut self, touch: bool) {
        self.touch = touch;
    }

    /// Number of currently registered listeners.
    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_subscribed(&self, kind: EventKind) -> bool {
        self.listeners.values().any(|&k| k == kind)
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Advances the fake clock by `dt_ms` and fires the pending frame, if any.
    ///
    /// Returns the handle and timestamp the controller must be called with.
    pub fn advance(&mut self, dt_ms: f64) -> Option<(FrameHandle, f64)> {
        self.now_ms += dt_ms;
        let handle = self.pending_frame.take()?;
        Some((handle, self.now_ms))
    }

    /// The native scroll offset as `(x, y)`.
    pub fn native_scroll(&self) -> (f64, f64) {
        self.scroll
    }

    /// Moves the native scroll offset without going through the controller (scrollbar drag,
    /// in-page search). Deliver [`HostEvent::Scroll`] afterwards to notify the controller.
    pub fn set_native_scroll(&mut self, x: f64, y: f64) {
        self.scroll = (x, y);
    }

    pub fn renders(&self) -> &[Render] {
        &self.renders
    }

    pub fn take_renders(&mut self) -> Vec<Render> {
        core::mem::take(&mut self.renders)
    }

    pub fn last_render(&self) -> Option<Render> {
        self.renders.last().copied()
    }
}

impl Host for SimHost {
    fn layout(&self, axis: Axis) -> Layout {
        Layout::new(
            axis.pick(self.container.0, self.container.1),
            axis.pick(self.viewport.0, self.viewport.1),
        )
    }

    fn supports_touch(&self) -> bool {
        self.touch
    }

    fn subscribe(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, kind);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        let removed = self.listeners.remove(&id);
        debug_assert!(removed.is_some(), "SimHost: unknown listener {id:?}");
    }

    fn request_frame(&mut self) -> FrameHandle {
        // A frame delivered straight to `Controller::on_frame` (not via `advance`) is still in
        // the slot; the new request replaces it.
        let handle = FrameHandle(self.next_frame);
        self.next_frame += 1;
        self.pending_frame = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame == Some(handle) {
            self.pending_frame = None;
        }
    }

    fn set_transform(&mut self, translate: Translate) {
        self.renders.push(Render::Translate(translate));
    }

    fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll = (x, y);
        self.renders.push(Render::ScrollTo { x, y });
    }

    fn scroll_offset(&self, axis: Axis) -> f64 {
        axis.pick(self.scroll.0, self.scroll.1)
    }
}

impl Controller<SimHost> {
    /// Delivers `event` the way a host would: only if a listener for its kind is registered.
    ///
    /// Returns `None` when nothing is listening.
    pub fn dispatch(&mut self, event: HostEvent) -> Option<Propagation> {
        if !self.host().is_subscribed(event.kind()) {
            return None;
        }
        Some(self.handle_event(event))
    }

    /// Advances the simulated clock by `dt_ms` and runs the pending frame.
    ///
    /// Returns `false` when no frame was pending.
    pub fn step(&mut self, dt_ms: f64) -> bool {
        let Some((handle, now_ms)) = self.host_mut().advance(dt_ms) else {
            return false;
        };
        self.on_frame(handle, now_ms);
        true
    }
}
