use smooth_scroll::{Axis, Layout, Translate};

use crate::EventKind;

/// Identifies one event subscription on a [`Host`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Identifies one scheduled animation frame on a [`Host`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

/// The environment a [`crate::Controller`] runs in.
///
/// An implementation binds these calls to a real rendering surface (a DOM window, a native
/// scroll view) or to an in-memory fake such as [`crate::SimHost`]. Every method is called from
/// the single thread that also delivers events and frames.
pub trait Host {
    /// Container and viewport extents along `axis`.
    ///
    /// Called on start and on every resize. The scroll container must exist by then.
    fn layout(&self, axis: Axis) -> Layout;

    /// Whether the environment supports touch input.
    fn supports_touch(&self) -> bool;

    fn subscribe(&mut self, kind: EventKind) -> ListenerId;

    fn unsubscribe(&mut self, id: ListenerId);

    /// Schedules one callback for the next frame.
    ///
    /// The host later calls [`crate::Controller::on_frame`] with the returned handle and a
    /// monotonically increasing timestamp.
    fn request_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Applies a visual offset to the scroll container.
    fn set_transform(&mut self, translate: Translate);

    /// Sets the native scroll offset.
    fn scroll_to(&mut self, x: f64, y: f64);

    /// Reads the native scroll offset along `axis`.
    fn scroll_offset(&self, axis: Axis) -> f64;
}
