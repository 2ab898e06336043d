use smooth_scroll::Pointer;

/// The host event sources a running controller listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    Wheel,
    Resize,
    Scroll,
}

impl EventKind {
    pub const ALL: [EventKind; 9] = [
        Self::MouseDown,
        Self::MouseMove,
        Self::MouseUp,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::Wheel,
        Self::Resize,
        Self::Scroll,
    ];

    /// Whether the listener may be registered as passive.
    ///
    /// Non-passive kinds have their default host behaviour suppressed by the controller, so the
    /// host must register them in a way that allows it.
    pub fn is_passive(self) -> bool {
        !matches!(self, Self::MouseMove | Self::TouchMove | Self::Wheel)
    }
}

/// An input or environment notification delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    MouseDown,
    /// Pointer position in client coordinates.
    MouseMove(Pointer),
    MouseUp,
    TouchStart,
    /// Position of the primary touch point; other contacts are not tracked.
    TouchMove(Pointer),
    TouchEnd,
    Wheel {
        delta_y: f64,
    },
    Resize,
    /// The host's native scroll offset changed.
    Scroll,
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::MouseDown => EventKind::MouseDown,
            Self::MouseMove(_) => EventKind::MouseMove,
            Self::MouseUp => EventKind::MouseUp,
            Self::TouchStart => EventKind::TouchStart,
            Self::TouchMove(_) => EventKind::TouchMove,
            Self::TouchEnd => EventKind::TouchEnd,
            Self::Wheel { .. } => EventKind::Wheel,
            Self::Resize => EventKind::Resize,
            Self::Scroll => EventKind::Scroll,
        }
    }
}

/// What the host should do with an event after the controller handled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Let the host run its default behaviour.
    Continue,
    /// Suppress the host's default behaviour (native scrolling, text selection).
    PreventDefault,
}

impl Propagation {
    pub fn is_prevented(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}
