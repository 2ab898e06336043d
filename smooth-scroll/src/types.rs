/// A scroll or gesture axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    /// Picks the component of `(x, y)` that lies on this axis.
    pub fn pick(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Places `value` on this axis, leaving the other component at zero.
    pub fn place(self, value: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (value, 0.0),
            Self::Vertical => (0.0, value),
        }
    }
}

/// The primary contact point of a mouse or touch event, in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Container and viewport extents along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub container: f64,
    pub viewport: f64,
}

impl Layout {
    pub fn new(container: f64, viewport: f64) -> Self {
        Self {
            container,
            viewport,
        }
    }

    /// The maximum scroll offset, never below zero.
    pub fn limit(&self) -> f64 {
        let limit = self.container - self.viewport;
        if limit > 0.0 { limit } else { 0.0 }
    }
}

/// How the scroller moves the page.
///
/// Touch devices get a transform on the scroll container, since native positioning there does
/// not animate smoothly. Everything else uses the host's native scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderStrategy {
    Transform,
    #[default]
    NativeScroll,
}

impl RenderStrategy {
    pub fn for_touch(is_touch: bool) -> Self {
        if is_touch {
            Self::Transform
        } else {
            Self::NativeScroll
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(self, Self::Transform)
    }
}

/// A 3-D translation applied to the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// What a frame asks the host to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Render {
    /// Move the scroll container visually.
    Translate(Translate),
    /// Set the host's native scroll offset.
    ScrollTo { x: f64, y: f64 },
}
