use crate::Axis;

/// Per-input-source scale factors applied to raw deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Speeds {
    /// Multiplier for drag deltas on touch-capable devices.
    pub touch: f64,
    /// Multiplier for drag deltas when dragging with a mouse.
    pub mouse_drag: f64,
    /// Multiplier for wheel `delta_y`.
    pub wheel: f64,
}

impl Speeds {
    pub const DEFAULT_TOUCH: f64 = 2.8;
    pub const DEFAULT_MOUSE_DRAG: f64 = 1.0;
    pub const DEFAULT_WHEEL: f64 = 0.6;

    /// The drag multiplier for the given input modality.
    pub fn drag(&self, is_touch: bool) -> f64 {
        if is_touch { self.touch } else { self.mouse_drag }
    }
}

impl Default for Speeds {
    fn default() -> Self {
        Self {
            touch: Self::DEFAULT_TOUCH,
            mouse_drag: Self::DEFAULT_MOUSE_DRAG,
            wheel: Self::DEFAULT_WHEEL,
        }
    }
}

/// Configuration for [`crate::SmoothScroller`].
///
/// `direction` and `gesture_direction` are independent: a page can scroll horizontally while
/// reading vertical drags.
///
/// With `feature = "serde"`, missing fields fall back to [`ScrollOptions::default`], so a host
/// can load a partial JSON/TOML table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    /// Axis the page is moved along.
    pub direction: Axis,
    /// Axis raw touch/drag coordinates are sampled along.
    pub gesture_direction: Axis,
    pub speeds: Speeds,
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Axis) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_gesture_direction(mut self, gesture_direction: Axis) -> Self {
        self.gesture_direction = gesture_direction;
        self
    }

    /// Sets both the scroll and the gesture axis.
    pub fn with_axis(self, axis: Axis) -> Self {
        self.with_direction(axis).with_gesture_direction(axis)
    }

    pub fn with_speeds(mut self, speeds: Speeds) -> Self {
        self.speeds = speeds;
        self
    }

    pub fn with_touch_speed(mut self, touch: f64) -> Self {
        self.speeds.touch = touch;
        self
    }

    pub fn with_mouse_drag_speed(mut self, mouse_drag: f64) -> Self {
        self.speeds.mouse_drag = mouse_drag;
        self
    }

    pub fn with_wheel_speed(mut self, wheel: f64) -> Self {
        self.speeds.wheel = wheel;
        self
    }
}
