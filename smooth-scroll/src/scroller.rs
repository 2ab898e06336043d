use crate::gesture::Gesture;
use crate::math::{abs, clamp, lerp};
use crate::{Axis, Layout, Pointer, Render, RenderStrategy, ScrollOptions, ScrollState, Translate};

/// Per-frame interpolation weight applied to `current → target`.
pub const SMOOTHING: f64 = 0.1;

/// `|target - current|` at or below this distance counts as settled.
pub const EPSILON: f64 = 0.01;

/// A headless smooth-scroll simulation.
///
/// Input handlers move `target` instantly (clamped to `[0, limit]`); [`SmoothScroller::frame`]
/// moves `current` a fixed fraction of the remaining distance per frame and reports what the
/// host should render. The scroller holds no host objects: an adapter feeds it input and layout
/// and applies the returned [`Render`] commands.
///
/// The smoothing step does not scale with elapsed time, so convergence speed depends on the
/// frame rate.
#[derive(Clone, Debug)]
pub struct SmoothScroller {
    options: ScrollOptions,
    target: f64,
    current: f64,
    limit: f64,
    is_scrolling: bool,
    strategy: RenderStrategy,
    gesture: Gesture,
    last_frame_ms: Option<f64>,
    last_frame_delta_ms: f64,
}

impl SmoothScroller {
    pub fn new(options: ScrollOptions) -> Self {
        sdebug!(
            direction = ?options.direction,
            gesture_direction = ?options.gesture_direction,
            "SmoothScroller::new"
        );
        Self {
            options,
            target: 0.0,
            current: 0.0,
            limit: 0.0,
            is_scrolling: false,
            strategy: RenderStrategy::default(),
            gesture: Gesture::default(),
            last_frame_ms: None,
            last_frame_delta_ms: 0.0,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn direction(&self) -> Axis {
        self.options.direction
    }

    pub fn gesture_direction(&self) -> Axis {
        self.options.gesture_direction
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn is_touch_down(&self) -> bool {
        self.gesture.is_down()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn is_touch(&self) -> bool {
        self.strategy.is_touch()
    }

    /// Timestamp of the most recent frame, if any frame ran.
    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }

    /// Time between the two most recent frames (`0.0` before the second frame).
    pub fn last_frame_delta_ms(&self) -> f64 {
        self.last_frame_delta_ms
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            target: self.target,
            current: self.current,
            limit: self.limit,
            is_scrolling: self.is_scrolling,
            is_touch_down: self.gesture.is_down(),
        }
    }

    /// Applies a fresh layout measurement and returns the new limit.
    ///
    /// `target` is re-clamped into `[0, limit]`; `current` is left alone so it eases back on
    /// the following frames.
    pub fn set_layout(&mut self, layout: Layout) -> f64 {
        debug_assert!(
            layout.container >= 0.0 && layout.viewport >= 0.0,
            "SmoothScroller: negative layout extents ({layout:?})"
        );
        if layout.container < layout.viewport {
            swarn!(
                container = layout.container,
                viewport = layout.viewport,
                "container smaller than viewport; limit clamped to 0"
            );
        }
        self.limit = layout.limit();
        self.target = clamp(0.0, self.target, self.limit);
        sdebug!(limit = self.limit, target = self.target, "set_layout");
        self.limit
    }

    /// Selects the render path from the host's input modality.
    pub fn set_touch_device(&mut self, is_touch: bool) {
        self.strategy = RenderStrategy::for_touch(is_touch);
        sdebug!(strategy = ?self.strategy, "set_touch_device");
    }

    /// `target ← clamp(0, target + delta, limit)`.
    pub fn update_target(&mut self, delta: f64) {
        if !delta.is_finite() {
            swarn!(delta, "update_target: ignoring non-finite delta");
            return;
        }
        self.target = clamp(0.0, self.target + delta, self.limit);
        strace!(delta, target = self.target, "update_target");
    }

    pub fn on_press_start(&mut self) {
        self.gesture.press();
    }

    /// Feeds a pointer/touch move. Ignored unless a press is active.
    pub fn on_press_move(&mut self, pointer: Pointer) {
        let pos = self.options.gesture_direction.pick(pointer.x, pointer.y);
        let Some(delta) = self.gesture.sample(pos) else {
            return;
        };
        let speed = self.options.speeds.drag(self.is_touch());
        self.update_target(delta * speed);
    }

    pub fn on_press_end(&mut self) {
        self.gesture.release();
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.update_target(delta_y * self.options.speeds.wheel);
    }

    /// Syncs to a scroll position the host reached on its own (scrollbar, in-page search).
    ///
    /// Only honoured while idle; during an animation the scroller owns the position.
    pub fn on_native_scroll(&mut self, offset: f64) {
        if self.is_scrolling {
            return;
        }
        self.target = offset;
        self.current = offset;
        strace!(offset, "on_native_scroll");
    }

    /// Advances the simulation by one frame.
    ///
    /// Returns the render command for this frame, or `None` once `current` has settled within
    /// [`EPSILON`] of `target`. Nothing is rendered while idle, so the host's own scrolling is
    /// never fought.
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<Render> {
        self.last_frame_delta_ms = match self.last_frame_ms {
            Some(prev) => timestamp_ms - prev,
            None => 0.0,
        };
        self.last_frame_ms = Some(timestamp_ms);

        self.current = lerp(self.current, self.target, SMOOTHING);
        self.is_scrolling = abs(self.target - self.current) > EPSILON;

        if !self.is_scrolling {
            return None;
        }

        Some(self.render())
    }

    /// The render command for the current position under the active strategy.
    pub fn render(&self) -> Render {
        let direction = self.options.direction;
        match self.strategy {
            RenderStrategy::Transform => {
                let (x, y) = direction.place(-self.current);
                Render::Translate(Translate { x, y, z: 0.0 })
            }
            RenderStrategy::NativeScroll => {
                let (x, y) = direction.place(self.current);
                Render::ScrollTo { x, y }
            }
        }
    }
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new(ScrollOptions::default())
    }
}
