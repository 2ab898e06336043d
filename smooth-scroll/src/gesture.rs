/// Tracks the primary contact of a press/drag gesture along one axis.
///
/// A previous sample of `0.0` means "no sample yet in this gesture": the first move of every
/// gesture yields a zero delta instead of jumping by the full pointer coordinate. A pointer that
/// genuinely sits at coordinate `0.0` is indistinguishable from the sentinel and also yields
/// zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gesture {
    is_down: bool,
    prev: f64,
    current: f64,
}

impl Gesture {
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// The coordinate of the previous sample (`0.0` at gesture start).
    pub fn prev(&self) -> f64 {
        self.prev
    }

    /// The coordinate of the latest sample (`0.0` at gesture start).
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn press(&mut self) {
        self.is_down = true;
    }

    /// Records a pointer coordinate and returns the scroll delta it implies.
    ///
    /// Returns `None` when no press is active. Moving the pointer towards smaller coordinates
    /// produces a positive delta (content follows the finger).
    pub fn sample(&mut self, pos: f64) -> Option<f64> {
        if !self.is_down {
            return None;
        }

        self.current = pos;
        let delta = if self.prev == 0.0 {
            0.0
        } else {
            -(self.current - self.prev)
        };
        self.prev = self.current;
        Some(delta)
    }

    pub fn release(&mut self) {
        self.is_down = false;
        self.current = 0.0;
        self.prev = 0.0;
    }
}
