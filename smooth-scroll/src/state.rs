/// A lightweight, serializable snapshot of the scroller's simulation state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub target: f64,
    pub current: f64,
    pub limit: f64,
    pub is_scrolling: bool,
    pub is_touch_down: bool,
}
