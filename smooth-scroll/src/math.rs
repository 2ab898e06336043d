/// `max(min, min(value, max))`.
///
/// Unlike `f64::clamp` this never panics when `min > max`; `min` wins.
pub fn clamp(min: f64, value: f64, max: f64) -> f64 {
    let v = if value < max { value } else { max };
    if v > min { v } else { min }
}

/// Linear interpolation, `(1 - t) * a + t * b`.
///
/// Evaluated as `a + (b - a) * t` so that `lerp(a, a, t) == a` holds exactly.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}
