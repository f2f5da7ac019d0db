// math/float.rs
//
// Scalar helpers for angles, clamping and interpolation.

use std::f64::consts::PI;

/// Angle, clamp and sign helpers on `f64`.
pub trait FloatExt {
    /// Converts an angle in degrees to radians.
    fn degrees_to_radians(self) -> f64;

    /// Converts an angle in radians to degrees.
    fn radians_to_degrees(self) -> f64;

    /// Clamps the value between the two bounds, inclusive. The bounds are
    /// an unordered pair: `v.clamped(a, b) == v.clamped(b, a)`.
    fn clamped(self, v1: f64, v2: f64) -> f64;

    /// Returns 1.0 if the value is positive or zero; -1.0 if it is negative.
    fn sign(self) -> f64;
}

impl FloatExt for f64 {
    #[inline]
    fn degrees_to_radians(self) -> f64 {
        PI * self / 180.0
    }

    #[inline]
    fn radians_to_degrees(self) -> f64 {
        self * 180.0 / PI
    }

    fn clamped(self, v1: f64, v2: f64) -> f64 {
        let (lo, hi) = if v1 < v2 { (v1, v2) } else { (v2, v1) };
        if self < lo {
            lo
        } else if self > hi {
            hi
        } else {
            self
        }
    }

    #[inline]
    fn sign(self) -> f64 {
        if self >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Linearly interpolate between two values.
///
/// `t` is not clamped; values outside [0, 1] extrapolate, which overshooting
/// timing functions rely on.
#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Returns the shortest signed rotation from `angle1` to `angle2`, in
/// radians. The result is always between -π and π, wrapping across the ±π
/// boundary rather than taking the long way around.
pub fn shortest_angle_between(angle1: f64, angle2: f64) -> f64 {
    let two_pi = PI * 2.0;
    let mut angle = (angle2 - angle1) % two_pi;
    if angle >= PI {
        angle -= two_pi;
    }
    if angle <= -PI {
        angle += two_pi;
    }
    angle
}
