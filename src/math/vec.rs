// math/vec.rs
//
// Vector helpers over glam's f64 types. glam supplies the componentwise
// operator arithmetic, lengths, dot and cross products; these extensions add
// the angle and normalization policies the effect code relies on.

use glam::{DVec2, DVec3};

/// 2D vector extensions.
pub trait Vec2Ext {
    /// The angle of the vector in radians, in the range -π to π.
    /// An angle of 0 points along the positive x axis.
    fn angle(self) -> f64;

    /// Returns a copy normalized to length 1.0. The zero vector has no
    /// direction and normalizes to itself rather than producing NaN.
    fn normalized(self) -> DVec2;

    /// The distance between two points. Pythagoras.
    fn distance_to(self, other: DVec2) -> f64;
}

impl Vec2Ext for DVec2 {
    #[inline]
    fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    fn normalized(self) -> DVec2 {
        let len = self.length();
        if len > 0.0 {
            self / len
        } else {
            DVec2::ZERO
        }
    }

    #[inline]
    fn distance_to(self, other: DVec2) -> f64 {
        (self - other).length()
    }
}

/// 3D vector extensions.
pub trait Vec3Ext {
    /// Returns a copy normalized to length 1.0, with the same zero-vector
    /// policy as [`Vec2Ext::normalized`].
    fn normalized(self) -> DVec3;
}

impl Vec3Ext for DVec3 {
    fn normalized(self) -> DVec3 {
        let len = self.length();
        if len > 0.0 {
            self / len
        } else {
            DVec3::ZERO
        }
    }
}

/// Linearly interpolate between two 2D vectors, componentwise and unclamped.
#[inline]
pub fn lerp_vec2(start: DVec2, end: DVec2, t: f64) -> DVec2 {
    start + (end - start) * t
}

/// Linearly interpolate between two 3D vectors, componentwise and unclamped.
#[inline]
pub fn lerp_vec3(start: DVec3, end: DVec3, t: f64) -> DVec3 {
    start + (end - start) * t
}
