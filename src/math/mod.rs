// math/mod.rs
//
// Numeric primitives: scalar angle/clamp helpers, vector extensions over
// glam's f64 types, and a seedable random source.

pub mod float;
pub mod rng;
pub mod vec;

pub use float::{lerp, shortest_angle_between, FloatExt};
pub use rng::Rng;
pub use vec::{lerp_vec2, lerp_vec3, Vec2Ext, Vec3Ext};
