pub mod action;
pub mod descriptor;
pub mod effect;
pub mod math;
pub mod timing;

// Re-export key types at crate root for convenience
pub use action::{
    effect_callback, screen_rotate, screen_shake, screen_zoom, EffectAction, EffectId,
    EffectRunner,
};
pub use descriptor::EffectDescriptor;
pub use effect::{rotate_to_velocity, Effect, EffectError, Transform2D};
pub use math::{
    lerp, lerp_vec2, lerp_vec3, shortest_angle_between, FloatExt, Rng, Vec2Ext, Vec3Ext,
};
pub use timing::TimingFunction;
