// effect.rs
//
// Move/scale/rotate interpolators driven by a timing function.
//
// Each effect emits incremental deltas against its own previous output
// instead of writing absolute values, so several effects can drive the same
// transform at the same time without one overwriting the others.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};
use thiserror::Error;

use crate::timing::TimingFunction;

/// The mutable transform capability an engine exposes to effects: a 2D
/// position, a non-uniform 2D scale factor, and a rotation angle in radians.
pub trait Transform2D {
    fn position(&self) -> DVec2;
    fn set_position(&mut self, position: DVec2);
    fn scale(&self) -> DVec2;
    fn set_scale(&mut self, scale: DVec2);
    fn rotation(&self) -> f64;
    fn set_rotation(&mut self, rotation: f64);
}

/// Errors surfaced when constructing an effect.
#[derive(Debug, Error, PartialEq)]
pub enum EffectError {
    /// The adapter divides elapsed time by the duration, so zero and
    /// negative durations are rejected up front instead of letting a
    /// division by zero propagate NaN through the transform.
    #[error("effect duration must be positive, got {0}")]
    NonPositiveDuration(f64),
}

/// The property an effect animates, with the interpolation state needed for
/// incremental updates.
#[derive(Debug, Clone, Copy)]
enum EffectKind {
    Move {
        start: DVec2,
        delta: DVec2,
        previous: DVec2,
    },
    Scale {
        start: DVec2,
        delta: DVec2,
        previous: DVec2,
    },
    Rotate {
        start: f64,
        delta: f64,
        previous: f64,
    },
}

/// A timed move/scale/rotate interpolation bound to one transform.
///
/// Drive it once per tick with a monotonically non-decreasing eased fraction;
/// the owner discards the effect once the fraction reaches 1.0. There is no
/// internal completion flag.
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    kind: EffectKind,
    duration: f64,
    timing: TimingFunction,
}

impl Effect {
    /// Moves a transform from `start` to `end` over `duration` seconds.
    ///
    /// The previous-value snapshot is seeded from the transform's current
    /// position, so the first update only contributes this effect's own
    /// displacement.
    pub fn move_to<T: Transform2D>(
        target: &T,
        duration: f64,
        start: DVec2,
        end: DVec2,
    ) -> Result<Self, EffectError> {
        Ok(Self {
            kind: EffectKind::Move {
                start,
                delta: end - start,
                previous: target.position(),
            },
            duration: checked_duration(duration)?,
            timing: TimingFunction::Linear,
        })
    }

    /// Scales a transform from the `start` scale factor to `end`.
    pub fn scale_to<T: Transform2D>(
        target: &T,
        duration: f64,
        start: DVec2,
        end: DVec2,
    ) -> Result<Self, EffectError> {
        Ok(Self {
            kind: EffectKind::Scale {
                start,
                delta: end - start,
                previous: target.scale(),
            },
            duration: checked_duration(duration)?,
            timing: TimingFunction::Linear,
        })
    }

    /// Rotates a transform from the `start` angle to `end`, in radians.
    ///
    /// The interpolation is a plain linear sweep over whatever angles are
    /// given; callers wanting a non-accumulating shortest-path rotation pick
    /// their endpoints with [`crate::math::shortest_angle_between`].
    pub fn rotate_to<T: Transform2D>(
        target: &T,
        duration: f64,
        start: f64,
        end: f64,
    ) -> Result<Self, EffectError> {
        Ok(Self {
            kind: EffectKind::Rotate {
                start,
                delta: end - start,
                previous: target.rotation(),
            },
            duration: checked_duration(duration)?,
            timing: TimingFunction::Linear,
        })
    }

    /// Replaces the timing function (linear by default).
    pub fn with_timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Total play time in seconds. Always positive.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn timing(&self) -> TimingFunction {
        self.timing
    }

    /// Applies the eased fraction `t` to `target`.
    ///
    /// The new value is composed onto the target's current state — added for
    /// move/rotate, multiplied componentwise for scale — via the difference
    /// from this effect's previous output, never written absolutely.
    pub fn update<T: Transform2D>(&mut self, target: &mut T, t: f64) {
        match &mut self.kind {
            EffectKind::Move {
                start,
                delta,
                previous,
            } => {
                let current = *start + *delta * t;
                let diff = current - *previous;
                *previous = current;
                target.set_position(target.position() + diff);
            }
            EffectKind::Scale {
                start,
                delta,
                previous,
            } => {
                let current = *start + *delta * t;
                // Scale composes multiplicatively with concurrent scale
                // effects, so the increment is a componentwise ratio.
                let diff = current / *previous;
                *previous = current;
                target.set_scale(target.scale() * diff);
            }
            EffectKind::Rotate {
                start,
                delta,
                previous,
            } => {
                let current = *start + *delta * t;
                let diff = current - *previous;
                *previous = current;
                target.set_rotation(target.rotation() + diff);
            }
        }
    }
}

fn checked_duration(duration: f64) -> Result<f64, EffectError> {
    if duration > 0.0 {
        Ok(duration)
    } else {
        Err(EffectError::NonPositiveDuration(duration))
    }
}

/// Orients a transform toward the direction it is moving by tweening its
/// rotation angle, assuming the art faces up at a rotation of 0.
///
/// `rate` sets how fast the rotation catches up, between 0.0 (never) and
/// 1.0 (instantaneous).
pub fn rotate_to_velocity<T: Transform2D>(target: &mut T, velocity: DVec2, rate: f64) {
    let new_angle = velocity.y.atan2(velocity.x) - FRAC_PI_2;

    // atan2 ranges over -π..π, so a sweep crossing that boundary would
    // otherwise take the long way around. Shift the current rotation by a
    // full turn to keep the tween on the short path.
    let mut rotation = target.rotation();
    if new_angle - rotation > PI {
        rotation += PI * 2.0;
    } else if rotation - new_angle > PI {
        rotation -= PI * 2.0;
    }

    target.set_rotation(rotation + (new_angle - rotation) * rate);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal stand-in for an engine node.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct Node {
        pub pos: DVec2,
        pub scale: DVec2,
        pub rotation: f64,
    }

    impl Node {
        pub fn new() -> Self {
            Node {
                pos: DVec2::ZERO,
                scale: DVec2::ONE,
                rotation: 0.0,
            }
        }
    }

    impl Transform2D for Node {
        fn position(&self) -> DVec2 {
            self.pos
        }
        fn set_position(&mut self, position: DVec2) {
            self.pos = position;
        }
        fn scale(&self) -> DVec2 {
            self.scale
        }
        fn set_scale(&mut self, scale: DVec2) {
            self.scale = scale;
        }
        fn rotation(&self) -> f64 {
            self.rotation
        }
        fn set_rotation(&mut self, rotation: f64) {
            self.rotation = rotation;
        }
    }

    #[test]
    fn move_effect_interpolates() {
        let mut node = Node::new();
        let mut effect =
            Effect::move_to(&node, 1.0, DVec2::ZERO, DVec2::new(100.0, 50.0)).unwrap();

        effect.update(&mut node, 0.5);
        assert!((node.pos - DVec2::new(50.0, 25.0)).length() < 1e-9);

        effect.update(&mut node, 1.0);
        assert!((node.pos - DVec2::new(100.0, 50.0)).length() < 1e-9);
    }

    #[test]
    fn concurrent_move_effects_sum_their_displacements() {
        let mut node = Node::new();
        let mut horizontal =
            Effect::move_to(&node, 1.0, DVec2::ZERO, DVec2::new(100.0, 0.0)).unwrap();
        let mut vertical =
            Effect::move_to(&node, 1.0, DVec2::ZERO, DVec2::new(0.0, 50.0)).unwrap();

        // Interleave updates in both orders across the ticks.
        for (i, flip) in [(1, false), (2, true), (3, false), (4, true)] {
            let t = i as f64 / 4.0;
            if flip {
                vertical.update(&mut node, t);
                horizontal.update(&mut node, t);
            } else {
                horizontal.update(&mut node, t);
                vertical.update(&mut node, t);
            }
        }

        assert!((node.pos - DVec2::new(100.0, 50.0)).length() < 1e-9);
    }

    #[test]
    fn concurrent_scale_effects_compose_multiplicatively() {
        let mut node = Node::new();
        let mut double = Effect::scale_to(&node, 1.0, DVec2::ONE, DVec2::splat(2.0)).unwrap();
        let mut triple = Effect::scale_to(&node, 1.0, DVec2::ONE, DVec2::splat(3.0)).unwrap();

        for i in 1..=4 {
            let t = i as f64 / 4.0;
            double.update(&mut node, t);
            triple.update(&mut node, t);
        }

        assert!((node.scale - DVec2::splat(6.0)).length() < 1e-9);
    }

    #[test]
    fn rotate_effect_accumulates_deltas() {
        let mut node = Node::new();
        node.rotation = 0.25;
        let mut effect = Effect::rotate_to(&node, 1.0, 0.25, 1.25).unwrap();

        effect.update(&mut node, 0.5);
        assert!((node.rotation - 0.75).abs() < 1e-12);
        effect.update(&mut node, 1.0);
        assert!((node.rotation - 1.25).abs() < 1e-12);
    }

    #[test]
    fn move_effect_starts_relative_to_current_position() {
        // The node is elsewhere when the effect starts; the first update
        // carries the jump to the interpolated path, later ones only the
        // per-tick delta.
        let mut node = Node::new();
        node.pos = DVec2::new(10.0, 10.0);
        let mut effect =
            Effect::move_to(&node, 1.0, DVec2::ZERO, DVec2::new(100.0, 0.0)).unwrap();

        effect.update(&mut node, 1.0);
        assert!((node.pos - DVec2::new(100.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn non_positive_durations_are_rejected() {
        let node = Node::new();
        assert_eq!(
            Effect::move_to(&node, 0.0, DVec2::ZERO, DVec2::ONE).unwrap_err(),
            EffectError::NonPositiveDuration(0.0)
        );
        assert_eq!(
            Effect::rotate_to(&node, -1.0, 0.0, 1.0).unwrap_err(),
            EffectError::NonPositiveDuration(-1.0)
        );
    }

    #[test]
    fn default_timing_is_linear() {
        let node = Node::new();
        let effect = Effect::scale_to(&node, 1.0, DVec2::ONE, DVec2::splat(2.0)).unwrap();
        assert_eq!(effect.timing(), TimingFunction::Linear);

        let eased = effect.with_timing(TimingFunction::QuadOut);
        assert_eq!(eased.timing(), TimingFunction::QuadOut);
    }

    #[test]
    fn rotate_to_velocity_takes_shortest_path() {
        use crate::math::shortest_angle_between;

        let mut node = Node::new();
        // Facing just shy of +π while the desired heading sits just past
        // -π. The effective rotation must be tiny, not a full turn.
        node.rotation = PI - 0.05;
        let before = node.rotation;
        rotate_to_velocity(&mut node, DVec2::new(0.05, -1.0), 0.5);
        let moved = shortest_angle_between(before, node.rotation);
        assert!(moved > 0.0, "rotated away from the target heading");
        assert!(moved.abs() < 0.2, "rotated the long way: {moved}");
    }

    #[test]
    fn rotate_to_velocity_full_rate_snaps() {
        let mut node = Node::new();
        rotate_to_velocity(&mut node, DVec2::new(0.0, 1.0), 1.0);
        // Moving straight up means no rotation for up-facing art.
        assert!(node.rotation.abs() < 1e-12);
    }
}
