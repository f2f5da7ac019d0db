// action.rs
//
// Adapters between effects and an external per-frame scheduler, plus the
// canned screen-shake style special effects.

use glam::DVec2;

use crate::effect::{Effect, EffectError, Transform2D};
use crate::timing::TimingFunction;

/// Wraps an effect in a per-tick callback of the shape a frame scheduler
/// invokes: `(target, elapsed_seconds)`.
///
/// Elapsed time is normalized against the effect's duration and remapped
/// through its timing function before the effect update runs. The fraction
/// is not clamped; the scheduler must stop invoking the callback once the
/// elapsed time passes the duration.
pub fn effect_callback<T: Transform2D>(mut effect: Effect) -> impl FnMut(&mut T, f64) {
    move |target, elapsed| {
        let t = effect.timing().apply(elapsed / effect.duration());
        effect.update(target, t);
    }
}

/// An effect paired with its accumulated play time.
///
/// Unlike the raw callback this clamps the final tick, so the effect lands
/// exactly on its end value before being reported complete.
#[derive(Debug, Clone, Copy)]
pub struct EffectAction {
    effect: Effect,
    elapsed: f64,
}

impl EffectAction {
    pub fn new(effect: Effect) -> Self {
        Self {
            effect,
            elapsed: 0.0,
        }
    }

    /// Advances the action by `dt` seconds and applies it to `target`.
    /// Returns true once the effect has played out its full duration.
    pub fn tick<T: Transform2D>(&mut self, target: &mut T, dt: f64) -> bool {
        if dt < 0.0 {
            // Progress must be non-decreasing; a negative step would feed
            // the effect a semantically meaningless backwards delta.
            log::warn!("EffectAction ticked with negative dt {dt}, skipping");
            return self.is_finished();
        }
        self.elapsed = (self.elapsed + dt).min(self.effect.duration());
        let t = self.effect.timing().apply(self.elapsed / self.effect.duration());
        self.effect.update(target, t);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.effect.duration()
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f64 {
        self.elapsed / self.effect.duration()
    }
}

/// Handle to a scheduled effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(pub u32);

/// Owns the running effects for one transform and drives them once per
/// frame, dropping each effect when its progress reaches 1.0.
#[derive(Debug, Default)]
pub struct EffectRunner {
    actions: Vec<(EffectId, EffectAction)>,
    next_id: u32,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an effect. Returns a handle for later cancellation.
    pub fn add(&mut self, effect: Effect) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.actions.push((id, EffectAction::new(effect)));
        id
    }

    /// Cancel an effect by handle. Removal is the only cancellation
    /// mechanism; a running effect is never signalled in-flight.
    pub fn remove(&mut self, id: EffectId) -> bool {
        let before = self.actions.len();
        self.actions.retain(|(e, _)| *e != id);
        self.actions.len() != before
    }

    /// Advance every effect against `target` and drop the ones that
    /// completed. Returns how many completed this tick.
    pub fn tick<T: Transform2D>(&mut self, target: &mut T, dt: f64) -> usize {
        let mut finished = 0;
        self.actions.retain_mut(|(_, action)| {
            if action.tick(target, dt) {
                finished += 1;
                false
            } else {
                true
            }
        });
        finished
    }

    /// Number of active effects.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether there are no active effects.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Cancel all effects.
    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

/// Builds a screen-shake action: displaces the transform by `amount` and
/// rattles it back to where it started.
///
/// `oscillations` sets how often the shake crosses the rest position; 10 is
/// a good value. Shorter durations read better.
pub fn screen_shake<T: Transform2D>(
    target: &T,
    amount: DVec2,
    oscillations: u32,
    duration: f64,
) -> Result<EffectAction, EffectError> {
    let old_position = target.position();
    let effect = Effect::move_to(target, duration, old_position + amount, old_position)?
        .with_timing(TimingFunction::shake(oscillations));
    Ok(EffectAction::new(effect))
}

/// Builds a screen-rotate action that wobbles the transform by `angle`
/// radians and settles back on its original rotation. Usually applied to a
/// pivot transform centered in the scene.
pub fn screen_rotate<T: Transform2D>(
    target: &T,
    angle: f64,
    oscillations: u32,
    duration: f64,
) -> Result<EffectAction, EffectError> {
    let old_angle = target.rotation();
    let effect = Effect::rotate_to(target, duration, old_angle + angle, old_angle)?
        .with_timing(TimingFunction::shake(oscillations));
    Ok(EffectAction::new(effect))
}

/// Builds a screen-zoom action that punches the transform's scale by the
/// componentwise `amount` and settles back on the original scale.
pub fn screen_zoom<T: Transform2D>(
    target: &T,
    amount: DVec2,
    oscillations: u32,
    duration: f64,
) -> Result<EffectAction, EffectError> {
    let old_scale = target.scale();
    let effect = Effect::scale_to(target, duration, old_scale * amount, old_scale)?
        .with_timing(TimingFunction::shake(oscillations));
    Ok(EffectAction::new(effect))
}
