// descriptor.rs
//
// Configuration-driven effect construction. Games describe effects in JSON
// (tuning files, feature flags) and build them against a live transform at
// runtime.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::effect::{Effect, EffectError, Transform2D};
use crate::timing::TimingFunction;

/// Declarative description of an effect, loaded from configuration.
///
/// The timing field accepts any catalog curve name, or the parametrized
/// shake form `{"shake": {"oscillations": 10}}`; it defaults to linear.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectDescriptor {
    Move {
        from: DVec2,
        to: DVec2,
        duration: f64,
        #[serde(default)]
        timing: TimingFunction,
    },
    Scale {
        from: DVec2,
        to: DVec2,
        duration: f64,
        #[serde(default)]
        timing: TimingFunction,
    },
    Rotate {
        from: f64,
        to: f64,
        duration: f64,
        #[serde(default)]
        timing: TimingFunction,
    },
}

impl EffectDescriptor {
    /// Parse a descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a live effect bound to `target`.
    pub fn build<T: Transform2D>(&self, target: &T) -> Result<Effect, EffectError> {
        match *self {
            EffectDescriptor::Move {
                from,
                to,
                duration,
                timing,
            } => Ok(Effect::move_to(target, duration, from, to)?.with_timing(timing)),
            EffectDescriptor::Scale {
                from,
                to,
                duration,
                timing,
            } => Ok(Effect::scale_to(target, duration, from, to)?.with_timing(timing)),
            EffectDescriptor::Rotate {
                from,
                to,
                duration,
                timing,
            } => Ok(Effect::rotate_to(target, duration, from, to)?.with_timing(timing)),
        }
    }
}
