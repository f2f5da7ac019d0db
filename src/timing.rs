// timing.rs
//
// Timing functions for effects, based on Robert Penner's easing equations.
// Pure math, no dependencies on effects or transforms.
//
// Every named curve maps 0.0 to exactly 0.0 and 1.0 to exactly 1.0; the
// back, elastic and bounce families transiently leave [0, 1] in between.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

/// A named easing curve remapping linear progress to shaped progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingFunction {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Slow start and end.
    QuadInOut,
    /// Stronger slow start.
    CubicIn,
    CubicOut,
    CubicInOut,
    /// Very strong slow start.
    QuartIn,
    QuartOut,
    QuartInOut,
    /// Extremely strong slow start.
    QuintIn,
    QuintOut,
    QuintInOut,
    /// Sine wave easing (smooth).
    SineIn,
    SineOut,
    SineInOut,
    /// Quarter-circle easing.
    CircIn,
    CircOut,
    CircInOut,
    /// Exponential easing (dramatic).
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    /// Spring that settles.
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    /// Overshoot then settle.
    BackIn,
    BackOut,
    BackInOut,
    /// Larger overshoot with a sine kick.
    ExtremeBackIn,
    ExtremeBackOut,
    ExtremeBackInOut,
    /// Bouncy finish.
    BounceIn,
    BounceOut,
    BounceInOut,
    /// Hermite smoothing, gentler than sine.
    Smoothstep,
    /// Damped oscillation for screen-shake style effects. `oscillations`
    /// sets how often the curve crosses its rest value, not the amplitude.
    /// Note f(0) = 1: shake effects run from a displaced start back to rest.
    Shake { oscillations: u32 },
}

impl TimingFunction {
    /// Every named curve, for configuration UIs and exhaustive tests.
    /// The parametrized `Shake` curve is not part of the named catalog.
    pub const CATALOG: &'static [TimingFunction] = &[
        Self::Linear,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::QuartIn,
        Self::QuartOut,
        Self::QuartInOut,
        Self::QuintIn,
        Self::QuintOut,
        Self::QuintInOut,
        Self::SineIn,
        Self::SineOut,
        Self::SineInOut,
        Self::CircIn,
        Self::CircOut,
        Self::CircInOut,
        Self::ExpoIn,
        Self::ExpoOut,
        Self::ExpoInOut,
        Self::ElasticIn,
        Self::ElasticOut,
        Self::ElasticInOut,
        Self::BackIn,
        Self::BackOut,
        Self::BackInOut,
        Self::ExtremeBackIn,
        Self::ExtremeBackOut,
        Self::ExtremeBackInOut,
        Self::BounceIn,
        Self::BounceOut,
        Self::BounceInOut,
        Self::Smoothstep,
    ];

    /// Shorthand for the parametrized shake curve.
    pub fn shake(oscillations: u32) -> Self {
        Self::Shake { oscillations }
    }

    /// Look up a catalog curve by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::CATALOG.iter().copied().find(|f| f.name() == name)
    }

    /// The configuration name of the curve.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadIn => "quad_in",
            Self::QuadOut => "quad_out",
            Self::QuadInOut => "quad_in_out",
            Self::CubicIn => "cubic_in",
            Self::CubicOut => "cubic_out",
            Self::CubicInOut => "cubic_in_out",
            Self::QuartIn => "quart_in",
            Self::QuartOut => "quart_out",
            Self::QuartInOut => "quart_in_out",
            Self::QuintIn => "quint_in",
            Self::QuintOut => "quint_out",
            Self::QuintInOut => "quint_in_out",
            Self::SineIn => "sine_in",
            Self::SineOut => "sine_out",
            Self::SineInOut => "sine_in_out",
            Self::CircIn => "circ_in",
            Self::CircOut => "circ_out",
            Self::CircInOut => "circ_in_out",
            Self::ExpoIn => "expo_in",
            Self::ExpoOut => "expo_out",
            Self::ExpoInOut => "expo_in_out",
            Self::ElasticIn => "elastic_in",
            Self::ElasticOut => "elastic_out",
            Self::ElasticInOut => "elastic_in_out",
            Self::BackIn => "back_in",
            Self::BackOut => "back_out",
            Self::BackInOut => "back_in_out",
            Self::ExtremeBackIn => "extreme_back_in",
            Self::ExtremeBackOut => "extreme_back_out",
            Self::ExtremeBackInOut => "extreme_back_in_out",
            Self::BounceIn => "bounce_in",
            Self::BounceOut => "bounce_out",
            Self::BounceInOut => "bounce_in_out",
            Self::Smoothstep => "smoothstep",
            Self::Shake { .. } => "shake",
        }
    }

    /// Apply the curve to a progress value `t`.
    ///
    /// `t` is deliberately not clamped: effect adapters may feed values
    /// outside [0, 1] when extrapolating, and that must not panic. The
    /// output range guarantees only hold for `t` in [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,

            // Quadratic
            Self::QuadIn => t * t,
            Self::QuadOut => t * (2.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let f = t - 1.0;
                    1.0 - 2.0 * f * f
                }
            }

            // Cubic
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let f = t - 1.0;
                1.0 + f * f * f
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let f = t - 1.0;
                    1.0 + 4.0 * f * f * f
                }
            }

            // Quartic
            Self::QuartIn => t * t * t * t,
            Self::QuartOut => {
                let f = t - 1.0;
                1.0 - f * f * f * f
            }
            Self::QuartInOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let f = t - 1.0;
                    1.0 - 8.0 * f * f * f * f
                }
            }

            // Quintic
            Self::QuintIn => t * t * t * t * t,
            Self::QuintOut => {
                let f = t - 1.0;
                1.0 + f * f * f * f * f
            }
            Self::QuintInOut => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    let f = t - 1.0;
                    1.0 + 16.0 * f * f * f * f * f
                }
            }

            // Sine
            Self::SineIn => ((t - 1.0) * FRAC_PI_2).sin() + 1.0,
            Self::SineOut => (t * FRAC_PI_2).sin(),
            Self::SineInOut => 0.5 * (1.0 - (t * PI).cos()),

            // Circular
            Self::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            Self::CircOut => ((2.0 - t) * t).sqrt(),
            Self::CircInOut => {
                if t < 0.5 {
                    0.5 * (1.0 - (1.0 - 4.0 * t * t).sqrt())
                } else {
                    0.5 * (-4.0 * t * t + 8.0 * t - 3.0).sqrt() + 0.5
                }
            }

            // Exponential. The formula never quite reaches the endpoints,
            // so they are returned literally.
            Self::ExpoIn => {
                if t == 0.0 {
                    t
                } else {
                    (10.0 * (t - 1.0)).exp2()
                }
            }
            Self::ExpoOut => {
                if t == 1.0 {
                    t
                } else {
                    1.0 - (-10.0 * t).exp2()
                }
            }
            Self::ExpoInOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    0.5 * (20.0 * t - 10.0).exp2()
                } else {
                    1.0 - 0.5 * (-20.0 * t + 10.0).exp2()
                }
            }

            // Elastic
            Self::ElasticIn => (13.0 * FRAC_PI_2 * t).sin() * (10.0 * (t - 1.0)).exp2(),
            Self::ElasticOut => (-13.0 * FRAC_PI_2 * (t + 1.0)).sin() * (-10.0 * t).exp2() + 1.0,
            Self::ElasticInOut => {
                if t < 0.5 {
                    0.5 * (13.0 * PI * t).sin() * (20.0 * t - 10.0).exp2()
                } else {
                    0.5 * (-13.0 * PI * t).sin() * (-20.0 * t + 10.0).exp2() + 1.0
                }
            }

            // Back (overshoot)
            Self::BackIn => back_in(t),
            Self::BackOut => 1.0 - back_in(1.0 - t),
            Self::BackInOut => {
                if t < 0.5 {
                    0.5 * back_in(2.0 * t)
                } else {
                    1.0 - 0.5 * back_in(2.0 * (1.0 - t))
                }
            }

            // Extreme back. sin(π) is not exactly zero in floating point,
            // so the endpoints are returned literally.
            Self::ExtremeBackIn => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    extreme_back_in(t)
                }
            }
            Self::ExtremeBackOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    1.0 - extreme_back_in(1.0 - t)
                }
            }
            Self::ExtremeBackInOut => {
                if t < 0.5 {
                    0.5 * extreme_back_in(2.0 * t)
                } else {
                    1.0 - 0.5 * extreme_back_in(2.0 * (1.0 - t))
                }
            }

            // Bounce
            Self::BounceIn => 1.0 - bounce_out(1.0 - t),
            Self::BounceOut => bounce_out(t),
            Self::BounceInOut => {
                if t < 0.5 {
                    0.5 * (1.0 - bounce_out(1.0 - t * 2.0))
                } else {
                    0.5 * bounce_out(t * 2.0 - 1.0) + 0.5
                }
            }

            Self::Smoothstep => t * t * (3.0 - 2.0 * t),

            Self::Shake { oscillations } => {
                -(-10.0 * t).exp2() * (t * PI * oscillations as f64 * 2.0).sin() + 1.0
            }
        }
    }
}

/// Overshoot constant from Penner's back easing.
const BACK_S: f64 = 1.70158;

// ((s + 1)t - s)·t², rearranged so t = 0 and t = 1 land exactly on 0 and 1.
#[inline]
fn back_in(t: f64) -> f64 {
    t * t * t + BACK_S * t * t * (t - 1.0)
}

// (t² - sin(tπ))·t
#[inline]
fn extreme_back_in(t: f64) -> f64 {
    (t * t - (t * PI).sin()) * t
}

#[inline]
fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let f = t - 1.5 / D1;
        N1 * f * f + 0.75
    } else if t < 2.5 / D1 {
        let f = t - 2.25 / D1;
        N1 * f * f + 0.9375
    } else {
        let f = t - 2.625 / D1;
        N1 * f * f + 0.984375
    }
}
