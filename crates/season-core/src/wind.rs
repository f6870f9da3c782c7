use rand::Rng;

use crate::numeric::{clamp, lerp};

/// Per-effect wind tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindTuning {
    /// Minimum time between target changes.
    pub interval_ms: f64,
    /// Fraction of the remaining distance covered each frame.
    pub ease: f32,
    /// Targets are drawn from `[-range, range]`.
    pub range: f32,
}

impl WindTuning {
    pub const fn new(interval_ms: f64, ease: f32, range: f32) -> Self {
        Self {
            interval_ms,
            ease,
            range,
        }
    }
}

/// Slowly varying horizontal wind shared by every particle of one effect.
///
/// `wind` is never clamped: it only ever eases toward a target inside
/// `[-range, range]`, so it stays inside that band once it starts there.
#[derive(Clone, Debug, PartialEq)]
pub struct WindState {
    pub wind: f32,
    pub target: f32,
    pub last_change_ms: f64,
}

impl WindState {
    pub fn new(now_ms: f64) -> Self {
        Self {
            wind: 0.0,
            target: 0.0,
            last_change_ms: now_ms,
        }
    }

    /// Advance one frame; see [`update_wind`].
    #[inline]
    pub fn update<R: Rng + ?Sized>(&mut self, now_ms: f64, tuning: &WindTuning, rng: &mut R) -> f32 {
        update_wind(self, now_ms, tuning, rng)
    }
}

/// Resample the target once `interval_ms` has strictly elapsed, then ease the
/// current wind toward it. Returns the new wind value.
pub fn update_wind<R: Rng + ?Sized>(
    state: &mut WindState,
    now_ms: f64,
    tuning: &WindTuning,
    rng: &mut R,
) -> f32 {
    if now_ms - state.last_change_ms > tuning.interval_ms {
        state.target = (rng.gen::<f32>() * 2.0 - 1.0) * tuning.range;
        state.last_change_ms = now_ms;
    }
    state.wind = lerp(state.wind, state.target, clamp(tuning.ease, 0.0, 1.0));
    state.wind
}
