//! The five seasonal particle models.

mod autumn;
mod rain;
mod sakura;
mod snow;
mod willow;

pub use autumn::*;
pub use rain::*;
pub use sakura::*;
pub use snow::*;
pub use willow::*;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::color::Rgb;
use crate::config::EffectConfig;
use crate::field::{Animator, ParticleField};
use crate::kind::EffectKind;
use crate::numeric::Spread;
use crate::surface::Viewport;

/// Sinusoidal sideways motion layered over linear drift, phase-offset per
/// particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sway {
    pub amplitude: f32,
    /// Radians per millisecond.
    pub speed: f32,
    pub phase: f32,
}

impl Sway {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, amplitude: Spread, speed: Spread) -> Self {
        Self {
            amplitude: amplitude.sample(rng),
            speed: speed.sample(rng),
            phase: rng.gen::<f32>() * std::f32::consts::TAU,
        }
    }

    #[inline]
    fn angle(&self, now_ms: f64) -> f64 {
        now_ms * self.speed as f64 + self.phase as f64
    }

    /// Horizontal push this frame.
    #[inline]
    pub fn offset(&self, now_ms: f64) -> f32 {
        self.angle(now_ms).sin() as f32 * self.amplitude
    }

    /// Quarter-period companion of [`Sway::offset`] in `[-1, 1]`.
    #[inline]
    pub fn phase_cos(&self, now_ms: f64) -> f32 {
        self.angle(now_ms).cos() as f32
    }
}

#[inline]
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgb]) -> Rgb {
    palette.choose(rng).copied().unwrap_or([255, 255, 255])
}

/// Start `y` for a new particle: anywhere in the viewport for the initial
/// fill, otherwise strictly above the top edge by at least `clearance`.
#[inline]
pub(crate) fn spawn_y<R: Rng + ?Sized>(
    rng: &mut R,
    height: f32,
    anywhere: bool,
    clearance: f32,
    headroom: f32,
) -> f32 {
    if anywhere {
        rng.gen::<f32>() * height
    } else {
        -clearance.max(1.0) - rng.gen::<f32>() * headroom
    }
}

/// Build the particle field for `kind` from the viewport at hand.
pub fn animator_for(
    kind: EffectKind,
    config: &EffectConfig,
    viewport: Viewport,
    now_ms: f64,
) -> Box<dyn Animator> {
    let tuning = *config.tuning(kind);
    let rng = match config.seed_for(kind) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match kind {
        EffectKind::Rain => Box::new(ParticleField::with_rng(
            Rain::new(tuning),
            viewport,
            now_ms,
            rng,
        )),
        EffectKind::Snow => Box::new(ParticleField::with_rng(
            Snow::new(tuning),
            viewport,
            now_ms,
            rng,
        )),
        EffectKind::Sakura => Box::new(ParticleField::with_rng(
            Sakura::new(tuning),
            viewport,
            now_ms,
            rng,
        )),
        EffectKind::AutumnLeaves => Box::new(ParticleField::with_rng(
            AutumnLeaves::new(tuning),
            viewport,
            now_ms,
            rng,
        )),
        EffectKind::Willow => Box::new(ParticleField::with_rng(
            Willow::new(tuning),
            viewport,
            now_ms,
            rng,
        )),
    }
}
