use rand::Rng;

use crate::constants::{SIZE_MULTIPLIER_MAX, SIZE_MULTIPLIER_MIN, SIZE_REFERENCE_WIDTH};

/// Restrict `value` to `[min, max]`. Unlike `f32::clamp` this never panics on
/// an inverted range; `min` wins.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Particle count bounds for one effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensitySpec {
    /// Viewport pixels per particle.
    pub factor: f32,
    pub min: usize,
    pub max: usize,
}

impl DensitySpec {
    pub const fn new(factor: f32, min: usize, max: usize) -> Self {
        Self { factor, min, max }
    }

    #[inline]
    pub fn count(&self, viewport_width: f32) -> usize {
        compute_density(viewport_width, self.factor, self.min, self.max)
    }
}

/// `clamp(floor(width / max(1, factor)), min, max)`.
///
/// Non-positive or non-finite inputs are treated as a misconfiguration and
/// produce no particles at all, whatever `min` says.
pub fn compute_density(viewport_width: f32, factor: f32, min: usize, max: usize) -> usize {
    if !viewport_width.is_finite() || !factor.is_finite() || viewport_width <= 0.0 || factor <= 0.0
    {
        return 0;
    }
    let raw = (viewport_width / factor.max(1.0)).floor() as usize;
    raw.min(max).max(min.min(max))
}

/// Device-width scale applied to newly created particles of size-responsive
/// effects.
#[inline]
pub fn size_multiplier(viewport_width: f32) -> f32 {
    clamp(
        viewport_width / SIZE_REFERENCE_WIDTH,
        SIZE_MULTIPLIER_MIN,
        SIZE_MULTIPLIER_MAX,
    )
}

/// A `min + random * span` attribute range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spread {
    pub min: f32,
    pub span: f32,
}

impl Spread {
    pub const fn new(min: f32, span: f32) -> Self {
        Self { min, span }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * self.span
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.min + self.span
    }

    /// Inclusive on both ends to absorb float rounding at the top.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min.min(self.max()) && value <= self.min.max(self.max())
    }
}
