use crate::constants::*;
use crate::field::{BoundaryPolicy, FallPolicy};
use crate::kind::EffectKind;
use crate::numeric::DensitySpec;
use crate::wind::WindTuning;

/// Everything about an effect that is fixed for the life of its particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeasonTuning {
    pub wind: WindTuning,
    /// How strongly wind pushes a particle sideways.
    pub wind_weight: f32,
    pub density: DensitySpec,
    /// Distance past an edge before a particle is wrapped or recycled.
    pub margin: f32,
    pub bounds: BoundaryPolicy,
    /// New particles scale with the viewport width.
    pub size_responsive: bool,
}

impl SeasonTuning {
    pub fn defaults(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Rain => Self {
                wind: RAIN_WIND,
                wind_weight: RAIN_WIND_WEIGHT,
                density: RAIN_DENSITY,
                margin: RAIN_MARGIN,
                bounds: BoundaryPolicy {
                    fall: FallPolicy::Recycle,
                    wrap_x: false,
                },
                size_responsive: false,
            },
            EffectKind::Snow => Self {
                wind: SNOW_WIND,
                wind_weight: SNOW_WIND_WEIGHT,
                density: SNOW_DENSITY,
                margin: SNOW_MARGIN,
                bounds: BoundaryPolicy {
                    fall: FallPolicy::Wrap,
                    wrap_x: true,
                },
                size_responsive: true,
            },
            EffectKind::Sakura => Self {
                wind: SAKURA_WIND,
                wind_weight: SAKURA_WIND_WEIGHT,
                density: SAKURA_DENSITY,
                margin: SAKURA_MARGIN,
                bounds: BoundaryPolicy {
                    fall: FallPolicy::Recycle,
                    wrap_x: false,
                },
                size_responsive: true,
            },
            EffectKind::AutumnLeaves => Self {
                wind: AUTUMN_WIND,
                wind_weight: AUTUMN_WIND_WEIGHT,
                density: AUTUMN_DENSITY,
                margin: AUTUMN_MARGIN,
                bounds: BoundaryPolicy {
                    fall: FallPolicy::Recycle,
                    wrap_x: true,
                },
                size_responsive: true,
            },
            EffectKind::Willow => Self {
                wind: WILLOW_WIND,
                wind_weight: WILLOW_WIND_WEIGHT,
                density: WILLOW_DENSITY,
                margin: WILLOW_MARGIN,
                bounds: BoundaryPolicy {
                    fall: FallPolicy::Recycle,
                    wrap_x: true,
                },
                size_responsive: false,
            },
        }
    }
}

/// Registry-wide configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    /// Skip construction when the host reports reduced motion.
    pub respect_reduced_motion: bool,
    /// Fixed RNG seed; each effect mixes in its own kind. `None` draws from
    /// entropy.
    pub seed: Option<u64>,
    rain: SeasonTuning,
    snow: SeasonTuning,
    sakura: SeasonTuning,
    autumn_leaves: SeasonTuning,
    willow: SeasonTuning,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            respect_reduced_motion: true,
            seed: None,
            rain: SeasonTuning::defaults(EffectKind::Rain),
            snow: SeasonTuning::defaults(EffectKind::Snow),
            sakura: SeasonTuning::defaults(EffectKind::Sakura),
            autumn_leaves: SeasonTuning::defaults(EffectKind::AutumnLeaves),
            willow: SeasonTuning::defaults(EffectKind::Willow),
        }
    }
}

impl EffectConfig {
    pub fn tuning(&self, kind: EffectKind) -> &SeasonTuning {
        match kind {
            EffectKind::Rain => &self.rain,
            EffectKind::Snow => &self.snow,
            EffectKind::Sakura => &self.sakura,
            EffectKind::AutumnLeaves => &self.autumn_leaves,
            EffectKind::Willow => &self.willow,
        }
    }

    pub fn tuning_mut(&mut self, kind: EffectKind) -> &mut SeasonTuning {
        match kind {
            EffectKind::Rain => &mut self.rain,
            EffectKind::Snow => &mut self.snow,
            EffectKind::Sakura => &mut self.sakura,
            EffectKind::AutumnLeaves => &mut self.autumn_leaves,
            EffectKind::Willow => &mut self.willow,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tuning(mut self, kind: EffectKind, tuning: SeasonTuning) -> Self {
        *self.tuning_mut(kind) = tuning;
        self
    }

    /// Per-kind seed so effects sharing a config do not move in lockstep.
    pub fn seed_for(&self, kind: EffectKind) -> Option<u64> {
        self.seed
            .map(|seed| seed ^ (kind as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}
