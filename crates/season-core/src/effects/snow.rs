use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;

use super::{pick, spawn_y};
use crate::color::{Rgb, Rgba};
use crate::config::SeasonTuning;
use crate::constants::*;
use crate::field::{Area, Frame, ParticleModel, Positioned};
use crate::kind::EffectKind;
use crate::path::{Paint, Path};
use crate::surface::Painter;

#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub drift: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
    pub color: Rgb,
}

impl Snowflake {
    #[inline]
    pub fn shape(&self) -> FlakeShape {
        FlakeShape::for_size(self.size)
    }
}

impl Positioned for Snowflake {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// Size class of a flake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlakeShape {
    /// Filled circle of diameter `size`.
    Dot,
    /// Six-pointed star with outer radius `size / 2`.
    Star,
}

impl FlakeShape {
    #[inline]
    pub fn for_size(size: f32) -> Self {
        if size <= SNOW_STAR_MIN_SIZE {
            FlakeShape::Dot
        } else {
            FlakeShape::Star
        }
    }

    pub fn outline(self, size: f32) -> Path {
        match self {
            FlakeShape::Dot => dot(size / 2.0),
            FlakeShape::Star => star(SNOW_SPIKES, size / 2.0, size / 2.0 * SNOW_INNER_RATIO),
        }
    }
}

pub fn dot(radius: f32) -> Path {
    let mut path = Path::new();
    path.arc(0.0, 0.0, radius, 0.0, TAU).close();
    path
}

/// Closed polygon alternating outer and inner radius every `PI / spikes`,
/// first spike pointing up.
pub fn star(spikes: usize, outer: f32, inner: f32) -> Path {
    let spikes = spikes.max(2);
    let step = PI / spikes as f32;
    let mut angle = -PI / 2.0;
    let mut path = Path::new();
    for i in 0..spikes * 2 {
        let r = if i % 2 == 0 { outer } else { inner };
        let (x, y) = (angle.cos() * r, angle.sin() * r);
        if i == 0 {
            path.move_to(x, y);
        } else {
            path.line_to(x, y);
        }
        angle += step;
    }
    path.close();
    path
}

/// Falling flakes that wrap around every edge instead of being replaced.
#[derive(Clone, Debug)]
pub struct Snow {
    tuning: SeasonTuning,
}

impl Snow {
    pub fn new(tuning: SeasonTuning) -> Self {
        Self { tuning }
    }
}

impl Default for Snow {
    fn default() -> Self {
        Self::new(SeasonTuning::defaults(EffectKind::Snow))
    }
}

impl ParticleModel for Snow {
    type Particle = Snowflake;

    fn kind(&self) -> EffectKind {
        EffectKind::Snow
    }

    fn tuning(&self) -> &SeasonTuning {
        &self.tuning
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, area: &Area, anywhere: bool) -> Snowflake {
        let size = SNOW_SIZE.sample(rng) * area.size_multiplier;
        let x = rng.gen::<f32>() * area.width;
        let y = spawn_y(rng, area.height, anywhere, size, SNOW_HEADROOM);
        Snowflake {
            pos: Vec2::new(x, y),
            size,
            speed: SNOW_SPEED.sample(rng),
            drift: SNOW_DRIFT.sample(rng),
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: SNOW_SPIN.sample(rng),
            opacity: SNOW_OPACITY.sample(rng),
            color: pick(rng, &SNOW_PALETTE),
        }
    }

    fn draw(&self, flake: &Snowflake, _frame: &Frame, painter: &mut dyn Painter) {
        painter.translate(flake.pos.x, flake.pos.y);
        painter.rotate(flake.rotation);
        painter.draw(
            &flake.shape().outline(flake.size),
            &Paint::Fill(Rgba::new(flake.color, flake.opacity)),
        );
    }

    fn advance(&self, flake: &mut Snowflake, frame: &Frame) {
        flake.pos.x += frame.wind * self.tuning.wind_weight + flake.drift;
        flake.pos.y += flake.speed;
        flake.rotation += flake.rotation_speed;
    }
}
