use glam::Vec2;
use rand::Rng;

use super::spawn_y;
use crate::color::{Rgb, Rgba};
use crate::config::SeasonTuning;
use crate::constants::*;
use crate::field::{Area, Frame, ParticleModel, Positioned};
use crate::kind::EffectKind;
use crate::path::{Paint, Path};
use crate::surface::Painter;

#[derive(Clone, Debug, PartialEq)]
pub struct Raindrop {
    pub pos: Vec2,
    pub length: f32,
    pub speed: f32,
    pub drift: f32,
    pub width: f32,
    pub opacity: f32,
    pub color: Rgb,
}

impl Positioned for Raindrop {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// Straight streaks leaning with the wind. Recycled drops come back at a new
/// random column.
#[derive(Clone, Debug)]
pub struct Rain {
    tuning: SeasonTuning,
}

impl Rain {
    pub fn new(tuning: SeasonTuning) -> Self {
        Self { tuning }
    }
}

impl Default for Rain {
    fn default() -> Self {
        Self::new(SeasonTuning::defaults(EffectKind::Rain))
    }
}

/// A single round-capped segment from the drop's head down its length.
pub fn streak(length: f32, lean: f32) -> Path {
    let mut path = Path::new();
    path.move_to(0.0, 0.0).line_to(lean, length);
    path
}

impl ParticleModel for Rain {
    type Particle = Raindrop;

    fn kind(&self) -> EffectKind {
        EffectKind::Rain
    }

    fn tuning(&self) -> &SeasonTuning {
        &self.tuning
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, area: &Area, anywhere: bool) -> Raindrop {
        let length = RAIN_LENGTH.sample(rng);
        let x = rng.gen::<f32>() * area.width;
        let y = spawn_y(rng, area.height, anywhere, length, RAIN_HEADROOM);
        Raindrop {
            pos: Vec2::new(x, y),
            length,
            speed: RAIN_SPEED.sample(rng),
            drift: RAIN_DRIFT.sample(rng),
            width: RAIN_WIDTH.sample(rng),
            opacity: RAIN_OPACITY.sample(rng),
            color: RAIN_COLOR,
        }
    }

    fn draw(&self, drop: &Raindrop, frame: &Frame, painter: &mut dyn Painter) {
        painter.translate(drop.pos.x, drop.pos.y);
        painter.draw(
            &streak(drop.length, frame.wind * RAIN_LEAN),
            &Paint::Stroke {
                color: Rgba::new(drop.color, drop.opacity),
                width: drop.width,
            },
        );
    }

    fn advance(&self, drop: &mut Raindrop, frame: &Frame) {
        drop.pos.x += frame.wind * self.tuning.wind_weight + drop.drift;
        drop.pos.y += drop.speed;
    }
}
