use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::{pick, spawn_y, Sway};
use crate::color::{Rgb, Rgba};
use crate::config::SeasonTuning;
use crate::constants::*;
use crate::field::{Area, Frame, ParticleModel, Positioned};
use crate::kind::EffectKind;
use crate::path::{Paint, Path};
use crate::surface::Painter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetalVariant {
    /// Classic petal with a notch at the tip.
    Notched,
    /// Broad oval.
    Round,
    /// Narrow teardrop.
    Slender,
}

impl PetalVariant {
    pub const ALL: [PetalVariant; 3] = [
        PetalVariant::Notched,
        PetalVariant::Round,
        PetalVariant::Slender,
    ];

    /// Closed outline for a petal of `size`, base at +y, tip at -y.
    pub fn outline(self, size: f32) -> Path {
        let s = size / 10.0;
        let mut path = Path::new();
        match self {
            PetalVariant::Notched => {
                path.move_to(0.0, 5.0 * s)
                    .cubic_to(-4.0 * s, 3.0 * s, -5.0 * s, -2.0 * s, -2.0 * s, -5.0 * s)
                    .quad_to(-1.0 * s, -6.0 * s, 0.0, -4.5 * s)
                    .quad_to(1.0 * s, -6.0 * s, 2.0 * s, -5.0 * s)
                    .cubic_to(5.0 * s, -2.0 * s, 4.0 * s, 3.0 * s, 0.0, 5.0 * s);
            }
            PetalVariant::Round => {
                path.move_to(0.0, 5.0 * s)
                    .cubic_to(-5.0 * s, 2.0 * s, -4.0 * s, -4.0 * s, 0.0, -5.0 * s)
                    .cubic_to(4.0 * s, -4.0 * s, 5.0 * s, 2.0 * s, 0.0, 5.0 * s);
            }
            PetalVariant::Slender => {
                path.move_to(0.0, 6.0 * s)
                    .quad_to(-4.0 * s, 1.0 * s, -2.5 * s, -3.5 * s)
                    .cubic_to(-1.5 * s, -6.0 * s, 1.5 * s, -6.0 * s, 2.5 * s, -3.5 * s)
                    .quad_to(4.0 * s, 1.0 * s, 0.0, 6.0 * s);
            }
        }
        path.close();
        path
    }
}

/// Three short strokes fanning from the base toward the tip.
pub fn petal_veins(size: f32) -> [Path; 3] {
    let s = size / 10.0;
    let vein = |tx: f32, ty: f32| {
        let mut path = Path::new();
        path.move_to(0.0, 4.0 * s).line_to(tx * s, ty * s);
        path
    };
    [vein(-1.5, -3.0), vein(0.0, -3.5), vein(1.5, -3.0)]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Petal {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub drift: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub sway: Sway,
    pub opacity: f32,
    pub color: Rgb,
    pub variant: PetalVariant,
}

impl Positioned for Petal {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// Cherry-blossom petals tumbling and swaying on a strong, gusty wind.
#[derive(Clone, Debug)]
pub struct Sakura {
    tuning: SeasonTuning,
}

impl Sakura {
    pub fn new(tuning: SeasonTuning) -> Self {
        Self { tuning }
    }
}

impl Default for Sakura {
    fn default() -> Self {
        Self::new(SeasonTuning::defaults(EffectKind::Sakura))
    }
}

impl ParticleModel for Sakura {
    type Particle = Petal;

    fn kind(&self) -> EffectKind {
        EffectKind::Sakura
    }

    fn tuning(&self) -> &SeasonTuning {
        &self.tuning
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, area: &Area, anywhere: bool) -> Petal {
        let size = SAKURA_SIZE.sample(rng) * area.size_multiplier;
        let x = rng.gen::<f32>() * area.width;
        let y = spawn_y(rng, area.height, anywhere, size, SAKURA_HEADROOM);
        Petal {
            pos: Vec2::new(x, y),
            size,
            speed: SAKURA_SPEED.sample(rng),
            drift: SAKURA_DRIFT.sample(rng),
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: SAKURA_SPIN.sample(rng),
            sway: Sway::sample(rng, SAKURA_SWAY_AMPLITUDE, SAKURA_SWAY_SPEED),
            opacity: SAKURA_OPACITY.sample(rng),
            color: pick(rng, &SAKURA_PALETTE),
            variant: PetalVariant::ALL[rng.gen_range(0..PetalVariant::ALL.len())],
        }
    }

    fn draw(&self, petal: &Petal, _frame: &Frame, painter: &mut dyn Painter) {
        let fill = Rgba::new(petal.color, petal.opacity);
        painter.translate(petal.pos.x, petal.pos.y);
        painter.rotate(petal.rotation);
        painter.draw(&petal.variant.outline(petal.size), &Paint::Fill(fill));
        if petal.size > SAKURA_VEIN_MIN_SIZE {
            let vein = Paint::Stroke {
                color: fill.darken(0.8).with_alpha(petal.opacity * 0.3),
                width: 0.5,
            };
            for path in petal_veins(petal.size).iter() {
                painter.draw(path, &vein);
            }
        }
    }

    fn advance(&self, petal: &mut Petal, frame: &Frame) {
        let sway = petal.sway.offset(frame.now_ms);
        petal.pos.x += frame.wind * self.tuning.wind_weight + petal.drift + sway;
        petal.pos.y += petal.speed + petal.sway.phase_cos(frame.now_ms) * SAKURA_FLUTTER;
        petal.rotation += petal.rotation_speed;
    }
}
