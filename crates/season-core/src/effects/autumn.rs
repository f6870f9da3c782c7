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

/// Palmate maple outline in units of `size / 15`: tip, six right-side
/// vertices, stem point, then the left side mirrored.
const MAPLE_POINTS: [(f32, f32); 14] = [
    (0.0, -7.5),
    (1.5, -4.0),
    (4.5, -5.5),
    (3.5, -2.0),
    (7.0, -1.5),
    (5.0, 1.0),
    (1.5, 2.0),
    (0.0, 7.0),
    (-1.5, 2.0),
    (-5.0, 1.0),
    (-7.0, -1.5),
    (-3.5, -2.0),
    (-4.5, -5.5),
    (-1.5, -4.0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafVariant {
    Maple,
    Ginkgo,
}

impl LeafVariant {
    pub fn outline(self, size: f32) -> Path {
        match self {
            LeafVariant::Maple => maple_outline(size),
            LeafVariant::Ginkgo => ginkgo_outline(size),
        }
    }

    pub fn palette(self) -> &'static [Rgb] {
        match self {
            LeafVariant::Maple => &AUTUMN_MAPLE_PALETTE,
            LeafVariant::Ginkgo => &AUTUMN_GINKGO_PALETTE,
        }
    }
}

pub fn maple_outline(size: f32) -> Path {
    let s = size / 15.0;
    let mut path = Path::new();
    for (i, &(x, y)) in MAPLE_POINTS.iter().enumerate() {
        if i == 0 {
            path.move_to(x * s, y * s);
        } else {
            path.line_to(x * s, y * s);
        }
    }
    path.close();
    path
}

pub fn maple_stem(size: f32) -> Path {
    let s = size / 15.0;
    let mut path = Path::new();
    path.move_to(0.0, 7.0 * s).line_to(0.0, 10.0 * s);
    path
}

/// Fan of four quadratic curves in units of `size / 20`, stem at +y.
pub fn ginkgo_outline(size: f32) -> Path {
    let s = size / 20.0;
    let mut path = Path::new();
    path.move_to(0.0, 10.0 * s)
        .quad_to(-2.0 * s, 2.0 * s, -10.0 * s, -4.0 * s)
        .quad_to(-5.0 * s, -10.0 * s, 0.0, -8.0 * s)
        .quad_to(5.0 * s, -10.0 * s, 10.0 * s, -4.0 * s)
        .quad_to(2.0 * s, 2.0 * s, 0.0, 10.0 * s)
        .close();
    path
}

/// Wedge cut out of the middle of the fan's rim.
pub fn ginkgo_notch(size: f32) -> Path {
    let s = size / 20.0;
    let mut path = Path::new();
    path.move_to(0.0, -3.0 * s)
        .line_to(-1.5 * s, -9.5 * s)
        .line_to(1.5 * s, -9.5 * s)
        .close();
    path
}

#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub drift: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub sway: Sway,
    /// Scales the vertical flutter; 0 falls steadily.
    pub turbulence: f32,
    pub opacity: f32,
    pub color: Rgb,
    pub variant: LeafVariant,
}

impl Positioned for Leaf {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// Maple and ginkgo leaves: recycled at the bottom, wrapped at the sides.
#[derive(Clone, Debug)]
pub struct AutumnLeaves {
    tuning: SeasonTuning,
}

impl AutumnLeaves {
    pub fn new(tuning: SeasonTuning) -> Self {
        Self { tuning }
    }
}

impl Default for AutumnLeaves {
    fn default() -> Self {
        Self::new(SeasonTuning::defaults(EffectKind::AutumnLeaves))
    }
}

impl ParticleModel for AutumnLeaves {
    type Particle = Leaf;

    fn kind(&self) -> EffectKind {
        EffectKind::AutumnLeaves
    }

    fn tuning(&self) -> &SeasonTuning {
        &self.tuning
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, area: &Area, anywhere: bool) -> Leaf {
        let variant = if rng.gen::<f32>() < AUTUMN_MAPLE_SHARE {
            LeafVariant::Maple
        } else {
            LeafVariant::Ginkgo
        };
        let size = AUTUMN_SIZE.sample(rng) * area.size_multiplier;
        let x = rng.gen::<f32>() * area.width;
        let y = spawn_y(rng, area.height, anywhere, size, AUTUMN_HEADROOM);
        Leaf {
            pos: Vec2::new(x, y),
            size,
            speed: AUTUMN_SPEED.sample(rng),
            drift: AUTUMN_DRIFT.sample(rng),
            rotation: rng.gen::<f32>() * TAU,
            rotation_speed: AUTUMN_SPIN.sample(rng),
            sway: Sway::sample(rng, AUTUMN_SWAY_AMPLITUDE, AUTUMN_SWAY_SPEED),
            turbulence: AUTUMN_TURBULENCE.sample(rng),
            opacity: AUTUMN_OPACITY.sample(rng),
            color: pick(rng, variant.palette()),
            variant,
        }
    }

    fn draw(&self, leaf: &Leaf, _frame: &Frame, painter: &mut dyn Painter) {
        let fill = Rgba::new(leaf.color, leaf.opacity);
        painter.translate(leaf.pos.x, leaf.pos.y);
        painter.rotate(leaf.rotation);
        painter.draw(&leaf.variant.outline(leaf.size), &Paint::Fill(fill));
        match leaf.variant {
            LeafVariant::Maple => painter.draw(
                &maple_stem(leaf.size),
                &Paint::Stroke {
                    color: fill.darken(0.6),
                    width: 1.0,
                },
            ),
            LeafVariant::Ginkgo => painter.draw(&ginkgo_notch(leaf.size), &Paint::Erase),
        }
    }

    fn advance(&self, leaf: &mut Leaf, frame: &Frame) {
        let sway = leaf.sway.offset(frame.now_ms);
        leaf.pos.x += frame.wind * self.tuning.wind_weight + leaf.drift + sway;
        leaf.pos.y += leaf.speed * (1.0 + leaf.turbulence * leaf.sway.phase_cos(frame.now_ms));
        leaf.rotation += leaf.rotation_speed;
    }
}
