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

/// Long narrow leaf outline bent sideways by `curvature * length`.
pub fn willow_outline(length: f32, width: f32, curvature: f32) -> Path {
    let half_len = length / 2.0;
    let half_w = width / 2.0;
    let bend = curvature * length;
    let mut path = Path::new();
    path.move_to(0.0, -half_len)
        .quad_to(bend + half_w, -half_len * 0.55, bend * 0.6 + half_w * 0.8, 0.0)
        .quad_to(bend * 0.2 + half_w * 0.7, half_len * 0.55, 0.0, half_len)
        .quad_to(bend * 0.2 - half_w * 0.7, half_len * 0.55, bend * 0.6 - half_w * 0.8, 0.0)
        .quad_to(bend - half_w, -half_len * 0.55, 0.0, -half_len)
        .close();
    path
}

pub fn willow_midrib(length: f32, curvature: f32) -> Path {
    let half_len = length / 2.0;
    let mut path = Path::new();
    path.move_to(0.0, -half_len)
        .quad_to(curvature * length, 0.0, 0.0, half_len);
    path
}

#[derive(Clone, Debug, PartialEq)]
pub struct WillowLeaf {
    pub pos: Vec2,
    pub length: f32,
    pub width: f32,
    pub curvature: f32,
    pub speed: f32,
    pub drift: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub sway: Sway,
    pub opacity: f32,
    pub color: Rgb,
}

impl Positioned for WillowLeaf {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.pos
    }
}

/// Slender summer willow leaves drifting on a soft breeze.
#[derive(Clone, Debug)]
pub struct Willow {
    tuning: SeasonTuning,
}

impl Willow {
    pub fn new(tuning: SeasonTuning) -> Self {
        Self { tuning }
    }
}

impl Default for Willow {
    fn default() -> Self {
        Self::new(SeasonTuning::defaults(EffectKind::Willow))
    }
}

impl ParticleModel for Willow {
    type Particle = WillowLeaf;

    fn kind(&self) -> EffectKind {
        EffectKind::Willow
    }

    fn tuning(&self) -> &SeasonTuning {
        &self.tuning
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, area: &Area, anywhere: bool) -> WillowLeaf {
        let length = WILLOW_LENGTH.sample(rng) * area.size_multiplier;
        let x = rng.gen::<f32>() * area.width;
        let y = spawn_y(rng, area.height, anywhere, length, WILLOW_HEADROOM);
        WillowLeaf {
            pos: Vec2::new(x, y),
            length,
            width: WILLOW_WIDTH.sample(rng) * area.size_multiplier,
            curvature: WILLOW_CURVATURE.sample(rng),
            speed: WILLOW_SPEED.sample(rng),
            drift: WILLOW_DRIFT.sample(rng),
            rotation: WILLOW_TILT.sample(rng),
            rotation_speed: WILLOW_SPIN.sample(rng),
            sway: Sway::sample(rng, WILLOW_SWAY_AMPLITUDE, WILLOW_SWAY_SPEED),
            opacity: WILLOW_OPACITY.sample(rng),
            color: pick(rng, &WILLOW_PALETTE),
        }
    }

    fn draw(&self, leaf: &WillowLeaf, _frame: &Frame, painter: &mut dyn Painter) {
        let fill = Rgba::new(leaf.color, leaf.opacity);
        painter.translate(leaf.pos.x, leaf.pos.y);
        painter.rotate(leaf.rotation);
        painter.draw(
            &willow_outline(leaf.length, leaf.width, leaf.curvature),
            &Paint::Fill(fill),
        );
        painter.draw(
            &willow_midrib(leaf.length, leaf.curvature),
            &Paint::Stroke {
                color: fill.darken(0.7).with_alpha(leaf.opacity * 0.5),
                width: 0.5,
            },
        );
    }

    fn advance(&self, leaf: &mut WillowLeaf, frame: &Frame) {
        let sway = leaf.sway.offset(frame.now_ms);
        leaf.pos.x += frame.wind * self.tuning.wind_weight + leaf.drift + sway;
        leaf.pos.y += leaf.speed;
        leaf.rotation += leaf.rotation_speed + sway * WILLOW_SWAY_SPIN;
    }
}
