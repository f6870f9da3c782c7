//! The shared per-frame loop every effect reduces to: clear, advance wind,
//! then draw, move and bound-check each particle in array order.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::Tick;
use crate::config::SeasonTuning;
use crate::kind::EffectKind;
use crate::numeric::size_multiplier;
use crate::surface::{Painter, Viewport};
use crate::wind::WindState;

/// What happens when a particle falls past the bottom margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallPolicy {
    /// Replace it with a freshly randomized particle above the viewport.
    Recycle,
    /// Move it back above the top edge, keeping its attributes.
    Wrap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryPolicy {
    pub fall: FallPolicy,
    /// Leaving one side re-enters from the other.
    pub wrap_x: bool,
}

/// Canvas extent plus the scale applied to particles created now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    pub width: f32,
    pub height: f32,
    pub size_multiplier: f32,
}

/// Values shared by every particle during one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub now_ms: f64,
    pub wind: f32,
}

pub trait Positioned {
    fn position(&self) -> Vec2;
    fn position_mut(&mut self) -> &mut Vec2;
}

/// One season's particle factory, shape renderer and kinematics.
pub trait ParticleModel {
    type Particle: Positioned;

    fn kind(&self) -> EffectKind;
    fn tuning(&self) -> &SeasonTuning;

    /// `anywhere` seeds over the whole viewport (initial fill); otherwise the
    /// particle starts above the top edge.
    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, area: &Area, anywhere: bool) -> Self::Particle;

    /// Paint one particle. The painter state is saved and restored around
    /// this call, so transforms may be applied freely.
    fn draw(&self, particle: &Self::Particle, frame: &Frame, painter: &mut dyn Painter);

    fn advance(&self, particle: &mut Self::Particle, frame: &Frame);
}

/// Object-safe face of a running particle field.
pub trait Animator {
    fn kind(&self) -> EffectKind;
    fn frame(&mut self, tick: Tick, painter: &mut dyn Painter);
    fn resize(&mut self, viewport: Viewport);
    fn particle_count(&self) -> usize;
    fn wind(&self) -> f32;
}

pub struct ParticleField<M: ParticleModel> {
    model: M,
    particles: Vec<M::Particle>,
    wind: WindState,
    area: Area,
    rng: StdRng,
}

impl<M: ParticleModel> ParticleField<M> {
    pub fn new(model: M, viewport: Viewport, now_ms: f64) -> Self {
        Self::with_rng(model, viewport, now_ms, StdRng::from_entropy())
    }

    /// The particle count is fixed here from the viewport width and never
    /// changes afterwards.
    pub fn with_rng(model: M, viewport: Viewport, now_ms: f64, mut rng: StdRng) -> Self {
        let tuning = *model.tuning();
        let area = Area {
            width: viewport.width.max(0.0),
            height: viewport.height.max(0.0),
            size_multiplier: if tuning.size_responsive {
                size_multiplier(viewport.width)
            } else {
                1.0
            },
        };
        let count = tuning.density.count(viewport.width);
        let particles = (0..count)
            .map(|_| model.spawn(&mut rng, &area, true))
            .collect();
        Self {
            model,
            particles,
            wind: WindState::new(now_ms),
            area,
            rng,
        }
    }

    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[inline]
    pub fn particles(&self) -> &[M::Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [M::Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn area(&self) -> Area {
        self.area
    }

    #[inline]
    pub fn wind_state(&self) -> &WindState {
        &self.wind
    }

    pub fn step(&mut self, tick: Tick, painter: &mut dyn Painter) {
        painter.clear();
        let tuning = *self.model.tuning();
        // Wind first so every particle sees the same value this tick.
        let wind = self.wind.update(tick.now_ms, &tuning.wind, &mut self.rng);
        let frame = Frame {
            now_ms: tick.now_ms,
            wind,
        };
        for particle in self.particles.iter_mut() {
            painter.save();
            self.model.draw(particle, &frame, painter);
            painter.restore();
            self.model.advance(particle, &frame);
            apply_bounds(&self.model, particle, &tuning, &self.area, &mut self.rng);
        }
    }

    /// Only the canvas extent and the size multiplier for future particles
    /// change; existing particles keep their size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.area.width = viewport.width.max(0.0);
        self.area.height = viewport.height.max(0.0);
        if self.model.tuning().size_responsive {
            self.area.size_multiplier = size_multiplier(viewport.width);
        }
    }
}

fn apply_bounds<M: ParticleModel>(
    model: &M,
    particle: &mut M::Particle,
    tuning: &SeasonTuning,
    area: &Area,
    rng: &mut StdRng,
) {
    let margin = tuning.margin;
    if particle.position().y > area.height + margin {
        match tuning.bounds.fall {
            FallPolicy::Recycle => {
                *particle = model.spawn(rng, area, false);
                return;
            }
            FallPolicy::Wrap => particle.position_mut().y = -margin,
        }
    }
    if tuning.bounds.wrap_x {
        let pos = particle.position_mut();
        if pos.x < -margin {
            pos.x = area.width + margin;
        } else if pos.x > area.width + margin {
            pos.x = -margin;
        }
    }
}

impl<M: ParticleModel> Animator for ParticleField<M> {
    fn kind(&self) -> EffectKind {
        self.model.kind()
    }

    fn frame(&mut self, tick: Tick, painter: &mut dyn Painter) {
        self.step(tick, painter);
    }

    fn resize(&mut self, viewport: Viewport) {
        ParticleField::resize(self, viewport);
    }

    fn particle_count(&self) -> usize {
        self.particles.len()
    }

    fn wind(&self) -> f32 {
        self.wind.wind
    }
}
