// Host-side tests for the shared particle loop: seeding, boundaries,
// resize and per-frame painter discipline.

mod common;

use common::{Call, RecordingPainter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use season_core::constants::*;
use season_core::effects::*;
use season_core::*;

fn field<M: ParticleModel>(model: M, width: f32, height: f32, seed: u64) -> ParticleField<M> {
    ParticleField::with_rng(
        model,
        Viewport::new(width, height),
        0.0,
        StdRng::seed_from_u64(seed),
    )
}

fn tick(now_ms: f64) -> Tick {
    Tick {
        now_ms,
        delta_sec: 1.0 / 60.0,
    }
}

#[test]
fn rain_seeds_from_viewport_width() {
    let rain = field(Rain::default(), 1000.0, 800.0, 1);
    assert_eq!(rain.particles().len(), 400);
    for drop in rain.particles() {
        assert!(drop.pos.y >= 0.0 && drop.pos.y < 800.0);
        assert!(drop.pos.x >= 0.0 && drop.pos.x < 1000.0);
        assert!(RAIN_LENGTH.contains(drop.length));
        assert!(RAIN_SPEED.contains(drop.speed));
        assert_eq!(drop.color, RAIN_COLOR);
    }
}

#[test]
fn every_effect_sizes_its_field_from_density() {
    let config = EffectConfig::default().with_seed(3);
    for viewport in [Viewport::new(320.0, 640.0), Viewport::new(1920.0, 1080.0)] {
        for kind in EffectKind::ALL {
            let animator = animator_for(kind, &config, viewport, 0.0);
            assert_eq!(animator.kind(), kind);
            assert_eq!(
                animator.particle_count(),
                config.tuning(kind).density.count(viewport.width),
                "{kind} at {}px",
                viewport.width
            );
        }
    }
}

#[test]
fn seeded_fields_are_reproducible() {
    let a = field(Snow::default(), 900.0, 600.0, 42);
    let b = field(Snow::default(), 900.0, 600.0, 42);
    let c = field(Snow::default(), 900.0, 600.0, 43);
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn empty_viewport_has_no_particles_but_still_clears() {
    let mut rain = field(Rain::default(), 0.0, 0.0, 1);
    assert!(rain.particles().is_empty());
    let mut painter = RecordingPainter::default();
    rain.step(tick(16.0), &mut painter);
    assert_eq!(painter.calls, vec![Call::Clear]);
}

#[test]
fn recycled_drops_restart_above_the_viewport() {
    let mut rain = field(Rain::default(), 1000.0, 800.0, 5);
    let count = rain.particles().len();
    let mut now = 0.0;
    for _ in 0..600 {
        now += common::FRAME_MS;
        rain.step(tick(now), &mut RecordingPainter::default());
        assert_eq!(rain.particles().len(), count);
        for drop in rain.particles() {
            assert!(drop.pos.y <= 800.0 + RAIN_MARGIN);
        }
    }

    rain.particles_mut()[0].pos.y = 800.0 + RAIN_MARGIN + 1.0;
    now += common::FRAME_MS;
    rain.step(tick(now), &mut RecordingPainter::default());
    let drop = &rain.particles()[0];
    assert!(drop.pos.y < 0.0, "recycled drop at {}", drop.pos.y);
    assert!(drop.pos.y >= -(RAIN_LENGTH.max() + RAIN_HEADROOM));
    assert!(drop.pos.x >= 0.0 && drop.pos.x < 1000.0);
}

#[test]
fn foliage_recycles_above_the_viewport_every_cycle() {
    fn run<M: ParticleModel>(mut f: ParticleField<M>, margin: f32, max_headroom: f32) {
        let height = f.area().height;
        let count = f.particles().len();
        let mut recycled = 0;
        let mut now = 0.0;
        for _ in 0..5000 {
            let below: Vec<bool> = f
                .particles()
                .iter()
                .map(|p| p.position().y > height + margin - 10.0)
                .collect();
            now += common::FRAME_MS;
            f.step(tick(now), &mut RecordingPainter::default());
            assert_eq!(f.particles().len(), count);
            for (p, was_low) in f.particles().iter().zip(below) {
                let y = p.position().y;
                assert!(y <= height + margin);
                if was_low && y < 0.0 {
                    recycled += 1;
                    assert!(y >= -max_headroom);
                }
            }
        }
        assert!(recycled > 0, "{:?} never recycled", f.model().kind());
    }

    run(
        field(Sakura::default(), 800.0, 300.0, 21),
        SAKURA_MARGIN,
        SAKURA_SIZE.max() * SIZE_MULTIPLIER_MAX + SAKURA_HEADROOM,
    );
    run(
        field(AutumnLeaves::default(), 800.0, 300.0, 22),
        AUTUMN_MARGIN,
        AUTUMN_SIZE.max() * SIZE_MULTIPLIER_MAX + AUTUMN_HEADROOM,
    );
    run(
        field(Willow::default(), 800.0, 300.0, 23),
        WILLOW_MARGIN,
        WILLOW_LENGTH.max() + WILLOW_HEADROOM,
    );
}

#[test]
fn willow_spin_follows_its_sway() {
    let willow = Willow::default();
    let mut leaf = WillowLeaf {
        pos: glam::Vec2::new(100.0, 100.0),
        length: 30.0,
        width: 4.0,
        curvature: 0.1,
        speed: 0.5,
        drift: 0.0,
        rotation: 0.0,
        rotation_speed: 0.01,
        sway: Sway {
            amplitude: 2.0,
            speed: 0.0,
            phase: std::f32::consts::FRAC_PI_2,
        },
        opacity: 0.8,
        color: [120, 170, 80],
    };
    let frame = Frame {
        now_ms: 500.0,
        wind: 0.0,
    };
    willow.advance(&mut leaf, &frame);
    assert!((leaf.rotation - (0.01 + 2.0 * WILLOW_SWAY_SPIN)).abs() < 1e-5);
    assert!((leaf.pos.x - 102.0).abs() < 1e-4);
    assert!((leaf.pos.y - 100.5).abs() < 1e-5);
}

#[test]
fn rain_does_not_wrap_sideways() {
    let mut rain = field(Rain::default(), 1000.0, 800.0, 5);
    rain.particles_mut()[0].pos = glam::Vec2::new(-100.0, 100.0);
    rain.step(tick(16.0), &mut RecordingPainter::default());
    assert!(rain.particles()[0].pos.x < -RAIN_MARGIN);
}

#[test]
fn snow_wraps_instead_of_recycling() {
    let mut snow = field(Snow::default(), 800.0, 600.0, 9);
    let before = snow.particles()[0].clone();
    snow.particles_mut()[0].pos.y = 600.0 + SNOW_MARGIN + 1.0;
    snow.step(tick(16.0), &mut RecordingPainter::default());
    let after = &snow.particles()[0];
    assert_eq!(after.pos.y, -SNOW_MARGIN);
    assert_eq!(after.size, before.size);
    assert_eq!(after.color, before.color);
}

#[test]
fn sideways_wrap_round_trips() {
    fn check<M: ParticleModel>(mut f: ParticleField<M>, margin: f32) {
        let width = f.area().width;
        {
            let pos = f.particles_mut()[0].position_mut();
            pos.x = -margin - 5.0;
            pos.y = 100.0;
        }
        {
            let pos = f.particles_mut()[1].position_mut();
            pos.x = width + margin + 5.0;
            pos.y = 100.0;
        }
        // well inside the first wind interval, so the wind is still zero
        f.step(tick(16.0), &mut RecordingPainter::default());
        assert_eq!(f.particles()[0].position().x, width + margin);
        assert_eq!(f.particles()[1].position().x, -margin);
    }

    check(field(Snow::default(), 800.0, 600.0, 1), SNOW_MARGIN);
    check(field(AutumnLeaves::default(), 800.0, 600.0, 1), AUTUMN_MARGIN);
    check(field(Willow::default(), 800.0, 600.0, 1), WILLOW_MARGIN);
}

#[test]
fn resize_only_affects_new_particles() {
    let mut sakura = field(Sakura::default(), 768.0, 600.0, 11);
    let count = sakura.particles().len();
    assert_eq!(count, 30);
    assert_eq!(sakura.area().size_multiplier, 1.0);
    let sizes: Vec<f32> = sakura.particles().iter().map(|p| p.size).collect();

    sakura.resize(Viewport::new(1536.0, 900.0));
    assert_eq!(sakura.particles().len(), count);
    assert_eq!(sakura.area().width, 1536.0);
    assert_eq!(sakura.area().height, 900.0);
    assert_eq!(sakura.area().size_multiplier, SIZE_MULTIPLIER_MAX);
    let unchanged: Vec<f32> = sakura.particles().iter().map(|p| p.size).collect();
    assert_eq!(sizes, unchanged);

    sakura.particles_mut()[0].pos.y = 900.0 + SAKURA_MARGIN + 5.0;
    sakura.step(tick(16.0), &mut RecordingPainter::default());
    let fresh = &sakura.particles()[0];
    assert!(fresh.pos.y < 0.0);
    assert!(fresh.size >= SAKURA_SIZE.min * SIZE_MULTIPLIER_MAX - 1e-4);
    assert_eq!(sakura.particles().len(), count);
}

#[test]
fn rain_ignores_size_multiplier() {
    let rain = field(Rain::default(), 2000.0, 800.0, 1);
    assert_eq!(rain.area().size_multiplier, 1.0);
    let snow = field(Snow::default(), 300.0, 800.0, 1);
    assert_eq!(snow.area().size_multiplier, SIZE_MULTIPLIER_MIN);
}

#[test]
fn each_step_clears_once_and_balances_save_restore() {
    let mut snow = field(Snow::default(), 768.0, 600.0, 2);
    let n = snow.particles().len();
    let mut painter = RecordingPainter::default();
    snow.step(tick(16.0), &mut painter);

    assert_eq!(painter.calls.first(), Some(&Call::Clear));
    assert_eq!(painter.count(|c| *c == Call::Clear), 1);
    assert_eq!(painter.count(|c| *c == Call::Save), n);
    assert_eq!(painter.count(|c| *c == Call::Restore), n);
    assert_eq!(painter.draws().len(), n);

    let mut depth = 0i32;
    for call in &painter.calls {
        match call {
            Call::Save => depth += 1,
            Call::Restore => depth -= 1,
            Call::Draw(..) | Call::Translate(..) | Call::Rotate(_) => assert_eq!(depth, 1),
            Call::Clear => assert_eq!(depth, 0),
        }
        assert!((0..=1).contains(&depth));
    }
}

#[test]
fn wind_is_shared_and_bounded() {
    let mut autumn = field(AutumnLeaves::default(), 1000.0, 800.0, 4);
    let range = AUTUMN_WIND.range;
    let mut now = 0.0;
    for _ in 0..2000 {
        now += common::FRAME_MS;
        autumn.step(tick(now), &mut RecordingPainter::default());
        assert!(autumn.wind().abs() <= range + 1e-4);
    }
    assert!(autumn.wind_state().last_change_ms > 0.0);
}
