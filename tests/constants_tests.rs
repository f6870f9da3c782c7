// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the pure page constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use season_core::constants::*;
use season_core::*;

#[test]
fn canvas_ids_and_style() {
    assert_eq!(canvas_id("rain"), "season-fx-rain");
    assert_eq!(
        canvas_id(EffectKind::AutumnLeaves.name()),
        "season-fx-autumn-leaves"
    );
    let style = canvas_style(CANVAS_Z_INDEX);
    assert!(style.contains("position:fixed"));
    assert!(style.contains("pointer-events:none"));
    assert!(style.ends_with("z-index:1;"));
}

#[test]
fn concurrency_gate() {
    assert!(!is_low_concurrency(0.0));
    assert!(is_low_concurrency(1.0));
    assert!(is_low_concurrency(2.0));
    assert!(!is_low_concurrency(4.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn size_multiplier_bounds_are_ordered() {
    assert!(SIZE_MULTIPLIER_MIN > 0.0);
    assert!(SIZE_MULTIPLIER_MIN < 1.0 && SIZE_MULTIPLIER_MAX > 1.0);
    assert!(SIZE_REFERENCE_WIDTH > 0.0);
}

#[test]
fn season_tables_are_consistent() {
    for kind in EffectKind::ALL {
        let tuning = SeasonTuning::defaults(kind);
        assert!(tuning.density.factor >= 1.0, "{kind}");
        assert!(tuning.density.min <= tuning.density.max, "{kind}");
        assert!(tuning.wind.interval_ms > 0.0, "{kind}");
        assert!(tuning.wind.ease > 0.0 && tuning.wind.ease <= 1.0, "{kind}");
        assert!(tuning.wind.range > 0.0, "{kind}");
        assert!(tuning.wind_weight > 0.0 && tuning.wind_weight <= 1.0, "{kind}");
        assert!(tuning.margin > 0.0, "{kind}");
    }
    assert_eq!(SeasonTuning::defaults(EffectKind::Snow).bounds.fall, FallPolicy::Wrap);
    assert!(!SeasonTuning::defaults(EffectKind::Rain).bounds.wrap_x);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shape_thresholds() {
    assert_eq!(SNOW_SPIKES, 6);
    assert!(SNOW_INNER_RATIO > 0.0 && SNOW_INNER_RATIO < 1.0);
    // both sides of the star threshold are reachable
    assert!(SNOW_SIZE.min < SNOW_STAR_MIN_SIZE && SNOW_SIZE.max() > SNOW_STAR_MIN_SIZE);
    assert!(SAKURA_SIZE.max() > SAKURA_VEIN_MIN_SIZE);
    assert!(AUTUMN_MAPLE_SHARE > 0.0 && AUTUMN_MAPLE_SHARE < 1.0);
}

#[test]
fn seeds_differ_per_kind() {
    let config = EffectConfig::default().with_seed(99);
    let seeds: Vec<u64> = EffectKind::ALL
        .iter()
        .filter_map(|k| config.seed_for(*k))
        .collect();
    assert_eq!(seeds.len(), 5);
    for (i, a) in seeds.iter().enumerate() {
        assert!(!seeds[i + 1..].contains(a));
    }
    assert_eq!(EffectConfig::default().seed_for(EffectKind::Rain), None);
}
