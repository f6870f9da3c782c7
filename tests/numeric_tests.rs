// Host-side tests for the pure numeric helpers.

use season_core::*;

#[test]
fn clamp_and_lerp_basics() {
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    assert!((lerp(2.0, 4.0, 0.5) - 3.0).abs() < 1e-6);
}

#[test]
fn clamp_tolerates_inverted_range() {
    // min wins rather than panicking
    assert_eq!(clamp(3.0, 2.0, 1.0), 2.0);
}

#[test]
fn density_scales_with_width() {
    assert_eq!(compute_density(1000.0, 2.5, 0, usize::MAX), 400);
    assert_eq!(compute_density(1000.0, 25.0, 0, usize::MAX), 40);
    // factors below one behave as one
    assert_eq!(compute_density(300.0, 0.5, 0, usize::MAX), 300);
}

#[test]
fn density_is_monotonic_and_bounded() {
    for &factor in &[0.5_f32, 1.0, 2.5, 6.0, 25.0, 40.0] {
        let mut prev = 0;
        for w in (0..4000).step_by(37) {
            let n = compute_density(w as f32, factor, 5, 120);
            if w > 0 {
                assert!(n >= prev, "density dropped at width {w} factor {factor}");
                assert!((5..=120).contains(&n));
            }
            prev = n;
        }
    }
}

#[test]
fn invalid_density_input_degrades_to_zero() {
    assert_eq!(compute_density(0.0, 2.5, 10, 100), 0);
    assert_eq!(compute_density(-100.0, 2.5, 10, 100), 0);
    assert_eq!(compute_density(1000.0, -3.0, 10, 100), 0);
    assert_eq!(compute_density(1000.0, 0.0, 10, 100), 0);
    assert_eq!(compute_density(f32::NAN, 2.5, 10, 100), 0);
    assert_eq!(compute_density(f32::INFINITY, 2.5, 10, 100), 0);
}

#[test]
fn density_table_applies_its_bounds() {
    let sakura = DensitySpec::new(25.0, 10, 60);
    assert_eq!(sakura.count(100.0), 10);
    assert_eq!(sakura.count(1000.0), 40);
    assert_eq!(sakura.count(10_000.0), 60);
}

#[test]
fn size_multiplier_is_clamped() {
    assert!((size_multiplier(768.0) - 1.0).abs() < 1e-6);
    assert!((size_multiplier(200.0) - 0.6).abs() < 1e-6);
    assert!((size_multiplier(4000.0) - 1.2).abs() < 1e-6);
    assert!((size_multiplier(576.0) - 0.75).abs() < 1e-6);
}

#[test]
fn spread_samples_stay_in_range() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let spread = Spread::new(0.6, 0.4);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let v = spread.sample(&mut rng);
        assert!(spread.contains(v), "{v} outside {spread:?}");
    }
    assert!((spread.max() - 1.0).abs() < 1e-6);
}
