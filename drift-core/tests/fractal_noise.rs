//! Fractal noise regression tests.
//!
//! Golden samples live in `test_assets/golden_noise.json`: for each seed and
//! parameter set, `[x, y, t, expected]` tuples of `Simplex::noise`.

use std::thread;

use drift_core::{Heightmap, NoiseConfig, Simplex};
use drift_utils::random::{LegacyRandom, Random, RandomFn};
use serde::Deserialize;

const TOLERANCE: f64 = 1e-9;

#[derive(Deserialize)]
struct GoldenFile {
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    seed: u64,
    amplitude: f64,
    distrib: f64,
    scale: f64,
    octaves: u32,
    samples: Vec<[f64; 4]>,
}

fn load_golden() -> GoldenFile {
    let json_str = include_str!("../test_assets/golden_noise.json");
    serde_json5::from_str(json_str).expect("Failed to parse golden_noise.json")
}

fn identity_field(config: &NoiseConfig) -> Simplex {
    Simplex::new(config, &mut RandomFn(|| 0.0))
}

#[test]
fn test_golden_samples() {
    let golden = load_golden();
    assert!(!golden.cases.is_empty());

    for case in golden.cases {
        let config = NoiseConfig::new()
            .with_amplitude(case.amplitude)
            .with_distrib(case.distrib)
            .with_scale(case.scale)
            .with_octaves(case.octaves);
        let field = Simplex::from_seed(&config, case.seed);

        for [x, y, t, expected] in case.samples {
            let actual = field.noise(x, y, t);
            assert!(
                (actual - expected).abs() < TOLERANCE,
                "seed {} octaves {} scale {}: noise({x}, {y}, {t}) = {actual}, expected {expected}",
                case.seed,
                case.octaves,
                case.scale,
            );
        }
    }
}

#[test]
fn test_identity_permutation_scenario() {
    let config = NoiseConfig::new()
        .with_octaves(2)
        .with_scale(0.5)
        .with_amplitude(0.8)
        .with_distrib(1.0);
    let field = identity_field(&config);

    let table = field.table();
    for k in 0..512 {
        assert_eq!(usize::from(table.perm()[k]), k & 255);
        assert_eq!(usize::from(table.perm_mod12()[k]), (k & 255) % 12);
    }

    let v = field.noise(1.0, 1.0, 1.0);
    assert!((v - 0.424_138_106_995_884_83).abs() < 1e-6, "got {v}");
}

#[test]
fn test_raw_noise_at_origin() {
    let field = identity_field(&NoiseConfig::new());
    assert!(field.raw_noise(0.0, 0.0, 0.0).abs() < 1e-6);
    assert!((field.noise(0.0, 0.0, 0.0) - 0.5).abs() < 1e-6);
}

#[test]
fn test_raw_noise_range() {
    let field = Simplex::from_seed(&NoiseConfig::new(), 2024);
    let mut coords = LegacyRandom::from_seed(77);
    for _ in 0..10_000 {
        let x = coords.next_f64() * 2000.0 - 1000.0;
        let y = coords.next_f64() * 2000.0 - 1000.0;
        let t = coords.next_f64() * 10.0;
        let v = field.raw_noise(x, y, t);
        assert!((-1.01..=1.01).contains(&v), "raw_noise({x}, {y}, {t}) = {v}");
    }
}

#[test]
fn test_octave_contributions_shrink() {
    let base = NoiseConfig::new().with_scale(0.03);
    let fields: Vec<Simplex> = (1..=8)
        .map(|octaves| Simplex::from_seed(&base.with_octaves(octaves), 5))
        .collect();

    for (x, y, t) in [(13.0, 27.0, 0.0), (-140.5, 9.25, 0.4), (512.0, 256.0, 3.0)] {
        let values: Vec<f64> = fields.iter().map(|f| f.noise(x, y, t)).collect();
        for (n, pair) in values.windows(2).enumerate() {
            // Octave n+1 (0-based) adds raw * 0.5^(n+1) to the sum, halved by the remap.
            let bound = 1.01 * 0.5_f64.powi(n as i32 + 2);
            let delta = (pair[1] - pair[0]).abs();
            assert!(
                delta <= bound,
                "adding octave {} at ({x}, {y}, {t}) moved the value by {delta} > {bound}",
                n + 2
            );
        }
    }
}

#[test]
fn test_continuity() {
    let field = Simplex::from_seed(&NoiseConfig::new().with_scale(0.1).with_octaves(4), 31);
    let eps = 1e-5;
    for i in 0..5000 {
        let x = f64::from(i) * 0.0137 - 30.0;
        let y = f64::from(i) * 0.0071 + 2.0;
        let t = 0.3;
        let delta = (field.noise(x + eps, y, t) - field.noise(x, y, t)).abs();
        assert!(delta < 1e-4, "discontinuity of {delta} at ({x}, {y})");
    }
}

#[test]
fn test_distrib_biases_output() {
    let low = Simplex::from_seed(&NoiseConfig::new().with_scale(0.05).with_distrib(3.0), 12);
    let linear = Simplex::from_seed(&NoiseConfig::new().with_scale(0.05), 12);
    let high = Simplex::from_seed(&NoiseConfig::new().with_scale(0.05).with_distrib(0.3), 12);

    let mean = |field: &Simplex| {
        let map = Heightmap::sample(field, 48, 48, 0.0);
        map.values().iter().sum::<f64>() / map.values().len() as f64
    };
    let (low, linear, high) = (mean(&low), mean(&linear), mean(&high));
    assert!(low < linear && linear < high, "{low} < {linear} < {high}");
}

#[test]
fn test_distrib_on_overshooting_sum() {
    // Six full-amplitude octaves push the sum below -1 at this point.
    let base = NoiseConfig::new().with_scale(0.02).with_octaves(6);
    let linear = Simplex::from_seed(&base, 0).noise(1.0, 1.0, 1.0);
    assert!(linear < 0.0, "expected an overshoot, got {linear}");
    assert!((linear - -0.151_664_177_804_884_17).abs() < TOLERANCE);

    let noise_with = |distrib: f64| {
        Simplex::from_seed(&base.with_distrib(distrib), 0).noise(1.0, 1.0, 1.0)
    };

    // Integral exponents take the plain power of the negative base.
    let squared = noise_with(2.0);
    assert!((squared - linear.powi(2)).abs() < 1e-15, "got {squared}");
    assert!(squared > 0.0);
    let cubed = noise_with(3.0);
    assert!((cubed - linear.powi(3)).abs() < 1e-15, "got {cubed}");

    // Fractional exponents mirror through zero instead of producing NaN.
    let fractional = noise_with(1.5);
    assert!(fractional.is_finite());
    assert!((fractional - -(-linear).powf(1.5)).abs() < 1e-15, "got {fractional}");
}

#[test]
fn test_same_seed_same_field() {
    let config = NoiseConfig::new().with_scale(0.2).with_octaves(3);
    let a = Simplex::from_seed(&config, 99);
    let b = Simplex::from_seed(&config, 99);
    let c = Simplex::from_seed(&config, 100);

    assert_eq!(a.table(), b.table());
    assert_ne!(a.table(), c.table());
    assert_eq!(
        Heightmap::sample(&a, 16, 16, 1.0),
        Heightmap::sample(&b, 16, 16, 1.0)
    );
}

#[test]
fn test_concurrent_sampling_matches_single_thread() {
    let field = Simplex::from_seed(&NoiseConfig::new().with_scale(0.07).with_octaves(5), 3);
    let expected: Vec<f64> = (0..256).map(|i| field.noise(f64::from(i), 1.5, 0.25)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (0..256)
                        .map(|i| field.noise(f64::from(i), 1.5, 0.25))
                        .collect::<Vec<f64>>()
                })
            })
            .collect();
        for handle in handles {
            let actual = handle.join().expect("sampling thread panicked");
            assert!(
                actual.iter().zip(&expected).all(|(a, e)| a.to_bits() == e.to_bits()),
                "threads disagree"
            );
        }
    });
}

#[test]
fn test_config_from_json5() {
    let config: NoiseConfig = serde_json5::from_str(
        r"{
            // comments and trailing commas are fine
            amplitude: 0.8,
            scale: 0.5,
            octaves: 2,
        }",
    )
    .expect("valid json5");
    assert_eq!(config.amplitude, Some(0.8));
    assert_eq!(config.distrib, None);
    assert_eq!(config.octaves, Some(2));

    let params = config.resolve();
    assert!((params.distrib - 1.0).abs() < f64::EPSILON);

    let unknown: Result<NoiseConfig, _> = serde_json5::from_str("{ persistence: 0.5 }");
    assert!(unknown.is_err());
}

#[test]
fn test_non_finite_input_propagates() {
    let field = Simplex::from_seed(&NoiseConfig::new().with_octaves(3), 1);
    assert!(field.noise(f64::NAN, 0.0, 0.0).is_nan());
    assert!(!field.noise(f64::INFINITY, 0.0, 0.0).is_finite());
}
