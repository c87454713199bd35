//! Octave layering (fractal Brownian motion) over 3D simplex noise.
//!
//! Each octave samples the raw noise at twice the spatial frequency and half
//! the amplitude of the previous one. The time axis is never rescaled, so
//! stepping `t` animates every octave at the same rate.

use drift_utils::noise::{PermutationTable, SimplexNoise};
use drift_utils::random::{LegacyRandom, Random, ThreadRandom};

use crate::config::{NoiseConfig, NoiseParams};

/// Amplitude factor between successive octaves.
pub const PERSISTENCE: f64 = 0.5;
/// Frequency factor between successive octaves.
pub const LACUNARITY: f64 = 2.0;

/// A fractal simplex noise field.
///
/// Holds its own permutation tables and resolved parameters, nothing else.
/// Every method takes `&self`, so one instance can be sampled from many
/// threads at once.
#[derive(Debug, Clone)]
pub struct Simplex {
    noise: SimplexNoise,
    params: NoiseParams,
}

impl Simplex {
    /// Creates a field from a config, shuffling its tables with `random`.
    ///
    /// `random` is drawn from exactly 255 times and not retained.
    #[must_use]
    pub fn new<R: Random + ?Sized>(config: &NoiseConfig, random: &mut R) -> Self {
        Self::from_params(config.resolve(), random)
    }

    /// Creates a field from already resolved parameters.
    ///
    /// The parameters are passed through [`NoiseParams::sanitized`].
    #[must_use]
    pub fn from_params<R: Random + ?Sized>(params: NoiseParams, random: &mut R) -> Self {
        let params = params.sanitized();
        log::debug!(
            "Creating simplex field: amplitude={} distrib={} scale={} octaves={}",
            params.amplitude,
            params.distrib,
            params.scale,
            params.octaves
        );
        Self {
            noise: SimplexNoise::new(random),
            params,
        }
    }

    /// Creates a reproducible field from an integer seed.
    #[must_use]
    pub fn from_seed(config: &NoiseConfig, seed: u64) -> Self {
        Self::new(config, &mut LegacyRandom::from_seed(seed))
    }

    /// Creates a field seeded from the platform random generator.
    #[must_use]
    pub fn with_thread_random(config: &NoiseConfig) -> Self {
        Self::new(config, &mut ThreadRandom)
    }

    /// The parameters in effect.
    #[must_use]
    pub const fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// The lattice hash tables backing this field.
    #[must_use]
    pub const fn table(&self) -> &PermutationTable {
        self.noise.table()
    }

    /// Single-octave noise at `(x, y, t)`, roughly in `[-1, 1]`.
    ///
    /// Ignores amplitude, scale and distribution.
    #[inline]
    #[must_use]
    pub fn raw_noise(&self, x: f64, y: f64, t: f64) -> f64 {
        self.noise.get_value_3d(x, y, t)
    }

    /// Fractal noise at `(x, y)` and time `t`.
    ///
    /// Nominally in `[0, 1]`; several octaves at full amplitude can overshoot
    /// either end. With `distrib == 1` this is exactly `(sum + 1) / 2`.
    #[must_use]
    pub fn noise(&self, x: f64, y: f64, t: f64) -> f64 {
        let mut amplitude = self.params.amplitude;
        let mut scale = self.params.scale;
        let mut sum = 0.0;

        for _ in 0..self.params.octaves {
            sum += self.raw_noise(x * scale, y * scale, t) * amplitude;
            amplitude *= PERSISTENCE;
            scale *= LACUNARITY;
        }

        shape((sum + 1.0) / 2.0, self.params.distrib)
    }

    /// [`noise`](Self::noise) at time `0`.
    #[inline]
    #[must_use]
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.noise(x, y, 0.0)
    }
}

/// Raises `base` to `distrib`.
///
/// A negative base only has a real power for integral exponents. For a
/// fractional exponent it is mirrored through zero instead, so overshooting
/// sums stay finite.
#[inline]
fn shape(base: f64, distrib: f64) -> f64 {
    if base >= 0.0 || distrib.fract() == 0.0 {
        base.powf(distrib)
    } else {
        -(-base).powf(distrib)
    }
}
