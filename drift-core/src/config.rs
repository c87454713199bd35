//! Noise field configuration.
//!
//! [`NoiseConfig`] is what callers write (every field optional, usually read
//! from a config file). [`NoiseParams`] is what the engine runs on, produced
//! by [`NoiseConfig::resolve`].
//!
//! # Zero means unset
//!
//! A field set to `0` resolves to its default exactly like an absent field,
//! so `amplitude: 0` yields amplitude `1.0`. Existing configs rely on this;
//! a flat field is not expressible through `NoiseConfig`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default overall output scaling.
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
/// Default distribution exponent (linear).
pub const DEFAULT_DISTRIB: f64 = 1.0;
/// Default base frequency multiplier.
pub const DEFAULT_SCALE: f64 = 1.0;
/// Default number of octaves.
pub const DEFAULT_OCTAVES: u32 = 1;

/// An error reported by [`NoiseConfig::validate`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A float field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Amplitude outside `[0, 1]`.
    #[error("`amplitude` must be within [0, 1], got {0}")]
    AmplitudeOutOfRange(f64),
    /// Scale outside `[0, 1]`.
    #[error("`scale` must be within [0, 1], got {0}")]
    ScaleOutOfRange(f64),
    /// Negative distribution exponent.
    #[error("`distrib` must not be negative, got {0}")]
    NegativeDistrib(f64),
}

/// User-facing noise settings. Absent fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Fraction of the full height range used, in `[0, 1]`. Default `1.0`.
    pub amplitude: Option<f64>,
    /// Exponent applied to the normalized output. `1.0` is linear, above
    /// pushes values toward the bottom, below toward the top. Default `1.0`.
    pub distrib: Option<f64>,
    /// Frequency of the first octave, in `[0, 1]`. Smaller is smoother.
    /// Default `1.0`.
    pub scale: Option<f64>,
    /// Number of layered octaves. Default `1`.
    pub octaves: Option<u32>,
}

impl NoiseConfig {
    /// A config with every field unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            amplitude: None,
            distrib: None,
            scale: None,
            octaves: None,
        }
    }

    /// Sets the amplitude.
    #[must_use]
    pub const fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    /// Sets the distribution exponent.
    #[must_use]
    pub const fn with_distrib(mut self, distrib: f64) -> Self {
        self.distrib = Some(distrib);
        self
    }

    /// Sets the base scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets the octave count.
    #[must_use]
    pub const fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = Some(octaves);
        self
    }

    /// Checks the documented ranges without applying defaults.
    ///
    /// Engines never require this: [`resolve`](Self::resolve) repairs bad
    /// values instead. Use it where a typo should be reported, such as when
    /// loading a file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("amplitude", self.amplitude),
            ("distrib", self.distrib),
            ("scale", self.scale),
        ] {
            if let Some(value) = value
                && !value.is_finite()
            {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if let Some(amplitude) = self.amplitude
            && !(0.0..=1.0).contains(&amplitude)
        {
            return Err(ConfigError::AmplitudeOutOfRange(amplitude));
        }
        if let Some(scale) = self.scale
            && !(0.0..=1.0).contains(&scale)
        {
            return Err(ConfigError::ScaleOutOfRange(scale));
        }
        if let Some(distrib) = self.distrib
            && distrib < 0.0
        {
            return Err(ConfigError::NegativeDistrib(distrib));
        }
        Ok(())
    }

    /// Fills in defaults and repairs unusable values.
    ///
    /// Absent and zero fields take their defaults (see the module docs). The
    /// result then goes through [`NoiseParams::sanitized`].
    #[must_use]
    pub fn resolve(&self) -> NoiseParams {
        NoiseParams {
            amplitude: or_default(self.amplitude, DEFAULT_AMPLITUDE),
            distrib: or_default(self.distrib, DEFAULT_DISTRIB),
            scale: or_default(self.scale, DEFAULT_SCALE),
            octaves: self
                .octaves
                .filter(|&octaves| octaves != 0)
                .unwrap_or(DEFAULT_OCTAVES),
        }
        .sanitized()
    }
}

#[inline]
fn or_default(value: Option<f64>, default: f64) -> f64 {
    value.filter(|&v| v != 0.0).unwrap_or(default)
}

/// Resolved parameters of a fractal noise field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Amplitude of the first octave.
    pub amplitude: f64,
    /// Exponent applied after remapping to `[0, 1]`.
    pub distrib: f64,
    /// Frequency of the first octave.
    pub scale: f64,
    /// Number of octaves, at least 1.
    pub octaves: u32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            distrib: DEFAULT_DISTRIB,
            scale: DEFAULT_SCALE,
            octaves: DEFAULT_OCTAVES,
        }
    }
}

impl NoiseParams {
    /// Replaces values the engine cannot use with their defaults.
    ///
    /// Non-finite floats, a negative `distrib` and `octaves == 0` are each
    /// reset and logged. Out-of-range but finite amplitude or scale pass
    /// through untouched.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let mut params = self;
        if !params.amplitude.is_finite() {
            log::warn!("amplitude {} is not finite, using {DEFAULT_AMPLITUDE}", params.amplitude);
            params.amplitude = DEFAULT_AMPLITUDE;
        }
        if !params.scale.is_finite() {
            log::warn!("scale {} is not finite, using {DEFAULT_SCALE}", params.scale);
            params.scale = DEFAULT_SCALE;
        }
        if !params.distrib.is_finite() || params.distrib < 0.0 {
            log::warn!("distrib {} is unusable, using {DEFAULT_DISTRIB}", params.distrib);
            params.distrib = DEFAULT_DISTRIB;
        }
        if params.octaves == 0 {
            log::warn!("octaves must be at least 1, using {DEFAULT_OCTAVES}");
            params.octaves = DEFAULT_OCTAVES;
        }
        params
    }
}
