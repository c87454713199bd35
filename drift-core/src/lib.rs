//! Fractal simplex noise fields.
//!
//! [`Simplex`] layers octaves of single-octave simplex noise from
//! `drift-utils` and reshapes the sum into roughly `[0, 1]`. Construct one per
//! field, then sample it as often as needed; it never changes after creation.
//!
//! ```
//! use drift_core::{NoiseConfig, Simplex};
//!
//! let config = NoiseConfig::new().with_scale(0.05).with_octaves(4);
//! let field = Simplex::from_seed(&config, 42);
//! let height = field.noise(10.0, 20.0, 0.0);
//! assert!(height.is_finite());
//! ```

pub mod config;
pub mod fractal;
pub mod heightmap;

pub use config::{ConfigError, NoiseConfig, NoiseParams};
pub use fractal::Simplex;
pub use heightmap::Heightmap;
