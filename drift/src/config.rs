//! Preview configuration, read from a JSON5 file.

use std::fs;
use std::path::Path;

use anyhow::{Context, ensure};
use drift_core::NoiseConfig;
use serde::{Deserialize, Serialize};

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/drift_config.json5";
/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "DRIFT_CONFIG";

/// Everything the preview needs: field settings plus frame layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriftConfig {
    /// Seed for the permutation table. `None` picks a random one.
    pub seed: Option<u64>,
    /// Columns per frame.
    pub width: usize,
    /// Rows per frame.
    pub height: usize,
    /// Number of frames to draw.
    pub frames: u32,
    /// Increment of `t` between frames.
    pub time_step: f64,
    /// Pause between frames in milliseconds.
    pub frame_delay_ms: u64,
    /// Noise field settings.
    pub noise: NoiseConfig,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            seed: None,
            width: 64,
            height: 24,
            frames: 1,
            time_step: 0.02,
            frame_delay_ms: 80,
            noise: NoiseConfig::new().with_scale(0.05).with_octaves(4),
        }
    }
}

impl DriftConfig {
    /// Loads and validates the config at `path`. A missing file yields the
    /// defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates config text.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json5::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.noise.validate()?;
        ensure!(self.width > 0 && self.height > 0, "frame size must be non-zero");
        ensure!(
            self.time_step.is_finite(),
            "`time_step` must be finite, got {}",
            self.time_step
        );
        Ok(())
    }
}
