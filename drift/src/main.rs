//! Terminal preview of an animated fractal simplex noise field.
//!
//! Reads `config/drift_config.json5` (or the file named by `DRIFT_CONFIG`),
//! then draws `frames` heightmaps while advancing the time axis.

mod config;
mod render;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use drift_core::{Heightmap, Simplex};
use drift_utils::random::{LegacyRandom, Random, ThreadRandom};
use tracing_subscriber::EnvFilter;

use crate::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DriftConfig};

/// Clears the screen and homes the cursor.
const CLEAR: &str = "\x1b[2J\x1b[H";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = DriftConfig::load(&path)?;

    let start = Instant::now();
    let mut random: Box<dyn Random> = match config.seed {
        Some(seed) => Box::new(LegacyRandom::from_seed(seed)),
        None => Box::new(ThreadRandom),
    };
    let field = Simplex::new(&config.noise, &mut random);
    tracing::info!(
        seed = ?config.seed,
        params = ?field.params(),
        "Noise field ready in {:?}",
        start.elapsed()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let delay = Duration::from_millis(config.frame_delay_ms);
    let mut t = 0.0;

    for frame in 0..config.frames {
        let map = Heightmap::sample(&field, config.width, config.height, t);
        if config.frames > 1 {
            out.write_all(CLEAR.as_bytes())?;
        }
        render::write_frame(&mut out, &map).context("Failed to write frame")?;
        out.flush()?;

        if let Some((lo, hi)) = map.min_max() {
            tracing::debug!(frame, t, lo, hi, "Frame drawn");
        }
        t += config.time_step;
        if frame + 1 < config.frames {
            thread::sleep(delay);
        }
    }

    Ok(())
}
