//! ASCII shading of heightmaps.

use std::io::{self, Write};

use drift_core::Heightmap;

/// Shades from lowest to highest.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Maps a sample in `[0, 1]` to a ramp character. Out-of-range and NaN
/// samples clamp to the ends.
#[must_use]
pub fn shade(value: f64) -> char {
    let last = RAMP.len() - 1;
    let index = if value.is_nan() {
        0
    } else {
        (value.clamp(0.0, 1.0) * last as f64).round() as usize
    };
    char::from(RAMP[index.min(last)])
}

/// Writes one frame, a line per row.
pub fn write_frame<W: Write>(out: &mut W, map: &Heightmap) -> io::Result<()> {
    let mut line = String::with_capacity(map.width() + 1);
    for row in map.rows() {
        line.clear();
        line.extend(row.iter().map(|&v| shade(v)));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}
