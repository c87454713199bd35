//! Dense grids of noise samples.

use rayon::prelude::*;

use crate::fractal::Simplex;

/// A `width` x `height` grid of [`Simplex::noise`] values, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Heightmap {
    /// Samples `field` at every integer cell `(x, y)` at time `t`.
    ///
    /// Rows are evaluated in parallel.
    #[must_use]
    pub fn sample(field: &Simplex, width: usize, height: usize, t: f64) -> Self {
        let mut values = vec![0.0; width * height];
        if width > 0 {
            values
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    let y = y as f64;
                    for (x, value) in row.iter_mut().enumerate() {
                        *value = field.noise(x as f64, y, t);
                    }
                });
        }
        Self {
            width,
            height,
            values,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// All samples, row-major.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The sample at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y * self.width + x).copied()
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics; an empty grid simply has no rows.
        self.values.chunks(self.width.max(1))
    }

    /// Smallest and largest sample, or `None` for an empty grid.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.values.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
