//! Single-octave 3D simplex noise.
//!
//! Space is skewed so the unit cube splits into six tetrahedra; each sample
//! sums the falloff-weighted gradient contributions of its tetrahedron's four
//! corners. Output is scaled to roughly `[-1, 1]`.

use crate::noise::{GRADIENT, PermutationTable};
use crate::random::Random;

/// Skewing factor for 3D simplex: `1/3`
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: f64 = 1.0 / 6.0;
/// Squared radius of influence of each corner.
const RADIUS_SQ: f64 = 0.6;
/// Brings the summed contributions to about `[-1, 1]`.
const OUTPUT_SCALE: f64 = 32.0;

/// Wraps an integral cell coordinate into `0..=255`.
///
/// Reduced on the float so coordinates beyond the `i64` range still wrap
/// instead of saturating. Non-finite cells map to 0.
#[inline]
fn lattice_hash(cell: f64) -> usize {
    cell.rem_euclid(256.0) as usize
}

/// Simplex noise generator over `(x, y, z)`.
///
/// Owns its [`PermutationTable`]; evaluation only reads it, so a generator
/// can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    table: PermutationTable,
}

impl SimplexNoise {
    /// Creates a generator with a permutation table shuffled by `random`.
    #[must_use]
    pub fn new<R: Random + ?Sized>(random: &mut R) -> Self {
        Self::from_table(PermutationTable::build(random))
    }

    /// Creates a generator around an existing table.
    #[must_use]
    pub const fn from_table(table: PermutationTable) -> Self {
        Self { table }
    }

    /// The lattice hash tables.
    #[must_use]
    pub const fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Dot product of gradient vector and offset vector.
    #[inline]
    fn dot(g: &[i32; 3], x: f64, y: f64, z: f64) -> f64 {
        f64::from(g[0]) * x + f64::from(g[1]) * y + f64::from(g[2]) * z
    }

    /// Compute corner noise contribution for a simplex vertex.
    #[inline]
    fn corner_noise(index: usize, x: f64, y: f64, z: f64) -> f64 {
        let t0 = RADIUS_SQ - x * x - y * y - z * z;
        if t0 < 0.0 {
            0.0
        } else {
            let t0 = t0 * t0;
            t0 * t0 * Self::dot(&GRADIENT[index], x, y, z)
        }
    }

    /// Sample 3D simplex noise at the given coordinates.
    ///
    /// Returns a value typically in the range `[-1, 1]`; it may overshoot by
    /// a hair. NaN or infinite input gives a non-finite result.
    #[must_use]
    pub fn get_value_3d(&self, xin: f64, yin: f64, zin: f64) -> f64 {
        let s = (xin + yin + zin) * F3;
        // Cell coordinates stay floats so infinite input unskews to NaN
        // instead of saturating onto the lattice.
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let k = (zin + s).floor();
        let t = (i + j + k) * G3;
        let x0 = xin - (i - t);
        let y0 = yin - (j - t);
        let z0 = zin - (k - t);

        // Determine which simplex tetrahedron we're in. Ties resolve through
        // this exact chain; reordering it moves borderline points.
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - f64::from(i1) + G3;
        let y1 = y0 - f64::from(j1) + G3;
        let z1 = z0 - f64::from(k1) + G3;
        let x2 = x0 - f64::from(i2) + 2.0 * G3;
        let y2 = y0 - f64::from(j2) + 2.0 * G3;
        let z2 = z0 - f64::from(k2) + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = lattice_hash(i);
        let jj = lattice_hash(j);
        let kk = lattice_hash(k);
        let (i1, j1, k1) = (i1 as usize, j1 as usize, k1 as usize);
        let (i2, j2, k2) = (i2 as usize, j2 as usize, k2 as usize);

        let gi0 = self.table.gradient_index(ii, jj, kk);
        let gi1 = self.table.gradient_index(ii + i1, jj + j1, kk + k1);
        let gi2 = self.table.gradient_index(ii + i2, jj + j2, kk + k2);
        let gi3 = self.table.gradient_index(ii + 1, jj + 1, kk + 1);

        let n0 = Self::corner_noise(gi0, x0, y0, z0);
        let n1 = Self::corner_noise(gi1, x1, y1, z1);
        let n2 = Self::corner_noise(gi2, x2, y2, z2);
        let n3 = Self::corner_noise(gi3, x3, y3, z3);

        OUTPUT_SCALE * (n0 + n1 + n2 + n3)
    }
}
