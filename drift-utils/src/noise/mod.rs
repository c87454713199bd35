//! Noise generation primitives.
//!
//! - [`PermutationTable`] - shuffled, doubled lattice hash tables
//! - [`SimplexNoise`] - single-octave 3D simplex noise
//!
//! Octave layering and output shaping live in `drift-core`.

mod permutation;
mod simplex_noise;

pub use permutation::PermutationTable;
pub use simplex_noise::SimplexNoise;

/// The twelve 3D gradient directions: midpoints of the edges of a cube.
///
/// Indexed by `perm_mod12` lookups, so the order is part of the output.
pub const GRADIENT: [[i32; 3]; 12] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
];
