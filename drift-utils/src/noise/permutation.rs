//! Lattice hash tables for simplex noise.

use crate::random::Random;

/// A shuffled permutation of `0..=255`, stored twice so lookups of the form
/// `perm[a + perm[b]]` never need to wrap, plus a parallel table of each
/// entry modulo 12 for picking one of the [`GRADIENT`](super::GRADIENT)s.
///
/// Built once per noise generator and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl PermutationTable {
    /// Shuffles `0..=255` with draws from `random` and expands the result.
    ///
    /// Walks left to right: for `i` in `0..255` it swaps position `i` with
    /// `i + floor(next_f64() * (256 - i))`. Exactly 255 values are drawn, in
    /// that order, so a seeded source always yields the same table.
    ///
    /// # Panics
    ///
    /// Panics if `random` returns a value `>= 1.0`, which breaks the
    /// [`Random`] contract and indexes past the table. Negative values are
    /// equally invalid but silently saturate to the current position.
    #[must_use]
    pub fn build<R: Random + ?Sized>(random: &mut R) -> Self {
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);

        for i in 0..255 {
            let remaining = (256 - i) as f64;
            let r = i + (random.next_f64() * remaining) as usize;
            p.swap(i, r);
        }

        tracing::trace!(head = ?&p[..8], "built simplex permutation table");
        Self::from_permutation(p)
    }

    /// Expands an already shuffled permutation.
    ///
    /// `p` must contain every value in `0..=255` exactly once. Only checked in
    /// debug builds.
    #[must_use]
    pub fn from_permutation(p: [u8; 256]) -> Self {
        debug_assert!(is_bijection(&p), "permutation must contain 0..=255 once each");

        let perm: [u8; 512] = std::array::from_fn(|k| p[k & 255]);
        let perm_mod12: [u8; 512] = std::array::from_fn(|k| perm[k] % 12);
        Self { perm, perm_mod12 }
    }

    /// The doubled permutation, 512 entries.
    #[inline]
    #[must_use]
    pub const fn perm(&self) -> &[u8; 512] {
        &self.perm
    }

    /// `perm()[i] % 12` for every `i`.
    #[inline]
    #[must_use]
    pub const fn perm_mod12(&self) -> &[u8; 512] {
        &self.perm_mod12
    }

    /// The 256-entry shuffled permutation before doubling.
    #[must_use]
    pub fn base(&self) -> &[u8] {
        &self.perm[..256]
    }

    /// Hashes a lattice point to a gradient index in `0..12`.
    ///
    /// Components must already be masked to `0..=255` plus a corner offset of
    /// at most 1, which keeps every nested index below 512.
    #[inline]
    pub(crate) fn gradient_index(&self, i: usize, j: usize, k: usize) -> usize {
        let kk = usize::from(self.perm[k]);
        let jj = usize::from(self.perm[j + kk]);
        usize::from(self.perm_mod12[i + jj])
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

fn is_bijection(p: &[u8; 256]) -> bool {
    let mut seen = [false; 256];
    for &v in p {
        if std::mem::replace(&mut seen[usize::from(v)], true) {
            return false;
        }
    }
    true
}
