//! Seeded linear congruential generator compatible with `java.util.Random`.
//!
//! Same seed, same stream, on every platform. That makes it the source of
//! choice when a noise field has to be regenerated later (saved worlds,
//! golden tests).

use super::Random;

const MULTIPLIER: u64 = 0x0005_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;
/// `2^-53`, the spacing of doubles in `[0.5, 1)`.
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 48-bit LCG with the `java.util.Random` constants.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: u64,
}

impl LegacyRandom {
    /// Creates a generator from a seed. The seed is scrambled with the
    /// multiplier, matching `new java.util.Random(seed)`.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the state and returns the top `bits` bits.
    #[inline]
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ADDEND)
            & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26)) << 27;
        let low = i64::from(self.next(27));
        (high + low) as f64 * DOUBLE_UNIT
    }
}
