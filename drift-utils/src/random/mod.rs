//! Uniform random sources consumed while building permutation tables.
//!
//! Noise generators never pick their own randomness. Callers hand in anything
//! implementing [`Random`]:
//!
//! - [`ThreadRandom`] - the platform default, not reproducible
//! - [`LegacyRandom`] - seeded 48-bit LCG, reproducible across runs
//! - [`RandomFn`] - wraps a closure, handy for fixtures and mocks

pub mod legacy_random;

pub use legacy_random::LegacyRandom;

/// A source of uniformly distributed doubles.
pub trait Random {
    /// Returns the next value, uniformly distributed in `[0, 1)`.
    ///
    /// Implementations must never return a value outside that range. Consumers
    /// do not check; see [`PermutationTable::build`](crate::noise::PermutationTable::build).
    fn next_f64(&mut self) -> f64;
}

impl<R: Random + ?Sized> Random for &mut R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: Random + ?Sized> Random for Box<R> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// The platform default source, backed by `rand`'s thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl Random for ThreadRandom {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Adapts a closure returning values in `[0, 1)` into a [`Random`].
///
/// ```
/// use drift_utils::random::{Random, RandomFn};
///
/// let mut zeros = RandomFn(|| 0.0);
/// assert!(zeros.next_f64() == 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RandomFn<F>(pub F);

impl<F: FnMut() -> f64> Random for RandomFn<F> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.0)()
    }
}
