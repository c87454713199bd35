//! Leaf primitives for drift: random sources and the
//! single-octave simplex noise evaluator.

pub mod noise;
pub mod random;
