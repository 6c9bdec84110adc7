//! Randomness sources for password sampling.
//!
//! Sampling never reaches for a global generator: callers hand a
//! [`RandomSource`] to the sampler. [`OsRandom`] is the production source,
//! [`Replay`] plays back a fixed draw sequence for deterministic tests.

mod os;
mod replay;

pub use os::OsRandom;
pub use replay::Replay;

use crate::Result;

/// Provider of uniformly distributed 32-bit unsigned integers.
pub trait RandomSource {
    /// Next draw. Fails with `Error::RandomnessUnavailable` when the
    /// underlying source cannot be read.
    fn next_u32(&mut self) -> Result<u32>;

    /// Short human-readable name of the source.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> Result<u32> {
        (**self).next_u32()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
