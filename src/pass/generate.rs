//! Password sampling.

use log::{debug, trace};
use zeroize::Zeroizing;

use super::charset::{self, Alphabet, ClassSet};
use super::config::GenerationConfig;
use crate::rand::{OsRandom, RandomSource};
use crate::{Error, Result};

/// Size of the draw range (32-bit draws).
const RANGE: u64 = 1 << 32;

/// Draw `length` characters uniformly from `alphabet`.
///
/// Uses rejection sampling: a draw `v` is kept only when it falls below the
/// largest multiple of the alphabet size that fits in 32 bits, so every index
/// is equally likely. Rejected draws are discarded and redrawn. For a fixed
/// draw sequence the output is fully deterministic.
pub fn sample<R: RandomSource>(rng: &mut R, alphabet: &Alphabet, length: usize) -> Result<String> {
    let chars = alphabet.chars();
    let mut out = Zeroizing::new(String::with_capacity(length));
    let mut rejected = 0usize;

    for _ in 0..length {
        let idx = pick(rng, chars.len(), &mut rejected)?;
        out.push(chars[idx]);
    }

    if rejected > 0 {
        trace!("rejected {} out-of-zone draws", rejected);
    }
    Ok(std::mem::take(&mut *out))
}

#[inline]
fn pick<R: RandomSource>(rng: &mut R, n: usize, rejected: &mut usize) -> Result<usize> {
    let n = n as u64;
    let zone = RANGE - RANGE % n;
    loop {
        let v = u64::from(rng.next_u32()?);
        if v < zone {
            return Ok((v % n) as usize);
        }
        *rejected += 1;
    }
}

/// Build the alphabet for `classes` and sample `length` characters from the
/// OS CSPRNG.
pub fn generate(length: i64, classes: ClassSet) -> Result<String> {
    let mut rng = OsRandom::new();
    generate_with(&mut rng, length, classes)
}

/// Like [`generate`] with an explicit randomness source.
pub fn generate_with<R: RandomSource>(rng: &mut R, length: i64, classes: ClassSet) -> Result<String> {
    let length = usize::try_from(length).map_err(|_| Error::InvalidLength(length))?;
    let alphabet = charset::build(classes);
    debug!(
        "generating {} chars from {} char alphabet ({})",
        length,
        alphabet.len(),
        rng.name()
    );
    sample(rng, &alphabet, length)
}

/// Generate `count` passwords for one configuration, sharing one alphabet.
pub fn generate_batch<R: RandomSource>(
    rng: &mut R,
    config: &GenerationConfig,
    count: usize,
) -> Result<Vec<String>> {
    let alphabet = config.alphabet();
    (0..count)
        .map(|_| sample(rng, &alphabet, config.length))
        .collect()
}
