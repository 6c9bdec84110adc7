//! Deterministic source that plays back a fixed draw sequence.

use super::RandomSource;
use crate::{Error, Result};

/// Replays a recorded sequence of draws, then reports the source as
/// unavailable once the sequence is exhausted.
#[derive(Debug, Clone)]
pub struct Replay {
    draws: Vec<u32>,
    pos: usize,
}

impl Replay {
    pub fn new(draws: Vec<u32>) -> Self {
        Self {
            draws,
            pos: 0,
        }
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for Replay {
    fn next_u32(&mut self) -> Result<u32> {
        let value = self.draws.get(self.pos).copied().ok_or_else(|| {
            Error::RandomnessUnavailable(format!(
                "replay exhausted after {} draws",
                self.draws.len()
            ))
        })?;
        self.pos += 1;
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "replay"
    }
}
