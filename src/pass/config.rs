//! Generation configuration.

use super::charset::{self, Alphabet, ClassSet};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// Target length plus the enabled character classes.
///
/// The sampler accepts any length; the 6..=64 range is enforced here for
/// callers that want the interactive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    /// Same as [`GenerationConfig::new`] with `length` clamped to
    /// `MIN_LENGTH..=MAX_LENGTH`.
    pub fn clamped(length: usize, classes: ClassSet) -> Self {
        Self::new(length.clamp(MIN_LENGTH, MAX_LENGTH), classes)
    }

    pub fn alphabet(&self) -> Alphabet {
        charset::build(self.classes)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, ClassSet::standard())
    }
}
