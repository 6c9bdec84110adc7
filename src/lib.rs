//! Password generation and strength scoring.
//!
//! Three entry points make up the core:
//!
//! - [`build_alphabet`] resolves enabled character classes into an alphabet
//! - [`generate`] samples a password from the OS CSPRNG
//!   ([`generate_with`] takes any [`RandomSource`])
//! - [`analyze`] scores any string and explains the score
//!
//! None of them touch the disk or network, and none keep state between calls.

mod error;
pub mod history;
pub mod pass;
pub mod rand;
pub mod strength;

pub use error::{Error, Result};
pub use history::History;
pub use pass::{
    Alphabet, CharacterClass, ClassSet, GenerationConfig, generate, generate_batch, generate_with,
};
pub use rand::{OsRandom, RandomSource, Replay};
pub use strength::{StrengthResult, analyze};

/// Resolve enabled classes into a concrete, never-empty alphabet.
pub fn build_alphabet(classes: ClassSet) -> Alphabet {
    pass::charset::build(classes)
}
