//! Password generation.

pub mod charset;
mod config;
mod generate;

pub use charset::{Alphabet, CharacterClass, ClassSet};
pub use config::{DEFAULT_LENGTH, GenerationConfig, MAX_LENGTH, MIN_LENGTH};
pub use generate::{generate, generate_batch, generate_with, sample};
