//! Persisted generation defaults.

mod file;

use std::path::Path;

use kodeord::pass::{DEFAULT_LENGTH, GenerationConfig};
use kodeord::{CharacterClass, ClassSet, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
    pub quiet: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&file::get_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&file::get_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(path, self)
    }

    pub fn uses(&self, class: CharacterClass) -> bool {
        self.classes.contains(class)
    }

    /// Generation config with the length clamped to the interactive bounds.
    pub fn config(&self) -> GenerationConfig {
        GenerationConfig::clamped(self.pass_length, self.classes)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            classes: ClassSet::standard(),
            quiet: false,
        }
    }
}
