//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,lowercase,uppercase,digits,symbols,danish,quiet`

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use kodeord::{CharacterClass, Result};
use log::{debug, warn};

use super::Settings;

const FIELDS: usize = 7;

pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut fields = vec![settings.pass_length.to_string()];
    fields.extend(
        CharacterClass::ALL
            .iter()
            .map(|c| settings.uses(*c).to_string()),
    );
    fields.push(settings.quiet.to_string());

    file.write_all(format!("{}\n", fields.join(",")).as_bytes())?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> Result<()> {
    if !path.exists() {
        debug!("no settings file at {}, using defaults", path.display());
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        warn!(
            "malformed settings file {}, rewriting defaults",
            path.display()
        );
        return save(path, settings);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    for (class, raw) in CharacterClass::ALL.iter().zip(&parts[1..6]) {
        let enabled = raw.parse().unwrap_or(settings.uses(*class));
        settings.classes.set(*class, enabled);
    }
    settings.quiet = parts[6].parse().unwrap_or(settings.quiet);

    debug!("loaded settings from {}", path.display());
    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/kodeord/settings")
}

#[cfg(test)]
mod tests {
    use kodeord::ClassSet;

    use super::*;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");

        let mut settings = Settings::default();
        settings.pass_length = 40;
        settings.classes = ClassSet::empty()
            .with(CharacterClass::Digit)
            .with(CharacterClass::Danish);
        settings.quiet = true;
        settings.save_to(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "40,false,false,true,false,true,true\n"
        );
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn malformed_file_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "garbage\n").unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "16,true,true,true,true,false,false\n"
        );
    }

    #[test]
    fn bad_fields_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "abc,maybe,true,true,true,true,no\n").unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.pass_length, 16);
        assert!(loaded.uses(CharacterClass::Lowercase));
        assert!(loaded.uses(CharacterClass::Danish));
        assert!(!loaded.quiet);
    }

    #[test]
    fn config_clamps_length() {
        let settings = Settings {
            pass_length: 3,
            ..Settings::default()
        };
        assert_eq!(settings.config().length, 6);
    }
}
