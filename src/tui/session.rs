//! Interactive session state: current password, its strength, history.

use copypasta::{ClipboardContext, ClipboardProvider};
use kodeord::pass::{self, MAX_LENGTH, MIN_LENGTH};
use kodeord::{
    CharacterClass, Error, History, OsRandom, RandomSource, Result, StrengthResult, analyze,
};
use log::{error, info};
use zeroize::Zeroizing;

use crate::settings::Settings;

/// Outcome of the last action, shown under the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Copied,
    Saved,
    Error(String),
}

pub struct Session<R: RandomSource = OsRandom> {
    settings: Settings,
    rng: R,
    password: Zeroizing<String>,
    strength: StrengthResult,
    history: History,
    clipboard: Option<Box<dyn ClipboardProvider>>,
    status: Status,
}

impl Session {
    /// Session on the OS CSPRNG. The system clipboard is opened on first copy.
    pub fn new(settings: Settings) -> Self {
        Session::with_parts(settings, OsRandom::new(), None)
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_parts(
        settings: Settings,
        rng: R,
        clipboard: Option<Box<dyn ClipboardProvider>>,
    ) -> Self {
        let mut session = Self {
            settings,
            rng,
            password: Zeroizing::new(String::new()),
            strength: analyze(""),
            history: History::new(),
            clipboard,
            status: Status::Idle,
        };
        session.regenerate();
        session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> &StrengthResult {
        &self.strength
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn source_name(&self) -> &'static str {
        self.rng.name()
    }

    pub fn clear_status(&mut self) {
        self.status = Status::Idle;
    }

    fn set_password(&mut self, password: String) {
        self.password = Zeroizing::new(password);
        self.strength = analyze(&self.password);
    }

    /// Draw a fresh password for the current settings. On failure the
    /// password is cleared and the error is kept in the status line.
    pub fn regenerate(&mut self) {
        let config = self.settings.config();
        match pass::sample(&mut self.rng, &config.alphabet(), config.length) {
            Ok(password) => {
                self.set_password(password);
                if matches!(self.status, Status::Error(_)) {
                    self.status = Status::Idle;
                }
            }
            Err(e) => {
                error!("generation failed: {}", e);
                self.set_password(String::new());
                self.status = Status::Error(e.to_string());
            }
        }
    }

    /// Change the length and regenerate. Lengths outside the interactive
    /// bounds are refused.
    pub fn set_length(&mut self, length: usize) -> bool {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            self.status = Status::Error(format!(
                "Length must be between {MIN_LENGTH} and {MAX_LENGTH}"
            ));
            return false;
        }
        self.settings.pass_length = length;
        self.regenerate();
        true
    }

    /// Flip a character class and regenerate.
    pub fn toggle(&mut self, class: CharacterClass) {
        self.settings.classes.toggle(class);
        self.regenerate();
    }

    /// Replace the password with user-typed text and re-score it.
    pub fn edit(&mut self, text: String) {
        self.set_password(text);
    }

    /// Copy the current password and remember it in the history.
    pub fn copy(&mut self) {
        if self.password.is_empty() {
            self.status = Status::Error("Nothing to copy".to_string());
            return;
        }
        let password = self.password.to_string();
        match self.write_clipboard(password.clone()) {
            Ok(()) => {
                self.history.push(password);
                self.status = Status::Copied;
            }
            Err(e) => self.status = Status::Error(e.to_string()),
        }
    }

    /// Copy a history entry again without pushing it.
    pub fn copy_from_history(&mut self, idx: usize) {
        let Some(entry) = self.history.get(idx).map(str::to_string) else {
            self.status = Status::Error(format!("No history entry {}", idx + 1));
            return;
        };
        self.status = match self.write_clipboard(entry) {
            Ok(()) => Status::Copied,
            Err(e) => Status::Error(e.to_string()),
        };
    }

    fn write_clipboard(&mut self, text: String) -> Result<()> {
        if self.clipboard.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.clipboard = Some(Box::new(ctx));
        }
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".to_string()))?;
        clipboard
            .set_contents(text)
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        info!("copied password to clipboard");
        Ok(())
    }

    pub fn save_settings(&mut self) {
        self.status = match self.settings.save_to_file() {
            Ok(()) => Status::Saved,
            Err(e) => Status::Error(format!("Error saving settings: {e}")),
        };
    }

    pub fn load_defaults(&mut self) {
        self.settings = Settings::default();
        self.regenerate();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use kodeord::{ClassSet, Replay};

    use super::*;

    type ClipResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;

    #[derive(Clone, Default)]
    struct FakeClipboard {
        contents: Arc<Mutex<Vec<String>>>,
        broken: bool,
    }

    impl ClipboardProvider for FakeClipboard {
        fn get_contents(&mut self) -> ClipResult<String> {
            Ok(self.contents.lock().unwrap().last().cloned().unwrap_or_default())
        }

        fn set_contents(&mut self, text: String) -> ClipResult<()> {
            if self.broken {
                return Err("no display".into());
            }
            self.contents.lock().unwrap().push(text);
            Ok(())
        }
    }

    fn digits_only(length: usize) -> Settings {
        Settings {
            pass_length: length,
            classes: ClassSet::empty().with(CharacterClass::Digit),
            quiet: false,
        }
    }

    fn session(draws: Vec<u32>, clip: &FakeClipboard) -> Session<Replay> {
        Session::with_parts(digits_only(6), Replay::new(draws), Some(Box::new(clip.clone())))
    }

    #[test]
    fn starts_with_generated_password() {
        let clip = FakeClipboard::default();
        let s = session((1..=6).collect(), &clip);
        assert_eq!(s.password(), "123456");
        assert_eq!(s.strength(), &analyze("123456"));
        assert_eq!(s.status(), &Status::Idle);
    }

    #[test]
    fn toggling_regenerates() {
        let clip = FakeClipboard::default();
        let mut s = session((0..12).collect(), &clip);
        assert_eq!(s.password(), "012345");
        s.toggle(CharacterClass::Digit);
        // No classes left: fallback alphabet, draws 6..12 index a-z.
        assert_eq!(s.password(), "ghijkl");
        assert!(s.settings().classes.is_empty());
    }

    #[test]
    fn length_bounds() {
        let clip = FakeClipboard::default();
        let mut s = session(vec![0; 20], &clip);
        assert!(!s.set_length(5));
        assert!(matches!(s.status(), Status::Error(_)));
        assert!(s.set_length(8));
        assert_eq!(s.password(), "00000000");
        assert_eq!(s.settings().pass_length, 8);
    }

    #[test]
    fn exhausted_source_is_reported() {
        let clip = FakeClipboard::default();
        let s = session(vec![1, 2], &clip);
        assert_eq!(s.password(), "");
        assert!(matches!(s.status(), Status::Error(e) if e.contains("randomness")));
    }

    #[test]
    fn edit_rescores_without_drawing() {
        let clip = FakeClipboard::default();
        let mut s = session((1..=6).collect(), &clip);
        s.edit("Tr0ub4dor&3xyzPQ".to_string());
        assert_eq!(s.password(), "Tr0ub4dor&3xyzPQ");
        assert_eq!(s.strength().score, 4);
    }

    #[test]
    fn copy_pushes_history() {
        let clip = FakeClipboard::default();
        // Password k is "kkkkkk".
        let draws = (0..7).flat_map(|k| [k; 6]).collect();
        let mut s = session(draws, &clip);
        assert_eq!(s.password(), "000000");
        for _ in 0..6 {
            s.copy();
            s.regenerate();
        }
        assert_eq!(s.password(), "666666");
        assert_eq!(s.status(), &Status::Copied);
        assert_eq!(
            s.history().iter().collect::<Vec<_>>(),
            vec!["555555", "444444", "333333", "222222", "111111"]
        );
        assert_eq!(clip.contents.lock().unwrap().len(), 6);
    }

    #[test]
    fn recopy_from_history_does_not_push() {
        let clip = FakeClipboard::default();
        let mut s = session((0..12).collect(), &clip);
        s.copy();
        s.regenerate();
        s.copy_from_history(0);
        assert_eq!(s.history().len(), 1);
        assert_eq!(clip.contents.lock().unwrap().last().unwrap(), "012345");

        s.copy_from_history(3);
        assert!(matches!(s.status(), Status::Error(_)));
    }

    #[test]
    fn clipboard_failure_leaves_history() {
        let clip = FakeClipboard {
            broken: true,
            ..FakeClipboard::default()
        };
        let mut s = session((1..=6).collect(), &clip);
        s.copy();
        assert!(s.history().is_empty());
        assert!(matches!(s.status(), Status::Error(e) if e.contains("no display")));
    }
}
