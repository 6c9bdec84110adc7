//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use kodeord::{CharacterClass, Error, OsRandom, Result, analyze, generate_batch};
use log::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::settings::Settings;

/// Application context for one-shot CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Self {
            settings,
            flags,
            clipboard: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.apply_flags();

        if let Some(mut text) = self.flags.analyze.take() {
            prompts::strength_report(&analyze(&text));
            text.zeroize();
            return Ok(());
        }

        if self.flags.save {
            self.settings.save_to_file()?;
            prompts::settings_saved();
        }

        if self.flags.clipboard && !self.open_clipboard() {
            return Ok(());
        }

        self.generate_output()
    }

    /// Apply CLI flags on top of the loaded settings.
    fn apply_flags(&mut self) {
        self.settings.quiet |= self.flags.quiet;
        prompts::set_quiet(self.settings.quiet);

        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        let used = self.settings.config().length;
        if used != self.settings.pass_length {
            prompts::length_clamped(self.settings.pass_length, used);
            self.settings.pass_length = used;
        }

        let classes = &mut self.settings.classes;
        let toggles = [
            (CharacterClass::Lowercase, self.flags.no_lower),
            (CharacterClass::Uppercase, self.flags.no_upper),
            (CharacterClass::Digit, self.flags.no_digits),
            (CharacterClass::Symbol, self.flags.no_symbols),
        ];
        for (class, off) in toggles {
            if off {
                classes.remove(class);
            }
        }
        if self.flags.danish {
            classes.insert(CharacterClass::Danish);
        }
        if classes.is_empty() {
            prompts::warn("No character classes enabled, using letters and digits");
        }

        debug!("cli settings: {:?}", self.settings);
    }

    /// Returns false when the user declined the terminal fallback.
    fn open_clipboard(&mut self) -> bool {
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                info!("clipboard unavailable: {}", e);
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    /// Generate passwords and send them to the clipboard or stdout.
    fn generate_output(&mut self) -> Result<()> {
        let count = self.flags.number.unwrap_or(1);
        let config = self.settings.config();
        let mut rng = OsRandom::new();
        let mut passwords = generate_batch(&mut rng, &config, count)?;

        let result = match self.clipboard.as_mut() {
            Some(ctx) => {
                let mut joined = passwords.join("\n");
                let copied = ctx
                    .set_contents(joined.clone())
                    .map_err(|e| Error::Clipboard(e.to_string()));
                joined.zeroize();
                copied.map(|_| prompts::clipboard_copied(count))
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                passwords
                    .iter()
                    .try_for_each(|p| writeln!(out, "{p}"))
                    .map_err(Error::from)
            }
        };

        passwords.zeroize();
        result
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn context(args: &[&str]) -> Context {
        let argv = ["kodeord", "--default", "--quiet"].iter().chain(args).copied();
        let mut ctx = Context::new(CliFlags::try_parse_from(argv).unwrap());
        ctx.apply_flags();
        ctx
    }

    #[test]
    fn flags_override_defaults() {
        let ctx = context(&["-l", "30", "--no-upper", "--danish"]);
        assert_eq!(ctx.settings.pass_length, 30);
        assert!(!ctx.settings.uses(CharacterClass::Uppercase));
        assert!(ctx.settings.uses(CharacterClass::Lowercase));
        assert!(ctx.settings.uses(CharacterClass::Danish));
        assert!(ctx.settings.quiet);
    }

    #[test]
    fn length_is_clamped() {
        assert_eq!(context(&["-l", "200"]).settings.pass_length, 64);
        assert_eq!(context(&["-l", "2"]).settings.pass_length, 6);
        assert_eq!(context(&[]).settings.pass_length, 16);
    }

    #[test]
    fn all_classes_off_is_allowed() {
        let ctx = context(&["--no-lower", "--no-upper", "--no-digits", "--no-symbols"]);
        assert!(ctx.settings.classes.is_empty());
        assert_eq!(ctx.settings.config().alphabet().len(), 62);
    }
}
