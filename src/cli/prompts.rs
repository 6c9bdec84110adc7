//! Warnings, errors and confirmations for one-shot CLI output.
//!
//! Passwords go to stdout; everything else goes through here so `--quiet`
//! can silence it.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use kodeord::StrengthResult;
use kodeord::pass::{MAX_LENGTH, MIN_LENGTH};

use crate::terminal::{RED, RESET, strength_meter};

const YELLOW: &str = "\x1b[33m";

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Quiet mode or stdin is not a terminal.
fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) != 1 }
}

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn length_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Length {requested} is outside {MIN_LENGTH}-{MAX_LENGTH}, using {used}"
    ));
}

pub fn settings_saved() {
    if !quiet() {
        eprintln!("Settings saved");
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        eprintln!("*** {count} password(s) COPIED TO CLIPBOARD ***");
    }
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Score report for `--analyze`. The score line is always printed; the
/// meter and feedback only outside quiet mode.
pub fn strength_report(result: &StrengthResult) {
    println!("{}/4 {}", result.score, result.label);
    if quiet() {
        return;
    }
    eprintln!("{}", strength_meter(result));
    for line in &result.feedback {
        eprintln!("  - {line}");
    }
}
