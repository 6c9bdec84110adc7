use kodeord::pass::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};
use kodeord::{CharacterClass, History, RandomSource};

use super::session::{Session, Status};
use crate::terminal::{
    BOLD, BOX_WIDTH, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    clear, flush, print_error, print_rule, print_success, strength_meter,
};

pub fn enter_prompt() -> &'static str {
    "Menu option (Enter for a new password)"
}

/// Menu key for each class toggle, in display order.
pub const CLASS_KEYS: [(&str, CharacterClass); 5] = [
    ("2", CharacterClass::Lowercase),
    ("3", CharacterClass::Uppercase),
    ("4", CharacterClass::Digit),
    ("5", CharacterClass::Symbol),
    ("6", CharacterClass::Danish),
];

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn print_password(password: &str) {
    if password.is_empty() {
        box_line("(no password)");
        return;
    }
    let chars: Vec<char> = password.chars().collect();
    for chunk in chars.chunks(BOX_WIDTH - 4) {
        let line: String = chunk.iter().collect();
        box_line(&format!("{BOLD}{line}{RESET}"));
    }
}

/// Alphabet summary under the meter. The meter is the only strength verdict.
fn alphabet_line(config: &GenerationConfig) -> String {
    format!("Alphabet: {} chars", config.alphabet().len())
}

pub fn print_main_screen<R: RandomSource>(session: &Session<R>) {
    clear();
    let settings = session.settings();
    let config = settings.config();
    let strength = session.strength();

    box_top("Kodeord");
    print_password(session.password());
    box_line("");
    box_line(&format!("Strength: {}", strength_meter(strength)));
    match strength.hint() {
        Some(hint) => box_line(&format!("Tip: {hint}")),
        None => box_line(""),
    }
    print_rule();
    box_line(&alphabet_line(&config));
    box_line(&format!("Source: {}", session.source_name()));
    box_bottom();
    println!();

    box_top("Settings");
    box_line(&format!(
        "  1) Length: {} ({MIN_LENGTH}-{MAX_LENGTH})",
        settings.pass_length
    ));
    for (key, class) in CLASS_KEYS {
        box_line(&format!(
            "  {key}) {} {}",
            checkbox(settings.uses(class)),
            class.name()
        ));
    }
    box_line("");
    print_rule();
    box_line_center("c) copy | e) edit | h) history | ?) help");
    box_line_center("s) save settings | r) defaults | q) quit");
    box_bottom();

    print_status(session.status());
    flush();
}

fn print_status(status: &Status) {
    match status {
        Status::Idle => println!(),
        Status::Copied => print_success("✓ Copied!"),
        Status::Saved => print_success("Settings saved."),
        Status::Error(msg) => print_error(msg),
    }
}

pub fn print_history(history: &History) {
    clear();
    box_top("Recent passwords");
    if history.is_empty() {
        box_line("Nothing copied yet.");
    }
    for (i, pw) in history.iter().enumerate() {
        box_line(&format!("  {}) {}", i + 1, pw));
    }
    box_bottom();
    println!();
    flush();
}

pub fn print_invalid_option() {
    print_error("Invalid option.");
}

pub fn print_help() {
    box_top("Kodeord");
    box_line_center("Strong, secure passwords, generated locally");
    box_line("");
    box_line("USAGE:");
    box_line("  kodeord              Interactive generator");
    box_line("  kodeord [OPTIONS]    One-shot generation");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password (6-64, default 16)");
    box_opt("  -n, --number <N>", "How many passwords to print");
    box_opt("      --no-lower", "Leave out a-z");
    box_opt("      --no-upper", "Leave out A-Z");
    box_opt("      --no-digits", "Leave out 0-9");
    box_opt("      --no-symbols", "Leave out !@#$%^&*()_+-=[]{}|;:,.<>?");
    box_opt("      --danish", "Include æøåÆØÅ");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -a, --analyze <TEXT>", "Score TEXT and explain the score");
    box_opt("  -s, --save", "Save these options as defaults");
    box_opt("  -d, --default", "Ignore saved defaults");
    box_opt("  -q, --quiet", "Only print passwords");
    box_opt("  -i, --interactive", "Open this generator");
    box_line("");
    box_line(&format!("{UNDERLINE}Tips for secure passwords{RESET}:"));
    box_line("  • Use at least 12 characters");
    box_line("  • Mix upper and lower case letters, digits and symbols");
    box_line("  • Use a unique password for every account");
    box_line("  • Consider a password manager");
    box_line("");
    box_line(&format!("{UNDERLINE}Security{RESET}:"));
    box_line("  • Passwords are generated locally on this machine");
    box_line("  • Nothing is sent anywhere or written to disk");
    box_line("  • Randomness comes from the OS cryptographic generator");
    box_line("  • Set KODEORD_LOG=debug for diagnostics (never logs passwords)");
    box_bottom();
    println!();
}
