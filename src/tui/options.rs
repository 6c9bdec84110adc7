use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::session::Session;
use super::text::CLASS_KEYS;
use super::{
    enter_prompt, get_editable_input, get_numeric_input, print_help, print_history,
    print_invalid_option, print_main_screen,
};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

pub fn gen_main_menu() {
    reset_terminal();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {}", e);
        Settings::default()
    });
    let mut session = Session::new(settings);
    let mut print_invalid = false;

    loop {
        print_main_screen(&session);
        if print_invalid {
            print_invalid_option();
            print_invalid = false;
        }

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => continue,
        };
        session.clear_status();

        match menu_options(input.trim(), &mut session) {
            Some(Break) => break,
            Some(Continue) => {}
            None => print_invalid = true,
        }
    }

    clear();
}

/// Dispatch one menu choice. `None` for an unknown option.
fn menu_options(choice: &str, session: &mut Session) -> Option<LoopAction> {
    if let Some((_, class)) = CLASS_KEYS.iter().find(|(key, _)| *key == choice) {
        session.toggle(*class);
        return Some(Continue);
    }

    match choice {
        "" => session.regenerate(),
        "1" => {
            let current = session.settings().pass_length;
            if let Some(len) = get_numeric_input("New password length (6-64)", current) {
                session.set_length(len);
            }
        }
        "c" => session.copy(),
        "e" => {
            if let Some(text) = get_editable_input("Password", session.password()) {
                session.edit(text);
            }
        }
        "h" => history_menu(session),
        "s" => session.save_settings(),
        "r" => session.load_defaults(),
        "?" | "help" => {
            clear();
            print_help();
            let _ = get_editable_input("Press Enter to go back", "");
        }
        "q" => return Some(Break),
        _ => return None,
    }
    Some(Continue)
}

fn history_menu(session: &mut Session) {
    print_history(session.history());
    if session.history().is_empty() {
        let _ = get_editable_input("Press Enter to go back", "");
        return;
    }

    let choice = get_numeric_input("Entry to copy again (Esc to go back)", 0);
    if let Some(n) = choice.filter(|n| *n > 0) {
        session.copy_from_history(n - 1);
    }
}
