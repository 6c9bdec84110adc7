//! Interactive terminal generator.

mod input;
mod options;
mod session;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() {
    gen_main_menu();
}
