//! One-shot command-line mode.

mod context;
mod flags;
pub mod prompts;

use std::process::ExitCode;

pub use context::Context;
pub use flags::CliFlags;

/// Run a one-shot command. Errors are reported on stderr.
pub fn run(flags: CliFlags) -> ExitCode {
    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
