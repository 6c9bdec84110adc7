use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

mod cli;
mod exits;
mod settings;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().filter_or("KODEORD_LOG", "warn")).init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let flags = CliFlags::parse();
    let stdout_tty = unsafe { libc::isatty(1) == 1 };

    if flags.interactive || (!flags.has_explicit_args() && stdout_tty) {
        tui::run();
        ExitCode::SUCCESS
    } else {
        cli::run(flags)
    }
}
