//! Process-level hygiene: terminal restore on exit, signal handling,
//! and no core dumps that could carry a password.

use log::{debug, warn};

/// Put the tty back in cooked mode with echo.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Escape codes only when stdout is a terminal
    const SEQ: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, SEQ.as_ptr() as *const libc::c_void, SEQ.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP. `exit` runs the atexit cleanup.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT: restore the tty, then die with the default action.
extern "C" fn crash_handler(sig: libc::c_int) {
    restore_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install signal handlers and the atexit cleanup. Call early in `main`.
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
    debug!("signal handlers installed");
}

/// Keep passwords out of core files.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    let ok = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } == 0;

    #[cfg(not(target_os = "linux"))]
    let ok = {
        let limit = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) == 0 }
    };

    if !ok {
        warn!("could not disable core dumps");
    }
}
