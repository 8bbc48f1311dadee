//! Terminal setup and teardown.
//!
//! Frames go to stderr, which keeps stdout free when vscroll sits in a shell
//! pipeline; logs go to a file for the same reason. Mouse capture is on so the
//! wheel scrolls the list.

use std::io::{self, stderr, BufWriter, Stderr};
use std::panic;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use signal_hook::consts::SIGTERM;

pub type Tui = Terminal<CrosstermBackend<BufWriter<Stderr>>>;

/// Switches to raw mode and the alternate screen and returns the terminal.
///
/// Pair with [`restore_tui`] on every way out of `main`.
///
/// # Errors
///
/// Any failure from crossterm while switching modes, or from `Terminal::new`.
pub fn init_tui() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut out = BufWriter::new(stderr());
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(out))
}

/// Leaves the alternate screen and raw mode. Safe to call more than once.
///
/// # Errors
///
/// Any failure from crossterm while switching modes back.
pub fn restore_tui() -> io::Result<()> {
    execute!(stderr(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Chains a panic hook that puts the terminal back before the default hook
/// prints the message. Install before [`init_tui`].
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_tui();
        previous(info);
    }));
}

/// Returns a flag that flips to `true` when SIGTERM arrives.
///
/// # Errors
///
/// Fails when the handler cannot be registered with the OS.
pub fn register_sigterm() -> io::Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGTERM, Arc::clone(&flag))?;
    Ok(flag)
}
