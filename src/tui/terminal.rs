//! Terminal mode setup and restore.
//!
//! [`TerminalGuard`] owns raw mode, the alternate screen and mouse capture.
//! Dropping it restores all three, whichever way `run_tui` exits. The panic
//! hook restores first so the panic message lands on the normal screen.

use std::io::{self, Stdout, Write};
use std::sync::Once;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;

/// Best-effort restore. Each step runs even if an earlier one failed.
pub fn restore_terminal<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(LeaveAlternateScreen);
}

/// Restores the terminal when dropped.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl TerminalGuard<Stdout> {
    /// Enter raw mode, the alternate screen and mouse capture.
    ///
    /// The guard exists before the first mode change, so a failure part way
    /// through still undoes whatever was already switched on.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        let mut guard = Self { out: io::stdout() };
        enable_raw_mode()?;
        guard
            .out
            .execute(EnterAlternateScreen)?
            .execute(EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    /// Guard over an already prepared writer.
    pub fn attach(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        restore_terminal(&mut self.out);
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal(&mut io::stdout());
            previous(info);
        }));
    });
}
