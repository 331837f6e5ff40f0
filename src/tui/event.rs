//! TUI messages and the input reader.
//!
//! Terminal input is read on a blocking thread and forwarded into the
//! same kind of channel the rest of the loop listens on, so no key or
//! click is dropped when the main `select!` picks another branch.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Mouse input (clicks become taps).
    Mouse(MouseEvent),
    /// A handler asked for a toast.
    Notify(String),
    /// Tick: expire stale toasts.
    Tick,
    /// Quit the TUI.
    Quit,
}

/// How long the reader waits for input before checking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Forward crossterm key and mouse events until the receiver goes away.
pub fn spawn_input_reader(tx: UnboundedSender<TuiMessage>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("input poll failed: {e}");
                    break;
                }
            }
            let msg = match event::read() {
                Ok(Event::Key(key)) => TuiMessage::Input(key),
                Ok(Event::Mouse(mouse)) => TuiMessage::Mouse(mouse),
                Ok(_) => continue,
                Err(e) => {
                    warn!("input read failed: {e}");
                    break;
                }
            };
            if tx.send(msg).is_err() {
                break;
            }
        }
        debug!("input reader stopped");
    })
}
