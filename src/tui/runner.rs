//! TUI runner — main loop that wires everything together.
//!
//! Creates terminal, starts the input reader, runs main TEA loop.

use std::io;
use std::time::Duration;

use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{info, warn};

use crate::config::PanelConfig;
use crate::panel::ControlPanel;

use super::app::TuiApp;
use super::event::{spawn_input_reader, TuiMessage};
use super::layout;
use super::terminal::TerminalGuard;
use super::toast::toast_handlers;

/// Build the app the binary runs: toast-posting handlers, configured readouts.
pub fn build_app(config: &PanelConfig) -> (TuiApp, UnboundedReceiver<String>) {
    let (toast_tx, toast_rx) = mpsc::unbounded_channel();
    let panel = ControlPanel::with_telemetry(toast_handlers(toast_tx), config.telemetry.clone());
    (TuiApp::new(panel, config.toast_duration()), toast_rx)
}

/// Run the TUI main loop. Blocks until quit.
pub async fn run_tui(config: &PanelConfig) -> anyhow::Result<()> {
    let (mut app, mut toast_rx) = build_app(config);

    // Restored when the guard drops, on every exit path.
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(input_tx);

    info!("control panel up");
    let result = event_loop(&mut terminal, &mut app, &mut input_rx, &mut toast_rx).await;

    // Closing the channel lets the reader exit on its next poll.
    drop(input_rx);
    join_reader(reader).await;

    drop(terminal);
    drop(guard);
    info!("control panel closed");
    result
}

/// Wait for the input reader to stop. Returns false if it panicked.
async fn join_reader(reader: JoinHandle<()>) -> bool {
    match reader.await {
        Ok(()) => true,
        Err(e) => {
            warn!("input reader failed: {e}");
            false
        }
    }
}

/// Multiplex input, toasts, tick and render until the app asks to quit.
pub async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut TuiApp,
    input_rx: &mut UnboundedReceiver<TuiMessage>,
    toast_rx: &mut UnboundedReceiver<String>,
) -> anyhow::Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut tick_interval = interval(Duration::from_millis(250)); // 4Hz
    let mut render_interval = interval(Duration::from_millis(33)); // ~30fps

    loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                app.update(TuiMessage::Tick);
            }
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, app))?;
            }
            Some(text) = toast_rx.recv() => {
                app.update(TuiMessage::Notify(text));
            }
            msg = input_rx.recv() => match msg {
                Some(msg) => app.update(msg),
                None => app.update(TuiMessage::Quit),
            },
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
