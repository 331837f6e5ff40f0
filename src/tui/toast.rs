//! Toast notifications, and the handlers that post them.
//!
//! The panel itself knows nothing about toasts. The terminal host builds
//! six handlers that each push a fixed message down a channel; the main
//! loop turns those into [`TuiMessage::Notify`](super::event::TuiMessage).

use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::panel::{Handler, Intent, PanelHandlers};

/// A short-lived status-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(text: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            text: text.into(),
            shown_at,
        }
    }

    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= duration
    }
}

/// Message shown when `intent` is tapped.
pub fn toast_text(intent: Intent) -> &'static str {
    match intent {
        Intent::TurnLeft => "TURN LEFT",
        Intent::TurnRight => "TURN RIGHT",
        Intent::ToggleFlashlight => "Flashlight toggled",
        Intent::FetchData => "Fetching data",
        Intent::MoveForward => "FORWARD",
        Intent::MoveBackward => "BACKWARD",
    }
}

fn notify(tx: &UnboundedSender<String>, intent: Intent) -> Handler {
    let tx = tx.clone();
    Box::new(move || {
        let text = toast_text(intent);
        info!(%intent, "{text}");
        if tx.send(text.to_string()).is_err() {
            warn!("toast channel closed, dropping {text:?}");
        }
    })
}

/// Handlers that post each intent's toast message to `tx`.
pub fn toast_handlers(tx: UnboundedSender<String>) -> PanelHandlers {
    PanelHandlers {
        on_turn_left: notify(&tx, Intent::TurnLeft),
        on_turn_right: notify(&tx, Intent::TurnRight),
        on_flashlight_toggle: notify(&tx, Intent::ToggleFlashlight),
        on_fetch_data: notify(&tx, Intent::FetchData),
        on_forward: notify(&tx, Intent::MoveForward),
        on_backward: notify(&tx, Intent::MoveBackward),
    }
}
