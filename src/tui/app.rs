//! TuiApp — the TEA model.
//!
//! All state lives here. Update receives TuiMessages, mutates state.
//! View reads state to produce ratatui widgets.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::panel::ControlPanel;

use super::event::TuiMessage;
use super::toast::Toast;

/// The terminal host state (TEA model).
pub struct TuiApp {
    /// The mounted control panel.
    pub panel: ControlPanel,
    /// Panel area from the last render (mouse hit testing needs it).
    pub panel_area: Rect,
    /// Toast currently on the status line.
    pub toast: Option<Toast>,
    /// How long a toast stays up.
    pub toast_duration: Duration,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(panel: ControlPanel, toast_duration: Duration) -> Self {
        Self {
            panel,
            panel_area: Rect::default(),
            toast: None,
            toast_duration,
            should_quit: false,
        }
    }

    /// Apply one message.
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => super::input::handle_key(self, key),
            TuiMessage::Mouse(mouse) => super::input::handle_mouse(self, mouse),
            TuiMessage::Notify(text) => self.show_toast(text, Instant::now()),
            TuiMessage::Tick => self.expire_toast(Instant::now()),
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Show `text`, replacing any toast already up.
    pub fn show_toast(&mut self, text: String, now: Instant) {
        self.toast = Some(Toast::new(text, now));
    }

    /// Clear the toast once it has been up for `toast_duration`.
    pub fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(now, self.toast_duration))
        {
            self.toast = None;
        }
    }
}
