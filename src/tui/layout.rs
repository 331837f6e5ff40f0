//! Screen layout: the panel plus a status line.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                                                 │
//! │  (control panel, 1-cell margin)                 │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │ toast message, or key hints                     │
//! └─────────────────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::app::TuiApp;

const KEY_HINTS: &str =
    "\u{2190}\u{2192}:Turn  \u{2191}\u{2193}:Move  F:Flashlight  R:Fetch  Click:Tap  Q:Quit";

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &mut TuiApp) {
    let [panel_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
            .margin(1)
            .areas(f.area());

    // Cache for mouse hit testing.
    app.panel_area = panel_area;
    f.render_widget(&app.panel, panel_area);

    let status = match &app.toast {
        Some(toast) => Span::styled(
            toast.text.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(Paragraph::new(status), status_area);
}
