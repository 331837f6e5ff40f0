//! Mounting the panel into a ratatui buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use super::intent::Intent;
use super::layout::PanelLayout;
use super::ControlPanel;

impl Widget for &ControlPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = PanelLayout::compute(area);

        for intent in Intent::ALL {
            render_button(intent, layout.button(intent), buf);
        }

        let label_style = Style::default().fg(Color::White);
        for (line, rect) in self.telemetry().lines().into_iter().zip(layout.labels) {
            Paragraph::new(line).style(label_style).render(rect, buf);
        }
    }
}

fn render_button(intent: Intent, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    block.render(area, buf);

    // Caption sits on the middle row of the button.
    let [caption_row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(inner);
    Paragraph::new(intent.caption())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .render(caption_row, buf);
}
