//! Panel geometry.
//!
//! ```text
//! ┌── left ──────┬── center ────────┬── right ──────┐
//! │              │ [ FLASHLIGHT   ] │               │
//! │              │ [ FETCH DATA   ] │ [     ↑     ] │
//! │  [ ↺ ] [ ↻ ] │                  │               │
//! │              │                  │ [     ↓     ] │
//! │              │ Temperature: ..  │               │
//! │              │ Brightness: ..   │               │
//! │              │ Humidity: ..     │               │
//! └──────────────┴──────────────────┴───────────────┘
//! ```
//!
//! Pure function of the area. Rendering and hit testing both go through
//! [`PanelLayout::compute`], so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

use super::intent::Intent;

/// Height of the rotation and movement buttons.
pub const TALL_BUTTON_HEIGHT: u16 = 5;
/// Height of the flashlight and fetch-data buttons.
pub const BUTTON_HEIGHT: u16 = 3;
/// Width of each rotation button.
pub const TURN_BUTTON_WIDTH: u16 = 7;
/// Columns between the two rotation buttons.
pub const TURN_GAP: u16 = 2;
/// Rows between the forward and backward buttons.
pub const MOVE_GAP: u16 = 1;
/// Rows between stacked elements in the center region.
pub const CENTER_SPACING: u16 = 1;

/// Resolved rectangles for every element of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub left: Rect,
    pub center: Rect,
    pub right: Rect,
    pub turn_left: Rect,
    pub turn_right: Rect,
    pub flashlight: Rect,
    pub fetch_data: Rect,
    pub forward: Rect,
    pub backward: Rect,
    /// Temperature, brightness, humidity rows.
    pub labels: [Rect; 3],
}

impl PanelLayout {
    pub fn compute(area: Rect) -> Self {
        let [left, center, right] = Layout::horizontal([Constraint::Fill(1); 3]).areas(area);

        let [turn_row] = Layout::vertical([Constraint::Length(TALL_BUTTON_HEIGHT)])
            .flex(Flex::Center)
            .areas(left);
        let [turn_left, _, turn_right] = Layout::horizontal([
            Constraint::Length(TURN_BUTTON_WIDTH),
            Constraint::Length(TURN_GAP),
            Constraint::Length(TURN_BUTTON_WIDTH),
        ])
        .flex(Flex::Center)
        .areas(turn_row);

        let [flashlight, fetch_data, _, label_block] = Layout::vertical([
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .spacing(CENTER_SPACING)
        .areas(center);
        let labels = Layout::vertical([Constraint::Length(1); 3]).areas(label_block);

        let [forward, _, backward] = Layout::vertical([
            Constraint::Length(TALL_BUTTON_HEIGHT),
            Constraint::Length(MOVE_GAP),
            Constraint::Length(TALL_BUTTON_HEIGHT),
        ])
        .flex(Flex::Center)
        .areas(right);

        Self {
            left,
            center,
            right,
            turn_left,
            turn_right,
            flashlight,
            fetch_data,
            forward,
            backward,
            labels,
        }
    }

    /// Rectangle of the button bound to `intent`.
    pub fn button(&self, intent: Intent) -> Rect {
        match intent {
            Intent::TurnLeft => self.turn_left,
            Intent::TurnRight => self.turn_right,
            Intent::ToggleFlashlight => self.flashlight,
            Intent::FetchData => self.fetch_data,
            Intent::MoveForward => self.forward,
            Intent::MoveBackward => self.backward,
        }
    }

    /// The button covering the given cell, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Intent> {
        let pos = Position::new(column, row);
        Intent::ALL
            .into_iter()
            .find(|intent| self.button(*intent).contains(pos))
    }
}
