//! Key and mouse binding dispatch for the TUI.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::panel::Intent;

use super::app::TuiApp;

/// The intent a key press stands for, if any.
pub fn key_intent(key: &KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Intent::MoveForward),
        KeyCode::Down | KeyCode::Char('s') => Some(Intent::MoveBackward),
        KeyCode::Left | KeyCode::Char('a') => Some(Intent::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(Intent::TurnRight),
        KeyCode::Char('f') => Some(Intent::ToggleFlashlight),
        KeyCode::Char('r') | KeyCode::Enter => Some(Intent::FetchData),
        _ => None,
    }
}

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    // Release events would double every tap on terminals that report them.
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    if let Some(intent) = key_intent(&key) {
        app.panel.tap(intent);
    }
}

/// Handle a mouse event. A left-button press on a control is a tap.
pub fn handle_mouse(app: &mut TuiApp, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(intent) = app.panel.hit_test(app.panel_area, mouse.column, mouse.row) {
        app.panel.tap(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use ratatui::layout::Rect;

    use crate::panel::{ControlPanel, PanelHandlers, PanelLayout};

    fn recording_app() -> (TuiApp, Arc<Mutex<Vec<Intent>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let panel = ControlPanel::new(PanelHandlers::from_fn(move |i| {
            sink.lock().unwrap().push(i);
        }));
        let mut app = TuiApp::new(panel, Duration::from_secs(2));
        app.panel_area = Rect::new(1, 1, 90, 30);
        (app, seen)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16, kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(key_intent(&press(KeyCode::Up)), Some(Intent::MoveForward));
        assert_eq!(key_intent(&press(KeyCode::Down)), Some(Intent::MoveBackward));
        assert_eq!(key_intent(&press(KeyCode::Left)), Some(Intent::TurnLeft));
        assert_eq!(key_intent(&press(KeyCode::Right)), Some(Intent::TurnRight));
        assert_eq!(key_intent(&press(KeyCode::Char('f'))), Some(Intent::ToggleFlashlight));
        assert_eq!(key_intent(&press(KeyCode::Char('r'))), Some(Intent::FetchData));
        assert_eq!(key_intent(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn key_press_taps_once() {
        let (mut app, seen) = recording_app();
        handle_key(&mut app, press(KeyCode::Char('w')));
        handle_key(&mut app, press(KeyCode::Char('w')));
        assert_eq!(*seen.lock().unwrap(), vec![Intent::MoveForward; 2]);
    }

    #[test]
    fn key_release_is_ignored() {
        let (mut app, seen) = recording_app();
        let release = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        handle_key(&mut app, release);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let (mut app, seen) = recording_app();
            handle_key(&mut app, key);
            assert!(app.should_quit);
            assert!(seen.lock().unwrap().is_empty());
        }
    }

    #[test]
    fn click_on_button_taps_it() {
        let (mut app, seen) = recording_app();
        let layout = PanelLayout::compute(app.panel_area);
        let fetch = layout.fetch_data;
        handle_mouse(
            &mut app,
            click(fetch.x + 2, fetch.y + 1, MouseEventKind::Down(MouseButton::Left)),
        );
        assert_eq!(*seen.lock().unwrap(), vec![Intent::FetchData]);
    }

    #[test]
    fn click_outside_buttons_does_nothing() {
        let (mut app, seen) = recording_app();
        let labels = PanelLayout::compute(app.panel_area).labels;
        handle_mouse(
            &mut app,
            click(labels[1].x, labels[1].y, MouseEventKind::Down(MouseButton::Left)),
        );
        handle_mouse(&mut app, click(0, 0, MouseEventKind::Down(MouseButton::Left)));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn only_left_press_counts() {
        let (mut app, seen) = recording_app();
        let fwd = PanelLayout::compute(app.panel_area).forward;
        let (x, y) = (fwd.x + 1, fwd.y + 1);
        handle_mouse(&mut app, click(x, y, MouseEventKind::Up(MouseButton::Left)));
        handle_mouse(&mut app, click(x, y, MouseEventKind::Down(MouseButton::Right)));
        handle_mouse(&mut app, click(x, y, MouseEventKind::Moved));
        assert!(seen.lock().unwrap().is_empty());
    }
}
