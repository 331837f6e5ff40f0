//! The rover control panel.
//!
//! Six tappable controls and three readout labels. The panel owns no
//! behaviour of its own: every tap is routed to a closure supplied by the
//! embedding application, and the readouts are whatever it was built with.
//! The host decides how taps arrive (keys, mouse) and mounts the panel
//! through its [`ratatui::widgets::Widget`] impl.

pub mod intent;
pub mod layout;
pub mod render;
pub mod telemetry;

use ratatui::layout::Rect;
use tracing::debug;

pub use intent::Intent;
pub use layout::PanelLayout;
pub use telemetry::TelemetryReading;

/// A caller-supplied action bound to one intent.
pub type Handler = Box<dyn FnMut() + Send>;

/// One handler per intent.
pub struct PanelHandlers {
    pub on_turn_left: Handler,
    pub on_turn_right: Handler,
    pub on_flashlight_toggle: Handler,
    pub on_fetch_data: Handler,
    pub on_forward: Handler,
    pub on_backward: Handler,
}

impl PanelHandlers {
    /// Handlers that do nothing. Useful for previews and render tests.
    pub fn noop() -> Self {
        Self::from_fn(|_| {})
    }

    /// Build all six handlers from one closure that receives the intent.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Intent) + Clone + Send + 'static,
    {
        let bind = |intent: Intent| -> Handler {
            let f = f.clone();
            Box::new(move || f(intent))
        };
        Self {
            on_turn_left: bind(Intent::TurnLeft),
            on_turn_right: bind(Intent::TurnRight),
            on_flashlight_toggle: bind(Intent::ToggleFlashlight),
            on_fetch_data: bind(Intent::FetchData),
            on_forward: bind(Intent::MoveForward),
            on_backward: bind(Intent::MoveBackward),
        }
    }

    fn get_mut(&mut self, intent: Intent) -> &mut Handler {
        match intent {
            Intent::TurnLeft => &mut self.on_turn_left,
            Intent::TurnRight => &mut self.on_turn_right,
            Intent::ToggleFlashlight => &mut self.on_flashlight_toggle,
            Intent::FetchData => &mut self.on_fetch_data,
            Intent::MoveForward => &mut self.on_forward,
            Intent::MoveBackward => &mut self.on_backward,
        }
    }
}

/// The control panel view.
pub struct ControlPanel {
    handlers: PanelHandlers,
    telemetry: TelemetryReading,
}

impl ControlPanel {
    /// Panel with the default readouts.
    pub fn new(handlers: PanelHandlers) -> Self {
        Self::with_telemetry(handlers, TelemetryReading::default())
    }

    pub fn with_telemetry(handlers: PanelHandlers, telemetry: TelemetryReading) -> Self {
        Self {
            handlers,
            telemetry,
        }
    }

    /// Invoke the handler bound to `intent`, exactly once.
    ///
    /// No debouncing: two taps mean two calls. A panicking handler unwinds
    /// through here untouched.
    pub fn tap(&mut self, intent: Intent) {
        debug!(%intent, "tap");
        (self.handlers.get_mut(intent))();
    }

    pub fn telemetry(&self) -> &TelemetryReading {
        &self.telemetry
    }

    /// Replace the readouts. Takes effect on the next render.
    pub fn update_telemetry(&mut self, telemetry: TelemetryReading) {
        self.telemetry = telemetry;
    }

    /// The control drawn at (`column`, `row`) when the panel is mounted in `area`.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<Intent> {
        PanelLayout::compute(area).hit_test(column, row)
    }
}
