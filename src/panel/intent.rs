//! The six user intents the panel recognizes.

use std::fmt;

/// A discrete action requested by tapping one of the panel's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    TurnLeft,
    TurnRight,
    ToggleFlashlight,
    FetchData,
    MoveForward,
    MoveBackward,
}

impl Intent {
    /// Every intent, in layout order (left region, center, right).
    pub const ALL: [Intent; 6] = [
        Intent::TurnLeft,
        Intent::TurnRight,
        Intent::ToggleFlashlight,
        Intent::FetchData,
        Intent::MoveForward,
        Intent::MoveBackward,
    ];

    /// Caption drawn inside the button.
    pub fn caption(self) -> &'static str {
        match self {
            Intent::TurnLeft => "\u{21BA}",  // ↺
            Intent::TurnRight => "\u{21BB}", // ↻
            Intent::ToggleFlashlight => "FLASHLIGHT",
            Intent::FetchData => "FETCH DATA",
            Intent::MoveForward => "\u{2191}",  // ↑
            Intent::MoveBackward => "\u{2193}", // ↓
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::TurnLeft => "turn-left",
            Intent::TurnRight => "turn-right",
            Intent::ToggleFlashlight => "flashlight",
            Intent::FetchData => "fetch-data",
            Intent::MoveForward => "forward",
            Intent::MoveBackward => "backward",
        };
        f.write_str(name)
    }
}
