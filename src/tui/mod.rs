//! Terminal host for the control panel.
//!
//! Owns the terminal, turns keys and clicks into taps, and supplies the
//! panel's handlers. The shipped handlers only post toasts; there is no
//! rover link behind them.
//!
//! ## Architecture (TEA)
//!
//! Model (`TuiApp`) + Update (message handler) + View (render).
//! Immediate mode: the panel is redrawn from scratch every frame.

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod runner;
pub mod terminal;
pub mod toast;
