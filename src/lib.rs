//! rover-remote — a terminal remote-control panel for a rover.
//!
//! The [`panel`] module is the view: six controls routed to injected
//! handlers, three readout labels. [`tui`] hosts it in a terminal and
//! [`config`] loads the optional YAML overrides.

pub mod config;
pub mod panel;
pub mod tui;
