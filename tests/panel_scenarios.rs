//! End-to-end tap routing through the public API.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rover_remote::panel::{ControlPanel, Handler, Intent, PanelHandlers, TelemetryReading};

/// Six handlers, each bumping its own counter.
fn counting_panel() -> (ControlPanel, HashMap<Intent, Arc<AtomicUsize>>) {
    let counters: HashMap<Intent, Arc<AtomicUsize>> = Intent::ALL
        .into_iter()
        .map(|i| (i, Arc::new(AtomicUsize::new(0))))
        .collect();
    let counter = |intent: Intent| -> Handler {
        let c = Arc::clone(&counters[&intent]);
        Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    };
    let handlers = PanelHandlers {
        on_turn_left: counter(Intent::TurnLeft),
        on_turn_right: counter(Intent::TurnRight),
        on_flashlight_toggle: counter(Intent::ToggleFlashlight),
        on_fetch_data: counter(Intent::FetchData),
        on_forward: counter(Intent::MoveForward),
        on_backward: counter(Intent::MoveBackward),
    };
    (ControlPanel::new(handlers), counters)
}

fn count(counters: &HashMap<Intent, Arc<AtomicUsize>>, intent: Intent) -> usize {
    counters[&intent].load(Ordering::SeqCst)
}

#[test]
fn each_control_invokes_only_its_handler() {
    for tapped in Intent::ALL {
        let (mut panel, counters) = counting_panel();
        panel.tap(tapped);
        for intent in Intent::ALL {
            let expected = usize::from(intent == tapped);
            assert_eq!(count(&counters, intent), expected, "tapped {tapped}, checked {intent}");
        }
    }
}

#[test]
fn mixed_tap_scenario() {
    let (mut panel, counters) = counting_panel();
    panel.tap(Intent::TurnLeft);
    panel.tap(Intent::FetchData);
    panel.tap(Intent::MoveForward);
    panel.tap(Intent::MoveForward);

    assert_eq!(count(&counters, Intent::TurnLeft), 1);
    assert_eq!(count(&counters, Intent::FetchData), 1);
    assert_eq!(count(&counters, Intent::MoveForward), 2);
    assert_eq!(count(&counters, Intent::TurnRight), 0);
    assert_eq!(count(&counters, Intent::ToggleFlashlight), 0);
    assert_eq!(count(&counters, Intent::MoveBackward), 0);
}

#[test]
fn rapid_taps_are_each_delivered() {
    let (mut panel, counters) = counting_panel();
    for _ in 0..100 {
        panel.tap(Intent::MoveBackward);
    }
    assert_eq!(count(&counters, Intent::MoveBackward), 100);
}

#[test]
fn default_readouts() {
    let (panel, _) = counting_panel();
    assert_eq!(panel.telemetry(), &TelemetryReading::default());
    assert_eq!(
        panel.telemetry().lines(),
        [
            "Temperature: 23°C".to_string(),
            "Brightness: 75%".to_string(),
            "Humidity: 45%".to_string(),
        ]
    );
}
