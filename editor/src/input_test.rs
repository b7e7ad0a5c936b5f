use serde_json::json;

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_serde_names() {
    assert_eq!(serde_json::to_value(Tool::Erase).unwrap_or_default(), json!("erase"));
    let t: Tool = serde_json::from_value(json!("rectangle")).unwrap_or_default();
    assert_eq!(t, Tool::Rectangle);
}

// =============================================================
// Modifiers / Button / Key
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
    assert!(!m.command());
}

#[test]
fn modifiers_command_is_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Default::default() }.command());
    assert!(Modifiers { meta: true, ..Default::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Default::default() }.command());
}

#[test]
fn button_default_is_primary() {
    assert_eq!(Button::default(), Button::Primary);
}

#[test]
fn key_comparison_ignores_case() {
    assert!(Key::new("Z").is("z"));
    assert!(Key::new("Delete").is("delete"));
    assert!(!Key::new("y").is("z"));
}

#[test]
fn key_space_aliases() {
    assert!(Key::new(" ").is_space());
    assert!(Key::new("Space").is_space());
    assert!(Key::new("Spacebar").is_space());
    assert!(!Key::new("Enter").is_space());
}

// =============================================================
// Event serde
// =============================================================

#[test]
fn pointer_event_defaults_button_and_modifiers() {
    let ev: Event = serde_json::from_value(json!({
        "type": "pointer_down",
        "screen": { "x": 3.0, "y": 4.0 }
    }))
    .unwrap_or(Event::Blur);
    assert_eq!(ev, Event::PointerDown(PointerEvent::new(3.0, 4.0)));
}

#[test]
fn pointer_event_with_modifiers() {
    let ev: Event = serde_json::from_value(json!({
        "type": "pointer_move",
        "screen": { "x": 1.0, "y": 2.0 },
        "button": "middle",
        "modifiers": { "shift": true }
    }))
    .unwrap_or(Event::Blur);
    let expected = PointerEvent::new(1.0, 2.0)
        .with_button(Button::Middle)
        .with_modifiers(Modifiers { shift: true, ..Default::default() });
    assert_eq!(ev, Event::PointerMove(expected));
}

#[test]
fn wheel_and_key_events_parse() {
    let ev: Event = serde_json::from_value(json!({
        "type": "wheel",
        "screen": { "x": 0.0, "y": 0.0 },
        "delta": { "dx": 0.0, "dy": -100.0 },
        "modifiers": { "ctrl": true }
    }))
    .unwrap_or(Event::Blur);
    assert!(matches!(ev, Event::Wheel { delta, modifiers, .. } if delta.dy < 0.0 && modifiers.ctrl));

    let ev: Event = serde_json::from_value(json!({ "type": "key_down", "key": "Delete" })).unwrap_or(Event::Blur);
    assert_eq!(ev, Event::KeyDown { key: Key::new("Delete"), modifiers: Modifiers::default() });
}

#[test]
fn blur_event_parses() {
    let ev: Result<Event, _> = serde_json::from_value(json!({ "type": "blur" }));
    assert!(matches!(ev, Ok(Event::Blur)));
}

#[test]
fn unknown_event_type_is_rejected() {
    let ev: Result<Event, _> = serde_json::from_value(json!({ "type": "double_click" }));
    assert!(ev.is_err());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let s = InputState::default();
    assert!(s.is_idle());
    assert_eq!(s.name(), "idle");
}

#[test]
fn input_state_names() {
    let s = InputState::Drawing { tool: Tool::Pencil };
    assert!(!s.is_idle());
    assert_eq!(s.name(), "drawing");
    let s = InputState::Marquee { marquee: Marquee::begin(Point::default()), additive: true };
    assert_eq!(s.name(), "marquee");
}
