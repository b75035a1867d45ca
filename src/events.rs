//! Translation of egui's raw input events into handle pointer events.

use eframe::egui;

/// Pointer input the drag handler reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed on the drag handle.
    Press { x: f32 },
    /// Pointer moved anywhere in the window.
    Move { x: f32 },
    /// Primary button released, or the pointer left the window.
    Release,
}

/// Extracts the pointer events of one frame, in order.
///
/// Presses only count when they land inside `handle_rect`; moves and releases
/// are taken from the whole window so a drag keeps tracking once the pointer
/// leaves the handle.
pub fn pointer_events(events: &[egui::Event], handle_rect: egui::Rect) -> Vec<PointerEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } if handle_rect.contains(*pos) => Some(PointerEvent::Press { x: pos.x }),
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => Some(PointerEvent::Release),
            egui::Event::PointerMoved(pos) => Some(PointerEvent::Move { x: pos.x }),
            egui::Event::PointerGone => Some(PointerEvent::Release),
            _ => None,
        })
        .collect()
}
