//! Mapping from terminal events to pointer events.
//!
//! A terminal cell on the canvas covers one device pixel horizontally and two
//! vertically (the presenter draws upper-half blocks). Pointer coordinates
//! point at the middle of the clicked terminal cell.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{CanvasLayout, PointerEvent, PointerKind};

/// Map a mouse event to a pointer event on the canvas.
///
/// Only moves and left-button presses are consumed. Events outside the canvas
/// are dropped, as are other buttons, releases and scrolling.
pub fn map_mouse_event(mouse: MouseEvent, layout: &CanvasLayout) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerKind::Move,
        _ => return None,
    };

    if !layout.contains(mouse.column, mouse.row) {
        return None;
    }

    let x = (mouse.column - layout.origin_x) as f32 + 0.5;
    let y = (mouse.row - layout.origin_y) as f32 * 2.0 + 1.0;
    Some(PointerEvent::new(kind, x, y))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Whether `event` dismisses an open message box (any key press or click).
pub fn is_dismiss(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind == KeyEventKind::Press,
        Event::Mouse(mouse) => matches!(mouse.kind, MouseEventKind::Down(_)),
        _ => false,
    }
}
