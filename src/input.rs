//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the keyboard and press modules.
//! Provides event polling, conversion, and routing.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `route_event` - Dispatch event to the appropriate handler
//!
//! # Example
//!
//! ```ignore
//! use tui_code_input::input::{poll_event, route_event};
//! use tui_code_input::state::interactions;
//! use std::time::Duration;
//!
//! // Event loop
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(event);
//!     }
//!     interactions::flush();
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent,
    KeyCode, KeyModifiers,
    KeyEvent as CrosstermKeyEvent,
    MouseButton as CrosstermMouseButton,
    MouseEventKind,
    poll, read,
};
use std::time::Duration;

use crate::state::keyboard::{KeyboardEvent, KeyState, Modifiers};
use crate::state::{keyboard, press};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified event type for the runtime bridge
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Keyboard event (key press, release, etc.)
    Key(KeyboardEvent),
    /// Left mouse button pressed at (x, y)
    Click(u16, u16),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        crossterm::event::KeyEventKind::Press => KeyState::Press,
        crossterm::event::KeyEventKind::Repeat => KeyState::Repeat,
        crossterm::event::KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: false, // Not exposed by crossterm
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(InputEvent::Key(convert_key_event(key))),
        CrosstermEvent::Mouse(mouse) => {
            // Only left-button presses matter: the row is a single tap target
            if mouse.kind == MouseEventKind::Down(CrosstermMouseButton::Left) {
                Ok(InputEvent::Click(mouse.column, mouse.row))
            } else {
                Ok(InputEvent::None)
            }
        }
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route an event to the appropriate handler.
/// Returns true if any handler consumed the event.
pub fn route_event(event: InputEvent) -> bool {
    match event {
        InputEvent::Key(key) => {
            log::trace!("key event: {:?}", key.key);
            keyboard::dispatch(key)
        }
        InputEvent::Click(x, y) => {
            log::trace!("click at ({x}, {y})");
            press::dispatch_at(x, y)
        }
        InputEvent::Resize(..) | InputEvent::None => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
