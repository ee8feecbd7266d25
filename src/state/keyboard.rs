//! Keyboard Module - Keyboard event state and handler registry
//!
//! State and handler registry for keyboard events.
//! Does NOT own stdin (the input module converts terminal events).
//!
//! Dispatch priority: the focused component's handlers run first (the
//! hidden entry consumes digit keys there), then key-specific handlers,
//! then global handlers.
//!
//! # API
//!
//! - `last_event` - Get last keyboard event
//! - `last_key` - Get last key pressed
//! - `on(handler)` - Subscribe to all keyboard events
//! - `on_key(key, fn)` - Subscribe to specific key
//! - `on_focused(i, fn)` - Subscribe when component i has focus
//!
//! # Example
//!
//! ```ignore
//! use tui_code_input::state::keyboard;
//!
//! // Subscribe to events when a component has focus
//! let cleanup = keyboard::on_focused(entry_index, |event| {
//!     println!("Entry got: {}", event.key);
//!     false
//! });
//!
//! // Subscribe to a specific key
//! let cleanup = keyboard::on_key("Escape", || {
//!     println!("Escape pressed!");
//!     true // Consume event
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use spark_signals::{signal, Signal};

use super::focus;

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Check if any modifier other than shift is held.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "7", "Backspace", "Enter")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Box<dyn Fn(&KeyboardEvent) -> bool>;

/// Handler for specific key. Return true to consume the event.
pub type KeySpecificHandler = Box<dyn Fn() -> bool>;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<KeyboardEvent>> = signal(None);
}

/// Get the last keyboard event
pub fn last_event() -> Option<KeyboardEvent> {
    LAST_EVENT.with(|s| s.get())
}

/// Get the last key pressed
pub fn last_key() -> String {
    last_event().map(|e| e.key).unwrap_or_default()
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    global_handlers: Vec<(usize, KeyHandler)>,
    key_handlers: HashMap<String, Vec<(usize, KeySpecificHandler)>>,
    focused_handlers: HashMap<usize, Vec<(usize, KeyHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            global_handlers: Vec::new(),
            key_handlers: HashMap::new(),
            focused_handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Dispatch a keyboard event through the priority chain.
/// Returns true if any handler consumed the event.
///
/// Priority: focused component handlers, then key-specific handlers,
/// then global handlers. Only press events reach handlers.
pub fn dispatch(event: KeyboardEvent) -> bool {
    // Always update reactive state
    LAST_EVENT.with(|s| s.set(Some(event.clone())));

    // Only dispatch press events to handlers
    if event.state != KeyState::Press {
        return false;
    }

    if dispatch_focused(focus::get_focused_index(), &event) {
        return true;
    }

    dispatch_to_handlers(&event)
}

/// Dispatch to key-specific and global handlers only (not focused).
pub fn dispatch_to_handlers(event: &KeyboardEvent) -> bool {
    REGISTRY.with(|reg| {
        let reg = reg.borrow();

        // Dispatch to key-specific handlers
        if let Some(handlers) = reg.key_handlers.get(&event.key) {
            for (_, handler) in handlers {
                if handler() {
                    return true;
                }
            }
        }

        // Dispatch to global handlers
        for (_, handler) in &reg.global_handlers {
            if handler(event) {
                return true;
            }
        }

        false
    })
}

/// Dispatch to focused component handlers.
/// Returns true if consumed.
pub fn dispatch_focused(focused_index: i32, event: &KeyboardEvent) -> bool {
    if focused_index < 0 {
        return false;
    }
    if event.state != KeyState::Press {
        return false;
    }

    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        if let Some(handlers) = reg.focused_handlers.get(&(focused_index as usize)) {
            for (_, handler) in handlers {
                if handler(event) {
                    return true;
                }
            }
        }
        false
    })
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to all keyboard events.
/// Return true from handler to consume the event.
/// Returns cleanup function.
pub fn on<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.global_handlers.push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.global_handlers.retain(|(handler_id, _)| *handler_id != id);
        });
    }
}

/// Subscribe to a specific key.
/// Handler receives no arguments - check last_event if needed.
/// Return true to consume the event.
/// Returns cleanup function.
pub fn on_key<F>(key: &str, handler: F) -> impl FnOnce()
where
    F: Fn() -> bool + 'static,
{
    let key = key.to_string();
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.key_handlers
            .entry(key.clone())
            .or_insert_with(Vec::new)
            .push((id, Box::new(handler)));
        id
    });

    let key_clone = key;
    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.key_handlers.get_mut(&key_clone) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.key_handlers.remove(&key_clone);
                }
            }
        });
    }
}

/// Subscribe to events when a specific component has focus.
/// Return true from handler to consume the event.
/// Returns cleanup function.
pub fn on_focused<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.focused_handlers
            .entry(index)
            .or_insert_with(Vec::new)
            .push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.focused_handlers.get_mut(&index) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.focused_handlers.remove(&index);
                }
            }
        });
    }
}

/// Clean up all handlers for a component index.
/// Called when component is released to prevent memory leaks.
pub fn cleanup_index(index: usize) {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.focused_handlers.remove(&index);
    });
}

/// Clear all state and handlers.
pub fn cleanup() {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.global_handlers.clear();
        reg.key_handlers.clear();
        reg.focused_handlers.clear();
    });
    LAST_EVENT.with(|s| s.set(None));
}

/// Reset keyboard state (for testing)
pub fn reset_keyboard_state() {
    cleanup();
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.next_id = 0;
    });
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate_index, reset_registry};
    use crate::engine::arrays::interaction;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_registry();
        focus::reset_focus_state();
        reset_keyboard_state();
    }

    #[test]
    fn test_initial_state() {
        setup();
        assert!(last_event().is_none());
        assert_eq!(last_key(), "");
    }

    #[test]
    fn test_dispatch_updates_state() {
        setup();

        dispatch(KeyboardEvent::new("7"));
        assert_eq!(last_key(), "7");

        dispatch(KeyboardEvent::new("Backspace"));
        assert_eq!(last_key(), "Backspace");
    }

    #[test]
    fn test_global_handler() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = on(move |_event| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        dispatch(KeyboardEvent::new("1"));
        assert_eq!(count.get(), 1);

        dispatch(KeyboardEvent::new("2"));
        assert_eq!(count.get(), 2);

        cleanup();

        dispatch(KeyboardEvent::new("3"));
        assert_eq!(count.get(), 2); // No more increments
    }

    #[test]
    fn test_key_specific_handler() {
        setup();

        let esc_count = Rc::new(Cell::new(0));
        let esc_clone = esc_count.clone();

        let cleanup = on_key("Escape", move || {
            esc_clone.set(esc_clone.get() + 1);
            true
        });

        dispatch(KeyboardEvent::new("1"));
        assert_eq!(esc_count.get(), 0);

        dispatch(KeyboardEvent::new("Escape"));
        assert_eq!(esc_count.get(), 1);

        cleanup();

        dispatch(KeyboardEvent::new("Escape"));
        assert_eq!(esc_count.get(), 1);
    }

    #[test]
    fn test_handler_consumption() {
        setup();

        let consumed = Rc::new(Cell::new(false));
        let consumed_clone = consumed.clone();

        // First handler consumes
        let _c1 = on_key("Enter", move || {
            consumed_clone.set(true);
            true // Consume
        });

        let reached = Rc::new(Cell::new(false));
        let reached_clone = reached.clone();

        // Second handler should not be called if first consumes
        let _c2 = on(move |_| {
            reached_clone.set(true);
            false
        });

        let result = dispatch(KeyboardEvent::new("Enter"));
        assert!(result); // Event was consumed
        assert!(consumed.get());
        assert!(!reached.get()); // Global handler not reached
    }

    #[test]
    fn test_focused_handler() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = on_focused(5, move |_event| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        let event = KeyboardEvent::new("1");

        // Wrong index - not called
        dispatch_focused(3, &event);
        assert_eq!(count.get(), 0);

        // Correct index - called
        dispatch_focused(5, &event);
        assert_eq!(count.get(), 1);

        cleanup();

        dispatch_focused(5, &event);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_dispatch_routes_focused_first() {
        setup();

        let entry = allocate_index(None);
        interaction::set_focusable(entry, true);
        focus::focus(entry);

        let focused_got = Rc::new(Cell::new(0));
        let focused_clone = focused_got.clone();
        let _c1 = on_focused(entry, move |_| {
            focused_clone.set(focused_clone.get() + 1);
            true // Consume: digit goes into the entry
        });

        let global_got = Rc::new(Cell::new(0));
        let global_clone = global_got.clone();
        let _c2 = on(move |_| {
            global_clone.set(global_clone.get() + 1);
            false
        });

        assert!(dispatch(KeyboardEvent::new("4")));
        assert_eq!(focused_got.get(), 1);
        assert_eq!(global_got.get(), 0);

        // After blur the global handler sees events again
        focus::blur();
        dispatch(KeyboardEvent::new("4"));
        assert_eq!(focused_got.get(), 1);
        assert_eq!(global_got.get(), 1);
    }

    #[test]
    fn test_only_press_dispatched() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let _cleanup = on(move |_| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        // Press - dispatched
        dispatch(KeyboardEvent {
            key: "1".to_string(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        });
        assert_eq!(count.get(), 1);

        // Repeat - not dispatched to handlers
        dispatch(KeyboardEvent {
            key: "1".to_string(),
            modifiers: Modifiers::default(),
            state: KeyState::Repeat,
        });
        assert_eq!(count.get(), 1);

        // Release - not dispatched to handlers
        dispatch(KeyboardEvent {
            key: "1".to_string(),
            modifiers: Modifiers::default(),
            state: KeyState::Release,
        });
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_modifiers() {
        setup();

        let ctrl_pressed = Rc::new(Cell::new(false));
        let ctrl_clone = ctrl_pressed.clone();

        let _cleanup = on(move |event| {
            if event.modifiers.ctrl && event.key == "c" {
                ctrl_clone.set(true);
            }
            false
        });

        dispatch(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(ctrl_pressed.get());

        assert!(Modifiers::ctrl().has_command_modifier());
        assert!(!Modifiers::none().has_command_modifier());
    }
}
