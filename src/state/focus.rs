//! Focus System - Focus state and callbacks.
//!
//! Manages which component currently receives keystrokes:
//! - `focused_index` signal (currently focused component)
//! - Focus callbacks (onFocus/onBlur)
//!
//! `blur()` is also the keyboard-dismiss analog: when the code input fills
//! up it dismisses the keyboard by blurring the hidden entry, which fires
//! the entry's blur callbacks.
//!
//! Focusing requires the component to be allocated and focusable. It does
//! NOT require visibility: the hidden entry is visually suppressed yet is
//! the real keystroke receiver.
//!
//! # Example
//!
//! ```ignore
//! use tui_code_input::state::focus;
//!
//! // Focus a component
//! focus::focus(entry_index);
//!
//! // Register callbacks
//! let cleanup = focus::register_callbacks(index, FocusCallbacks {
//!     on_focus: Some(Box::new(|| println!("Focused!"))),
//!     on_blur: Some(Box::new(|| println!("Blurred!"))),
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use spark_signals::{signal, Signal};
use crate::engine::arrays::interaction;
use crate::engine::is_allocated;

// =============================================================================
// FOCUSED INDEX SIGNAL
// =============================================================================

thread_local! {
    static FOCUSED_INDEX: Signal<i32> = signal(-1);
}

/// Get the currently focused component index (-1 if none)
pub fn get_focused_index() -> i32 {
    FOCUSED_INDEX.with(|s| s.get())
}

/// Check if any component is focused
pub fn has_focus() -> bool {
    get_focused_index() >= 0
}

/// Check if specific component is focused
pub fn is_focused(index: usize) -> bool {
    get_focused_index() == index as i32
}

// =============================================================================
// FOCUS CALLBACKS
// =============================================================================

/// Callbacks fired when focus changes
#[derive(Default)]
pub struct FocusCallbacks {
    pub on_focus: Option<Box<dyn Fn()>>,
    pub on_blur: Option<Box<dyn Fn()>>,
}

thread_local! {
    // Multiple callbacks per index supported
    static FOCUS_CALLBACK_REGISTRY: RefCell<HashMap<usize, Vec<FocusCallbacks>>> = RefCell::new(HashMap::new());
}

/// Register focus callbacks for a component.
/// Returns cleanup function to unregister.
pub fn register_callbacks(index: usize, callbacks: FocusCallbacks) -> impl FnOnce() {
    let callback_id = FOCUS_CALLBACK_REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let list = reg.entry(index).or_insert_with(Vec::new);
        let id = list.len();
        list.push(callbacks);
        id
    });

    move || {
        FOCUS_CALLBACK_REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(list) = reg.get_mut(&index) {
                if callback_id < list.len() {
                    // Mark as removed (can't easily remove from Vec while preserving IDs)
                    list[callback_id].on_focus = None;
                    list[callback_id].on_blur = None;
                }
                // Clean up if all callbacks removed
                if list.iter().all(|cb| cb.on_focus.is_none() && cb.on_blur.is_none()) {
                    reg.remove(&index);
                }
            }
        });
    }
}

/// Internal: Set focus and fire callbacks at the source
fn set_focus_with_callbacks(new_index: i32) {
    let old_index = get_focused_index();

    // No change, no callbacks
    if old_index == new_index {
        return;
    }

    // Fire onBlur for all callbacks on old focus
    if old_index >= 0 {
        FOCUS_CALLBACK_REGISTRY.with(|reg| {
            let reg = reg.borrow();
            if let Some(callbacks) = reg.get(&(old_index as usize)) {
                for cb in callbacks {
                    if let Some(ref on_blur) = cb.on_blur {
                        on_blur();
                    }
                }
            }
        });
    }

    // Update reactive state
    FOCUSED_INDEX.with(|s| s.set(new_index));

    // Fire onFocus for all callbacks on new focus
    if new_index >= 0 {
        FOCUS_CALLBACK_REGISTRY.with(|reg| {
            let reg = reg.borrow();
            if let Some(callbacks) = reg.get(&(new_index as usize)) {
                for cb in callbacks {
                    if let Some(ref on_focus) = cb.on_focus {
                        on_focus();
                    }
                }
            }
        });
    }
}

// =============================================================================
// FOCUS OPERATIONS
// =============================================================================

/// Focus a specific component by index.
///
/// No-op (returns false) when the index is not allocated or not focusable.
pub fn focus(index: usize) -> bool {
    if is_allocated(index) && interaction::get_focusable(index) {
        set_focus_with_callbacks(index as i32);
        return true;
    }
    false
}

/// Clear focus (no component focused).
///
/// This is how keyboard dismissal is modeled: the focused entry loses
/// focus, and its blur callbacks fire.
pub fn blur() {
    if get_focused_index() >= 0 {
        set_focus_with_callbacks(-1);
    }
}

/// Clean up focus state for a released component index.
pub fn cleanup_index(index: usize) {
    FOCUS_CALLBACK_REGISTRY.with(|reg| {
        reg.borrow_mut().remove(&index);
    });
    // Don't fire blur callbacks for a component that no longer exists
    if get_focused_index() == index as i32 {
        FOCUSED_INDEX.with(|s| s.set(-1));
    }
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Reset all focus state (for testing)
pub fn reset_focus_state() {
    FOCUSED_INDEX.with(|s| s.set(-1));
    FOCUS_CALLBACK_REGISTRY.with(|reg| reg.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{allocate_index, reset_registry};
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_registry();
        reset_focus_state();
    }

    fn focusable_component() -> usize {
        let index = allocate_index(None);
        interaction::set_focusable(index, true);
        index
    }

    #[test]
    fn test_initial_state() {
        setup();
        assert_eq!(get_focused_index(), -1);
        assert!(!has_focus());
    }

    #[test]
    fn test_focus_single_component() {
        setup();

        let index = focusable_component();

        assert!(focus(index));
        assert_eq!(get_focused_index(), index as i32);
        assert!(has_focus());
        assert!(is_focused(index));
    }

    #[test]
    fn test_focus_non_focusable() {
        setup();

        let index = allocate_index(None);

        assert!(!focus(index));
        assert_eq!(get_focused_index(), -1);
    }

    #[test]
    fn test_focus_unallocated_is_noop() {
        setup();

        assert!(!focus(17));
        assert!(!has_focus());
    }

    #[test]
    fn test_focus_does_not_require_visibility() {
        setup();

        // The hidden entry: invisible but focusable
        let index = focusable_component();
        crate::engine::arrays::core::set_visible(index, false);

        assert!(focus(index));
        assert!(is_focused(index));
    }

    #[test]
    fn test_focus_callbacks() {
        setup();

        let a = focusable_component();
        let b = focusable_component();

        let focus_count = Rc::new(Cell::new(0));
        let blur_count = Rc::new(Cell::new(0));

        let focus_count_clone = focus_count.clone();
        let blur_count_clone = blur_count.clone();

        let _cleanup = register_callbacks(a, FocusCallbacks {
            on_focus: Some(Box::new(move || {
                focus_count_clone.set(focus_count_clone.get() + 1);
            })),
            on_blur: Some(Box::new(move || {
                blur_count_clone.set(blur_count_clone.get() + 1);
            })),
        });

        // Focus component a
        focus(a);
        assert_eq!(focus_count.get(), 1);
        assert_eq!(blur_count.get(), 0);

        // Focus component b (blurs a)
        focus(b);
        assert_eq!(focus_count.get(), 1);
        assert_eq!(blur_count.get(), 1);

        // Focus back to a
        focus(a);
        assert_eq!(focus_count.get(), 2);
        assert_eq!(blur_count.get(), 1);
    }

    #[test]
    fn test_blur_fires_callbacks() {
        setup();

        let index = focusable_component();

        let blurred = Rc::new(Cell::new(false));
        let blurred_clone = blurred.clone();

        let _cleanup = register_callbacks(index, FocusCallbacks {
            on_blur: Some(Box::new(move || blurred_clone.set(true))),
            ..Default::default()
        });

        focus(index);
        assert!(has_focus());

        blur();
        assert!(!has_focus());
        assert!(blurred.get());

        // Second blur is a no-op
        blurred.set(false);
        blur();
        assert!(!blurred.get());
    }

    #[test]
    fn test_refocus_same_index_no_callbacks() {
        setup();

        let index = focusable_component();

        let focus_count = Rc::new(Cell::new(0));
        let focus_count_clone = focus_count.clone();

        let _cleanup = register_callbacks(index, FocusCallbacks {
            on_focus: Some(Box::new(move || {
                focus_count_clone.set(focus_count_clone.get() + 1);
            })),
            ..Default::default()
        });

        focus(index);
        focus(index);
        assert_eq!(focus_count.get(), 1);
    }

    #[test]
    fn test_callback_cleanup() {
        setup();

        let index = focusable_component();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = register_callbacks(index, FocusCallbacks {
            on_focus: Some(Box::new(move || {
                count_clone.set(count_clone.get() + 1);
            })),
            ..Default::default()
        });

        focus(index);
        assert_eq!(count.get(), 1);

        blur();
        cleanup();

        focus(index);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cleanup_index_silently_drops_focus() {
        setup();

        let index = focusable_component();

        let blur_count = Rc::new(Cell::new(0));
        let blur_clone = blur_count.clone();

        let _cleanup = register_callbacks(index, FocusCallbacks {
            on_blur: Some(Box::new(move || {
                blur_clone.set(blur_clone.get() + 1);
            })),
            ..Default::default()
        });

        focus(index);
        cleanup_index(index);

        // Focus dropped without firing callbacks for the dead component
        assert!(!has_focus());
        assert_eq!(blur_count.get(), 0);
    }
}
