//! Press Module - Tap dispatch for the code row.
//!
//! The row container is a single tap target: pressing anywhere on it
//! focuses the hidden entry. This module keeps a per-component press
//! handler registry plus hit rectangles so terminal clicks can be mapped
//! to a component by coordinate.
//!
//! # Example
//!
//! ```ignore
//! use tui_code_input::state::press;
//!
//! // React to taps on the row
//! let cleanup = press::on_press(row_index, || {
//!     println!("Row tapped");
//! });
//!
//! // Map a terminal click to the row
//! press::set_hit_rect(row_index, 0, 0, 32, 3);
//! press::dispatch_at(10, 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

// =============================================================================
// TYPES
// =============================================================================

/// A hit rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitRect {
    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Handler for press events.
pub type PressHandler = Box<dyn Fn()>;

// =============================================================================
// REGISTRY
// =============================================================================

thread_local! {
    static PRESS_HANDLERS: RefCell<HashMap<usize, Vec<(usize, PressHandler)>>> = RefCell::new(HashMap::new());
    static HIT_RECTS: RefCell<HashMap<usize, HitRect>> = RefCell::new(HashMap::new());
    static NEXT_ID: RefCell<usize> = const { RefCell::new(0) };
}

/// Register a press handler for a component. Returns cleanup function.
pub fn on_press<F>(index: usize, handler: F) -> impl FnOnce()
where
    F: Fn() + 'static,
{
    let id = NEXT_ID.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    });

    PRESS_HANDLERS.with(|reg| {
        reg.borrow_mut()
            .entry(index)
            .or_insert_with(Vec::new)
            .push((id, Box::new(handler)));
    });

    move || {
        PRESS_HANDLERS.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.get_mut(&index) {
                handlers.retain(|(handler_id, _)| *handler_id != id);
                if handlers.is_empty() {
                    reg.remove(&index);
                }
            }
        });
    }
}

// =============================================================================
// HIT RECTS
// =============================================================================

/// Register the on-screen rectangle of a component for coordinate dispatch.
pub fn set_hit_rect(index: usize, x: u16, y: u16, width: u16, height: u16) {
    HIT_RECTS.with(|rects| {
        rects.borrow_mut().insert(index, HitRect { x, y, width, height });
    });
}

/// Remove the hit rectangle of a component.
pub fn clear_hit_rect(index: usize) {
    HIT_RECTS.with(|rects| {
        rects.borrow_mut().remove(&index);
    });
}

/// Find the component at a position.
pub fn hit_test(x: u16, y: u16) -> Option<usize> {
    HIT_RECTS.with(|rects| {
        rects
            .borrow()
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(index, _)| *index)
    })
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Fire the press handlers of a component.
/// Returns true if any handler was registered.
pub fn dispatch(index: usize) -> bool {
    PRESS_HANDLERS.with(|reg| {
        let reg = reg.borrow();
        match reg.get(&index) {
            Some(handlers) => {
                for (_, handler) in handlers {
                    handler();
                }
                true
            }
            None => false,
        }
    })
}

/// Hit-test a position and fire the handlers of the component found there.
/// Returns true if a component was hit and had handlers.
pub fn dispatch_at(x: u16, y: u16) -> bool {
    match hit_test(x, y) {
        Some(index) => dispatch(index),
        None => false,
    }
}

// =============================================================================
// CLEANUP
// =============================================================================

/// Clean up all press state for a component index.
pub fn cleanup_index(index: usize) {
    PRESS_HANDLERS.with(|reg| {
        reg.borrow_mut().remove(&index);
    });
    clear_hit_rect(index);
}

/// Reset press state (for testing)
pub fn reset_press_state() {
    PRESS_HANDLERS.with(|reg| reg.borrow_mut().clear());
    HIT_RECTS.with(|rects| rects.borrow_mut().clear());
    NEXT_ID.with(|next| *next.borrow_mut() = 0);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_press_state();
    }

    #[test]
    fn test_press_dispatch() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = on_press(3, move || {
            count_clone.set(count_clone.get() + 1);
        });

        assert!(dispatch(3));
        assert_eq!(count.get(), 1);

        // Unknown component
        assert!(!dispatch(9));
        assert_eq!(count.get(), 1);

        cleanup();
        assert!(!dispatch(3));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_hit_rect_contains() {
        let rect = HitRect { x: 2, y: 1, width: 10, height: 3 };

        assert!(rect.contains(2, 1));
        assert!(rect.contains(11, 3));
        assert!(!rect.contains(12, 1));
        assert!(!rect.contains(2, 4));
        assert!(!rect.contains(1, 1));
    }

    #[test]
    fn test_dispatch_at() {
        setup();

        let pressed = Rc::new(Cell::new(false));
        let pressed_clone = pressed.clone();

        let _cleanup = on_press(0, move || pressed_clone.set(true));
        set_hit_rect(0, 4, 2, 31, 3);

        // Miss
        assert!(!dispatch_at(0, 0));
        assert!(!pressed.get());

        // Hit
        assert!(dispatch_at(10, 3));
        assert!(pressed.get());
    }

    #[test]
    fn test_cleanup_index() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let _cleanup = on_press(1, move || {
            count_clone.set(count_clone.get() + 1);
        });
        set_hit_rect(1, 0, 0, 5, 5);

        cleanup_index(1);

        assert!(!dispatch(1));
        assert_eq!(hit_test(2, 2), None);
    }
}
