//! Text Arrays - Per-box display content.
//!
//! Each code box exposes one display string: the literal digit, the mask
//! character, or empty. The component binds these cells to getters over the
//! code signal, so a keystroke updates every affected box automatically.
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{TrackedSlotArray, tracked_slot_array, dirty_set};
use crate::engine::arrays::ClearAll;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Display string for the box (single digit, mask char, or empty).
    static DISPLAY: TrackedSlotArray<String> = tracked_slot_array(Some(String::new()), dirty_set());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    DISPLAY.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    DISPLAY.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    DISPLAY.with(|arr| arr.clear_all());
}

// =============================================================================
// Display Content
// =============================================================================

/// Get display content at index (reactive).
pub fn get_display(index: usize) -> String {
    DISPLAY.with(|arr| arr.get(index).unwrap_or_default())
}

/// Set display content at index.
pub fn set_display(index: usize, content: String) {
    DISPLAY.with(|arr| arr.set_value(index, content));
}

/// Set display content from a getter function.
pub fn set_display_getter<F>(index: usize, getter: F)
where
    F: Fn() -> String + 'static,
{
    DISPLAY.with(|arr| arr.set_getter(index, getter));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset();
    }

    #[test]
    fn test_display_value() {
        setup();

        assert_eq!(get_display(0), "");

        set_display(0, "7".to_string());
        assert_eq!(get_display(0), "7");
    }

    #[test]
    fn test_display_getter() {
        setup();

        let source = Rc::new(Cell::new('1'));
        let source_clone = source.clone();
        set_display_getter(0, move || source_clone.get().to_string());

        assert_eq!(get_display(0), "1");

        source.set('9');
        assert_eq!(get_display(0), "9");
    }

    #[test]
    fn test_clear_at_index() {
        setup();

        set_display(3, "4".to_string());
        clear_at_index(3);
        assert_eq!(get_display(3), "");
    }
}
