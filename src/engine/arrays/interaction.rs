//! Interaction Arrays - User interaction state.
//!
//! - focusable: Can receive focus (only the hidden entry is)
//! - caret: Is this box the next entry position
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{TrackedSlotArray, tracked_slot_array, dirty_set};
use crate::engine::arrays::ClearAll;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Is component focusable.
    static FOCUSABLE: TrackedSlotArray<bool> = tracked_slot_array(Some(false), dirty_set());

    /// Is this box the caret box. Getter-backed from the code signal, so the
    /// caret moves as digits are entered or removed.
    static CARET: TrackedSlotArray<bool> = tracked_slot_array(Some(false), dirty_set());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    FOCUSABLE.with(|arr| { let _ = arr.peek(index); });
    CARET.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    FOCUSABLE.with(|arr| arr.clear(index));
    CARET.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    FOCUSABLE.with(|arr| arr.clear_all());
    CARET.with(|arr| arr.clear_all());
}

// =============================================================================
// Focusable
// =============================================================================

/// Get focusable at index (reactive).
pub fn get_focusable(index: usize) -> bool {
    FOCUSABLE.with(|arr| arr.get(index).unwrap_or(false))
}

/// Set focusable at index.
pub fn set_focusable(index: usize, focusable: bool) {
    FOCUSABLE.with(|arr| arr.set_value(index, focusable));
}

// =============================================================================
// Caret
// =============================================================================

/// Get caret flag at index (reactive).
pub fn get_caret(index: usize) -> bool {
    CARET.with(|arr| arr.get(index).unwrap_or(false))
}

/// Set caret flag at index.
pub fn set_caret(index: usize, caret: bool) {
    CARET.with(|arr| arr.set_value(index, caret));
}

/// Set caret flag from a getter function.
pub fn set_caret_getter<F>(index: usize, getter: F)
where
    F: Fn() -> bool + 'static,
{
    CARET.with(|arr| arr.set_getter(index, getter));
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
    fn test_focusable() {
        setup();

        assert!(!get_focusable(0));

        set_focusable(0, true);
        assert!(get_focusable(0));
    }

    #[test]
    fn test_caret() {
        setup();

        assert!(!get_caret(0));

        set_caret(0, true);
        assert!(get_caret(0));
    }

    #[test]
    fn test_caret_getter_tracks_position() {
        setup();

        let filled = Rc::new(Cell::new(0usize));
        for i in 0..4 {
            let filled = filled.clone();
            set_caret_getter(i, move || filled.get() == i);
        }

        assert!(get_caret(0));
        assert!(!get_caret(1));

        filled.set(2);
        assert!(!get_caret(0));
        assert!(get_caret(2));
    }
}
