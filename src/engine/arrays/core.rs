//! Core Arrays - Component identity state.
//!
//! - componentType: Role of the component (row, code box, entry)
//! - parentIndex: Parent component for recursive release
//! - visible: Whether the component is rendered at all
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{TrackedSlotArray, tracked_slot_array, dirty_set};
use crate::types::ComponentType;
use crate::engine::arrays::ClearAll;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Component role.
    static COMPONENT_TYPE: TrackedSlotArray<ComponentType> = tracked_slot_array(Some(ComponentType::None), dirty_set());

    /// Parent component index (None at root).
    static PARENT_INDEX: TrackedSlotArray<Option<usize>> = tracked_slot_array(Some(None), dirty_set());

    /// Is the component rendered. The hidden entry sets this to false while
    /// staying focusable.
    static VISIBLE: TrackedSlotArray<bool> = tracked_slot_array(Some(true), dirty_set());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| { let _ = arr.peek(index); });
    PARENT_INDEX.with(|arr| { let _ = arr.peek(index); });
    VISIBLE.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    COMPONENT_TYPE.with(|arr| arr.clear(index));
    PARENT_INDEX.with(|arr| arr.clear(index));
    VISIBLE.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.clear_all());
    PARENT_INDEX.with(|arr| arr.clear_all());
    VISIBLE.with(|arr| arr.clear_all());
}

// =============================================================================
// Component Type
// =============================================================================

/// Get component type at index (reactive).
pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.get(index).unwrap_or(ComponentType::None))
}

/// Set component type at index.
pub fn set_component_type(index: usize, component_type: ComponentType) {
    COMPONENT_TYPE.with(|arr| arr.set_value(index, component_type));
}

// =============================================================================
// Parent Index
// =============================================================================

/// Get parent index at index (reactive).
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.get(index)).flatten()
}

/// Set parent index at index.
pub fn set_parent_index(index: usize, parent: Option<usize>) {
    PARENT_INDEX.with(|arr| arr.set_value(index, parent));
}

// =============================================================================
// Visible
// =============================================================================

/// Get visibility at index (reactive).
pub fn get_visible(index: usize) -> bool {
    VISIBLE.with(|arr| arr.get(index).unwrap_or(true))
}

/// Set visibility at index.
pub fn set_visible(index: usize, visible: bool) {
    VISIBLE.with(|arr| arr.set_value(index, visible));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset();
    }

    #[test]
    fn test_component_type() {
        setup();

        assert_eq!(get_component_type(0), ComponentType::None);

        set_component_type(0, ComponentType::CodeBox);
        assert_eq!(get_component_type(0), ComponentType::CodeBox);
    }

    #[test]
    fn test_parent_index() {
        setup();

        assert_eq!(get_parent_index(1), None);

        set_parent_index(1, Some(0));
        assert_eq!(get_parent_index(1), Some(0));
    }

    #[test]
    fn test_visible() {
        setup();

        assert!(get_visible(0));

        set_visible(0, false);
        assert!(!get_visible(0));
    }

    #[test]
    fn test_clear_at_index_restores_defaults() {
        setup();

        set_component_type(2, ComponentType::Entry);
        set_visible(2, false);
        set_parent_index(2, Some(0));

        clear_at_index(2);

        assert_eq!(get_component_type(2), ComponentType::None);
        assert!(get_visible(2));
        assert_eq!(get_parent_index(2), None);
    }
}
