//! Parallel Arrays - Component state columns.
//!
//! All component state lives in these parallel arrays.
//! Each array index corresponds to one component.
//!
//! Components write directly to these arrays using `set_value()` or a
//! getter; reads via `.get()` are tracked, so deriveds and effects only
//! re-run when the specific indices they access have changed.
//!
//! # Array Categories
//!
//! - **core**: Component role, parent, visibility
//! - **visual**: Colors, borders, box geometry
//! - **text**: Per-box display content
//! - **interaction**: Focusable and caret flags

pub mod core;
pub mod visual;
pub mod text;
pub mod interaction;

use spark_signals::TrackedSlotArray;

/// Trait to add `clear_all` functionality to `TrackedSlotArray`.
///
/// `clear_all` was part of the `TrackedSlotArray` API this crate was written
/// against but is not present in spark-signals 0.3.x, which only exposes
/// per-index `clear`. This extension restores it by clearing every index.
pub trait ClearAll {
    fn clear_all(&self);
}

impl<T: Clone + PartialEq + 'static> ClearAll for TrackedSlotArray<T> {
    fn clear_all(&self) {
        for i in 0..self.len() {
            self.clear(i);
        }
    }
}

use self::core as core_arrays;
use self::visual as visual_arrays;
use self::text as text_arrays;
use self::interaction as interaction_arrays;

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    visual_arrays::ensure_capacity(index);
    text_arrays::ensure_capacity(index);
    interaction_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    visual_arrays::clear_at_index(index);
    text_arrays::clear_at_index(index);
    interaction_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when all components are destroyed.
pub fn reset_all_arrays() {
    core_arrays::reset();
    visual_arrays::reset();
    text_arrays::reset();
    interaction_arrays::reset();
}
