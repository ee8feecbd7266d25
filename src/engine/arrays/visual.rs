//! Visual Arrays - Colors, borders, and box geometry.
//!
//! Border style and color are getter-backed for code boxes so the caret box
//! picks up its distinguished style reactively as the caret moves.
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained tracking.

use spark_signals::{TrackedSlotArray, tracked_slot_array, dirty_set};
use crate::types::{Attr, BorderStyle, Rgba};
use crate::engine::arrays::ClearAll;

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Border style.
    static BORDER_STYLE: TrackedSlotArray<BorderStyle> = tracked_slot_array(Some(BorderStyle::None), dirty_set());

    /// Border color.
    static BORDER_COLOR: TrackedSlotArray<Rgba> = tracked_slot_array(Some(Rgba::TERMINAL_DEFAULT), dirty_set());

    /// Foreground (text) color.
    static FG_COLOR: TrackedSlotArray<Rgba> = tracked_slot_array(Some(Rgba::TERMINAL_DEFAULT), dirty_set());

    /// Background color.
    static BG_COLOR: TrackedSlotArray<Rgba> = tracked_slot_array(Some(Rgba::TERMINAL_DEFAULT), dirty_set());

    /// Text attributes.
    static TEXT_ATTRS: TrackedSlotArray<Attr> = tracked_slot_array(Some(Attr::NONE), dirty_set());

    /// Box width in cells.
    static BOX_WIDTH: TrackedSlotArray<u16> = tracked_slot_array(Some(0), dirty_set());

    /// Box height in cells.
    static BOX_HEIGHT: TrackedSlotArray<u16> = tracked_slot_array(Some(0), dirty_set());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    BORDER_STYLE.with(|arr| { let _ = arr.peek(index); });
    BORDER_COLOR.with(|arr| { let _ = arr.peek(index); });
    FG_COLOR.with(|arr| { let _ = arr.peek(index); });
    BG_COLOR.with(|arr| { let _ = arr.peek(index); });
    TEXT_ATTRS.with(|arr| { let _ = arr.peek(index); });
    BOX_WIDTH.with(|arr| { let _ = arr.peek(index); });
    BOX_HEIGHT.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    BORDER_STYLE.with(|arr| arr.clear(index));
    BORDER_COLOR.with(|arr| arr.clear(index));
    FG_COLOR.with(|arr| arr.clear(index));
    BG_COLOR.with(|arr| arr.clear(index));
    TEXT_ATTRS.with(|arr| arr.clear(index));
    BOX_WIDTH.with(|arr| arr.clear(index));
    BOX_HEIGHT.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    BORDER_STYLE.with(|arr| arr.clear_all());
    BORDER_COLOR.with(|arr| arr.clear_all());
    FG_COLOR.with(|arr| arr.clear_all());
    BG_COLOR.with(|arr| arr.clear_all());
    TEXT_ATTRS.with(|arr| arr.clear_all());
    BOX_WIDTH.with(|arr| arr.clear_all());
    BOX_HEIGHT.with(|arr| arr.clear_all());
}

// =============================================================================
// Border
// =============================================================================

/// Get border style at index (reactive).
pub fn get_border_style(index: usize) -> BorderStyle {
    BORDER_STYLE.with(|arr| arr.get(index).unwrap_or(BorderStyle::None))
}

/// Set border style at index.
pub fn set_border_style(index: usize, style: BorderStyle) {
    BORDER_STYLE.with(|arr| arr.set_value(index, style));
}

/// Set border style from a getter function.
pub fn set_border_style_getter<F>(index: usize, getter: F)
where
    F: Fn() -> BorderStyle + 'static,
{
    BORDER_STYLE.with(|arr| arr.set_getter(index, getter));
}

/// Get border color at index (reactive).
pub fn get_border_color(index: usize) -> Rgba {
    BORDER_COLOR.with(|arr| arr.get(index).unwrap_or(Rgba::TERMINAL_DEFAULT))
}

/// Set border color at index.
pub fn set_border_color(index: usize, color: Rgba) {
    BORDER_COLOR.with(|arr| arr.set_value(index, color));
}

/// Set border color from a getter function.
pub fn set_border_color_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Rgba + 'static,
{
    BORDER_COLOR.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Colors
// =============================================================================

/// Get foreground color at index (reactive).
pub fn get_fg_color(index: usize) -> Rgba {
    FG_COLOR.with(|arr| arr.get(index).unwrap_or(Rgba::TERMINAL_DEFAULT))
}

/// Set foreground color at index.
pub fn set_fg_color(index: usize, color: Rgba) {
    FG_COLOR.with(|arr| arr.set_value(index, color));
}

/// Get background color at index (reactive).
pub fn get_bg_color(index: usize) -> Rgba {
    BG_COLOR.with(|arr| arr.get(index).unwrap_or(Rgba::TERMINAL_DEFAULT))
}

/// Set background color at index.
pub fn set_bg_color(index: usize, color: Rgba) {
    BG_COLOR.with(|arr| arr.set_value(index, color));
}

/// Set background color from a getter function.
pub fn set_bg_color_getter<F>(index: usize, getter: F)
where
    F: Fn() -> Rgba + 'static,
{
    BG_COLOR.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Text Attributes
// =============================================================================

/// Get text attributes at index (reactive).
pub fn get_text_attrs(index: usize) -> Attr {
    TEXT_ATTRS.with(|arr| arr.get(index).unwrap_or(Attr::NONE))
}

/// Set text attributes at index.
pub fn set_text_attrs(index: usize, attrs: Attr) {
    TEXT_ATTRS.with(|arr| arr.set_value(index, attrs));
}

// =============================================================================
// Box Geometry
// =============================================================================

/// Get box width at index (reactive).
pub fn get_box_width(index: usize) -> u16 {
    BOX_WIDTH.with(|arr| arr.get(index).unwrap_or(0))
}

/// Get box height at index (reactive).
pub fn get_box_height(index: usize) -> u16 {
    BOX_HEIGHT.with(|arr| arr.get(index).unwrap_or(0))
}

/// Set box dimensions at index.
pub fn set_box_size(index: usize, width: u16, height: u16) {
    BOX_WIDTH.with(|arr| arr.set_value(index, width));
    BOX_HEIGHT.with(|arr| arr.set_value(index, height));
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
    fn test_border() {
        setup();

        assert_eq!(get_border_style(0), BorderStyle::None);

        set_border_style(0, BorderStyle::Single);
        set_border_color(0, Rgba::GRAY);

        assert_eq!(get_border_style(0), BorderStyle::Single);
        assert_eq!(get_border_color(0), Rgba::GRAY);
    }

    #[test]
    fn test_border_style_getter() {
        setup();

        let caret = Rc::new(Cell::new(false));
        let caret_clone = caret.clone();
        set_border_style_getter(0, move || {
            if caret_clone.get() {
                BorderStyle::Bold
            } else {
                BorderStyle::Single
            }
        });

        assert_eq!(get_border_style(0), BorderStyle::Single);

        caret.set(true);
        assert_eq!(get_border_style(0), BorderStyle::Bold);
    }

    #[test]
    fn test_colors_and_attrs() {
        setup();

        set_fg_color(0, Rgba::WHITE);
        set_bg_color(0, Rgba::BLACK);
        set_text_attrs(0, Attr::BOLD);

        assert_eq!(get_fg_color(0), Rgba::WHITE);
        assert_eq!(get_bg_color(0), Rgba::BLACK);
        assert_eq!(get_text_attrs(0), Attr::BOLD);
    }

    #[test]
    fn test_box_size() {
        setup();

        assert_eq!(get_box_width(0), 0);

        set_box_size(0, 7, 3);
        assert_eq!(get_box_width(0), 7);
        assert_eq!(get_box_height(0), 3);
    }
}
