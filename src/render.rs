//! Renderer - Box-drawing output for the code row.
//!
//! Deliberately small: a pure snapshot of the box cells plus a line
//! renderer producing plain box-drawing strings. Colors and attributes
//! travel in the snapshot for hosts that paint; `render_lines` itself
//! stays unstyled so it can be asserted on directly.
//!
//! Reading a snapshot inside an effect tracks every cell it touches, so
//! the effect re-runs exactly when a box changes.

use crate::engine::arrays::{interaction, text, visual};
use crate::types::{Attr, BorderStyle, Rgba, RowStyle};

// =============================================================================
// Snapshot
// =============================================================================

/// Everything needed to paint one code box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSnapshot {
    pub display: String,
    pub caret: bool,
    pub border: BorderStyle,
    pub border_color: Rgba,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
    pub width: u16,
    pub height: u16,
}

/// The code row, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSnapshot {
    pub boxes: Vec<BoxSnapshot>,
}

/// Read the current state of the given boxes (reactive).
pub fn snapshot(box_indices: &[usize]) -> RowSnapshot {
    let boxes = box_indices
        .iter()
        .map(|&index| BoxSnapshot {
            display: text::get_display(index),
            caret: interaction::get_caret(index),
            border: visual::get_border_style(index),
            border_color: visual::get_border_color(index),
            fg: visual::get_fg_color(index),
            bg: visual::get_bg_color(index),
            attrs: visual::get_text_attrs(index),
            width: visual::get_box_width(index),
            height: visual::get_box_height(index),
        })
        .collect();
    RowSnapshot { boxes }
}

// =============================================================================
// Line Rendering
// =============================================================================

/// Render the row as plain box-drawing lines.
///
/// Every box is drawn at the row height (the tallest box, minimum 3 cells)
/// with its display character centered; boxes are separated by the row gap.
pub fn render_lines(row: &RowSnapshot, style: &RowStyle) -> Vec<String> {
    if row.boxes.is_empty() {
        return Vec::new();
    }

    let height = row
        .boxes
        .iter()
        .map(|b| b.height)
        .max()
        .unwrap_or(3)
        .max(3) as usize;

    let gap = " ".repeat(style.gap as usize);
    let mut lines = vec![String::new(); height];

    for (i, code_box) in row.boxes.iter().enumerate() {
        for (line, part) in lines.iter_mut().zip(box_lines(code_box, height)) {
            if i > 0 {
                line.push_str(&gap);
            }
            line.push_str(&part);
        }
    }

    lines
}

/// Render one box at the given row height.
fn box_lines(code_box: &BoxSnapshot, height: usize) -> Vec<String> {
    let inner = (code_box.width.max(3)) as usize - 2;
    let (h, v, tl, tr, br, bl) = code_box.border.chars();

    let content_rows = height - 2;
    let content_row = content_rows.saturating_sub(1) / 2;

    let mut result = Vec::with_capacity(height);
    result.push(format!("{tl}{}{tr}", h.repeat(inner)));

    for row in 0..content_rows {
        if row == content_row {
            result.push(format!("{v}{}{v}", centered(&code_box.display, inner)));
        } else {
            result.push(format!("{v}{}{v}", " ".repeat(inner)));
        }
    }

    result.push(format!("{bl}{}{br}", h.repeat(inner)));
    result
}

/// Center `content` in a field of `width` cells.
fn centered(content: &str, width: usize) -> String {
    let len = content.chars().count();
    if len >= width {
        return content.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
}

// =============================================================================
// Tests
// =============================================================================
