//! Code Input - Segmented numeric code entry.
//!
//! Renders a row of fixed-size boxes, one per digit, bound to a hidden
//! entry that receives the actual keystrokes. The code lives in a signal;
//! every box display and caret cell is a getter over it, so a keystroke
//! updates exactly the affected cells.
//!
//! # Behavior
//!
//! - Every edit is funneled through one change path: sanitize, bound to
//!   the configured length, compare with the stored code. Only a net
//!   change updates the signal and notifies the host.
//! - Reaching the full length records the value as pending and dismisses
//!   the keyboard (blurs the entry). The blur schedules the full-fill
//!   notification for the next settle point - never synchronously.
//! - Tapping the row focuses the hidden entry.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use tui_code_input::{code_input, CodeInputProps};
//!
//! let handle = code_input(CodeInputProps {
//!     auto_focus: true,
//!     on_full_fill: Some(Rc::new(|code| verify(code))),
//!     ..CodeInputProps::new(6)
//! });
//!
//! // Later, on verification failure:
//! handle.reset();
//! handle.focus();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::engine::{
    allocate_index, get_current_parent_index, is_allocated, pop_parent_context,
    push_parent_context, release_index,
};
use crate::engine::arrays::{core, interaction, text, visual};
use crate::state::focus::{self, FocusCallbacks};
use crate::state::{interactions, keyboard, press};
use crate::types::{BoxStyle, ComponentType, RowStyle, TextStyle};
use super::types::{Cleanup, CodeInputProps, DEFAULT_MASK_CHAR};

// =============================================================================
// Pure Helpers
// =============================================================================

/// Strip every character outside `0-9`.
///
/// Idempotent: `sanitize(sanitize(s)) == sanitize(s)`.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Display string for the box at `index` given the current code.
///
/// In passcode mode every box strictly before the last filled position
/// shows the mask character; the last filled box always shows its literal
/// digit. The boundary is `index < filled_length - 1` - off-by-one changes
/// here alter which box stays readable while typing.
pub fn extract_display(code: &str, index: usize, passcode: bool, mask_char: char) -> String {
    let filled = code.chars().count();
    if passcode && filled.saturating_sub(1) > index {
        return mask_char.to_string();
    }
    code.chars().nth(index).map(|c| c.to_string()).unwrap_or_default()
}

// =============================================================================
// Code Input Component
// =============================================================================

/// Create a segmented code input.
///
/// Mounts one row container, `length` code boxes with reactive display and
/// caret cells, and one hidden focusable entry bounded to `length` digits.
///
/// Returns a [`CodeInputHandle`] the host uses for imperative control and
/// teardown.
pub fn code_input(props: CodeInputProps) -> CodeInputHandle {
    let length = props.length;

    // Resolved styles: overrides merged over the built-in defaults
    let box_style = props
        .code_container_style
        .unwrap_or_default()
        .merge_over(BoxStyle::default());
    let caret_style = props
        .code_container_caret_style
        .unwrap_or_default()
        .merge_over(BoxStyle::caret_default());
    let text_style = props
        .code_text_style
        .unwrap_or_default()
        .merge_over(TextStyle::default());
    let row_style = props.style.unwrap_or_default().merge_over(RowStyle::default());

    // 1. ROW - the single tap target holding the boxes
    let row_index = allocate_index(props.test_id.as_deref());
    core::set_component_type(row_index, ComponentType::Row);
    if let Some(parent) = get_current_parent_index() {
        core::set_parent_index(row_index, Some(parent));
    }
    visual::set_bg_color(row_index, row_style.bg);

    // 2. CODE STATE - the single source every box cell derives from
    let code = signal(String::new());

    let passcode = props.passcode;
    let mask_char = props.passcode_char.unwrap_or(DEFAULT_MASK_CHAR);

    // 3. CODE BOXES - display, caret, and style cells are getters over the
    //    code signal
    push_parent_context(row_index);
    let mut box_indices = Vec::with_capacity(length);
    for i in 0..length {
        let index = allocate_index(None);
        core::set_component_type(index, ComponentType::CodeBox);
        core::set_parent_index(index, Some(row_index));

        let code_for_display = code.clone();
        text::set_display_getter(index, move || {
            extract_display(&code_for_display.get(), i, passcode, mask_char)
        });

        let code_for_caret = code.clone();
        interaction::set_caret_getter(index, move || {
            code_for_caret.get().chars().count() == i
        });

        let code_for_border = code.clone();
        visual::set_border_style_getter(index, move || {
            if code_for_border.get().chars().count() == i {
                caret_style.border
            } else {
                box_style.border
            }
        });

        let code_for_border_color = code.clone();
        visual::set_border_color_getter(index, move || {
            if code_for_border_color.get().chars().count() == i {
                caret_style.border_color
            } else {
                box_style.border_color
            }
        });

        let code_for_bg = code.clone();
        visual::set_bg_color_getter(index, move || {
            if code_for_bg.get().chars().count() == i {
                caret_style.bg
            } else {
                box_style.bg
            }
        });

        visual::set_fg_color(index, text_style.fg);
        visual::set_text_attrs(index, text_style.attrs);
        visual::set_box_size(index, box_style.width, box_style.height);

        box_indices.push(index);
    }

    // 4. HIDDEN ENTRY - visually suppressed, yet the real keystroke receiver
    let entry_index = allocate_index(None);
    core::set_component_type(entry_index, ComponentType::Entry);
    core::set_parent_index(entry_index, Some(row_index));
    core::set_visible(entry_index, false);
    interaction::set_focusable(entry_index, true);
    pop_parent_context();

    // 5. CHANGE PATH - every edit route lands here
    let pending = Rc::new(RefCell::new(None::<String>));
    let apply: Rc<dyn Fn(&str)> = {
        let code = code.clone();
        let pending = pending.clone();
        let on_change_code = props.on_change_code.clone();
        Rc::new(move |raw: &str| {
            let mut value = sanitize(raw);
            // The entry is bounded to the configured length
            if value.chars().count() > length {
                value = value.chars().take(length).collect();
            }

            if value == code.get() {
                return;
            }

            code.set(value.clone());
            if let Some(ref cb) = on_change_code {
                cb(&value);
            }

            if length > 0 && value.chars().count() == length {
                *pending.borrow_mut() = Some(value);
                // Dismiss the keyboard; the blur below completes the hand-off
                focus::blur();
            }
        })
    };

    // 6. KEYSTROKES - append or delete, then funnel through the change path
    let key_cleanup = keyboard::on_focused(entry_index, {
        let code = code.clone();
        let apply = apply.clone();
        move |event| {
            match event.key.as_str() {
                "Backspace" => {
                    let value = code.get();
                    if !value.is_empty() {
                        let mut chars: Vec<char> = value.chars().collect();
                        chars.pop();
                        let shorter: String = chars.into_iter().collect();
                        apply(&shorter);
                    }
                    true
                }
                key if key.len() == 1 && !event.modifiers.has_command_modifier() => {
                    let value = code.get();
                    if value.chars().count() >= length {
                        return true;
                    }
                    let mut raw = value;
                    raw.push_str(key);
                    apply(&raw);
                    true
                }
                _ => false,
            }
        }
    });

    // 7. BLUR - hand the pending full value to the settle scheduler
    let focus_cleanup = focus::register_callbacks(entry_index, FocusCallbacks {
        on_focus: None,
        on_blur: Some(Box::new({
            let pending = pending.clone();
            let on_full_fill = props.on_full_fill.clone();
            move || {
                if let Some(value) = pending.borrow_mut().take() {
                    let on_full_fill = on_full_fill.clone();
                    interactions::schedule(move || {
                        if let Some(cb) = on_full_fill {
                            cb(&value);
                        }
                    });
                }
            }
        })),
    });

    // 8. TAP - pressing anywhere on the row focuses the entry
    let press_cleanup = press::on_press(row_index, move || {
        focus::focus(entry_index);
    });

    // 9. AUTO FOCUS
    if props.auto_focus {
        focus::focus(entry_index);
    }

    CodeInputHandle {
        row_index,
        entry_index,
        box_indices,
        length,
        code,
        apply,
        one_time_code: props.one_time_code,
        test_id: props.test_id,
        row_style,
        cleanups: vec![
            Box::new(key_cleanup),
            Box::new(focus_cleanup),
            Box::new(press_cleanup),
        ],
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Imperative handle returned to the host.
///
/// Decoupled from any internal control reference: all operations guard on
/// the component still being mounted and silently no-op otherwise.
pub struct CodeInputHandle {
    row_index: usize,
    entry_index: usize,
    box_indices: Vec<usize>,
    length: usize,
    code: Signal<String>,
    apply: Rc<dyn Fn(&str)>,
    one_time_code: bool,
    test_id: Option<String>,
    row_style: RowStyle,
    cleanups: Vec<Cleanup>,
}

impl CodeInputHandle {
    /// The current code.
    pub fn code(&self) -> String {
        self.code.get()
    }

    /// The configured length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether entry has reached the configured length.
    pub fn is_full(&self) -> bool {
        self.length > 0 && self.code.get().chars().count() == self.length
    }

    /// The next entry position. Equals `length()` when the code is full
    /// (no box carries the caret then).
    pub fn caret_index(&self) -> usize {
        self.code.get().chars().count()
    }

    /// Display string of the box at `index` (reactive).
    pub fn display(&self, index: usize) -> String {
        self.box_indices
            .get(index)
            .map(|&i| text::get_display(i))
            .unwrap_or_default()
    }

    /// Clear the entry and the code so the user can retry.
    ///
    /// Fires no change notification. Silent no-op after unmount.
    pub fn reset(&self) {
        if !is_allocated(self.entry_index) {
            return;
        }
        self.code.set(String::new());
    }

    /// Request focus on the hidden entry, deferred until pending
    /// interactions complete. Silent no-op after unmount.
    pub fn focus(&self) {
        let entry_index = self.entry_index;
        interactions::schedule(move || {
            focus::focus(entry_index);
        });
    }

    /// Replace the entry content wholesale - the bulk path used by platform
    /// autofill or paste. Funnels through the same change path as typing,
    /// so it can complete (or re-complete) the code. Silent no-op after
    /// unmount.
    pub fn set_text(&self, raw: &str) {
        if !is_allocated(self.entry_index) {
            return;
        }
        (self.apply)(raw);
    }

    /// Whether the host requested platform one-time-code autofill.
    pub fn wants_one_time_code(&self) -> bool {
        self.one_time_code
    }

    /// The opaque test identifier, if any.
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    /// Row container index.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// Hidden entry index.
    pub fn entry_index(&self) -> usize {
        self.entry_index
    }

    /// Code box indices, left to right.
    pub fn box_indices(&self) -> Vec<usize> {
        self.box_indices.clone()
    }

    /// Resolved row style (gap, background).
    pub fn row_style(&self) -> RowStyle {
        self.row_style
    }

    /// Unmount the component and release every index it holds.
    ///
    /// A completion task already handed to the settle scheduler is not
    /// cancelled; it runs against released slots.
    pub fn unmount(mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        keyboard::cleanup_index(self.entry_index);
        focus::cleanup_index(self.entry_index);
        press::cleanup_index(self.row_index);
        release_index(self.row_index);
    }
}

// =============================================================================
// Tests
// =============================================================================
