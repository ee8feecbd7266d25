//! # tui-code-input
//!
//! Reactive segmented code input (OTP / PIN entry) for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Components are indices into reactive parallel arrays rather than
//! objects. The widget mounts a row container, one code box per digit, and
//! a hidden focusable entry that receives the actual keystrokes:
//!
//! ```text
//! keystroke → hidden entry → sanitize/compare → code signal → box cells
//! ```
//!
//! Box display values, caret flags, and caret-dependent styles are getters
//! over the code signal, so every edit updates exactly the cells it
//! affects. Completion is handed to a settle scheduler and fires only
//! after in-flight interactions finish - never inside the keystroke that
//! completed the code.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Attr, BorderStyle, styles)
//! - [`engine`] - Component registry and parallel arrays
//! - [`state`] - Focus, keyboard, press, and settle scheduling
//! - [`component`] - The code input itself
//! - [`render`] - Snapshot and box-drawing line output
//! - [`input`] - Crossterm event bridge

pub mod component;
pub mod engine;
pub mod input;
pub mod render;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use component::{
    code_input, extract_display, sanitize, ChangeCallback, Cleanup, CodeInputHandle,
    CodeInputProps, FillCallback, DEFAULT_MASK_CHAR,
};

pub use engine::{
    allocate_index, get_allocated_indices, get_id, get_index, is_allocated, release_index,
    reset_registry,
};

pub use render::{render_lines, snapshot, BoxSnapshot, RowSnapshot};

pub use state::{
    focus::{blur, focus, get_focused_index, has_focus, is_focused},
    keyboard::{
        dispatch as dispatch_keyboard, on as on_keyboard, on_key, KeyboardEvent, KeyState,
        Modifiers,
    },
};
