//! Component - The segmented code input.
//!
//! One composite component built on the engine arrays and state services:
//! a tappable row of code boxes plus a hidden entry receiving keystrokes.
//!
//! # Reactivity
//!
//! The code string lives in a signal. Box display values, caret flags, and
//! caret-dependent styling are getters over that signal, so every edit
//! updates exactly the cells it affects.

mod types;
mod code_input;

pub use types::*;
pub use code_input::{code_input, extract_display, sanitize, CodeInputHandle};
