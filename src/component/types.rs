//! Component types - Props and callbacks.

use std::rc::Rc;

use crate::types::{BoxStyleOverride, RowStyleOverride, TextStyleOverride};

// =============================================================================
// Callback Types
// =============================================================================

/// Invoked with the current code on every net-changing edit.
///
/// Using Rc<dyn Fn> instead of Box<dyn Fn> allows cloning callbacks
/// into closures without ownership issues. This is the standard pattern
/// for event callbacks in Rust when callbacks need to be captured in closures.
pub type ChangeCallback = Rc<dyn Fn(&str)>;

/// Invoked with the completed code once entry reaches the configured
/// length, after pending interactions settle.
pub type FillCallback = Rc<dyn Fn(&str)>;

/// Cleanup function releasing a registered handler.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Constants
// =============================================================================

/// Mask character shown for earlier digits in passcode mode.
pub const DEFAULT_MASK_CHAR: char = '*';

// =============================================================================
// Code Input Props
// =============================================================================

/// Properties for the code input component.
///
/// Configuration is immutable per mount. `length` is required; everything
/// else has a default.
///
/// # Example
///
/// ```ignore
/// use std::rc::Rc;
/// use tui_code_input::{code_input, CodeInputProps};
///
/// let handle = code_input(CodeInputProps {
///     on_change_code: Some(Rc::new(|code| println!("code: {code}"))),
///     on_full_fill: Some(Rc::new(|code| println!("done: {code}"))),
///     ..CodeInputProps::new(6)
/// });
/// ```
pub struct CodeInputProps {
    // =========================================================================
    // Shape (Required)
    // =========================================================================

    /// Number of digit boxes / maximum input length.
    pub length: usize,

    // =========================================================================
    // Event Callbacks
    // =========================================================================

    /// Called with the current code on every net-changing edit.
    pub on_change_code: Option<ChangeCallback>,

    /// Called with the completed code once entry reaches `length`, at the
    /// next settle point after the keyboard dismisses.
    pub on_full_fill: Option<FillCallback>,

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Mask every digit but the most recently entered one.
    pub passcode: bool,

    /// Mask character override (default `*`).
    pub passcode_char: Option<char>,

    /// Focus the hidden entry on mount.
    pub auto_focus: bool,

    /// Hint that this field receives a platform one-time code. Stored and
    /// queryable; autofill integrations feed the code in through
    /// `CodeInputHandle::set_text`.
    pub one_time_code: bool,

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Row container overrides (gap, background).
    pub style: Option<RowStyleOverride>,

    /// Code box overrides, merged over the built-in box style.
    pub code_container_style: Option<BoxStyleOverride>,

    /// Caret box overrides, merged over the built-in caret style.
    pub code_container_caret_style: Option<BoxStyleOverride>,

    /// Digit text overrides.
    pub code_text_style: Option<TextStyleOverride>,

    // =========================================================================
    // Identification
    // =========================================================================

    /// Opaque identifier for automated UI testing. Registered as the row's
    /// component ID so automation can resolve the widget by name.
    pub test_id: Option<String>,
}

impl CodeInputProps {
    /// Create props for a code of the given length.
    ///
    /// This is the recommended way to create CodeInputProps since length
    /// is required.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            on_change_code: None,
            on_full_fill: None,
            passcode: false,
            passcode_char: None,
            auto_focus: false,
            one_time_code: false,
            style: None,
            code_container_style: None,
            code_container_caret_style: None,
            code_text_style: None,
            test_id: None,
        }
    }
}
