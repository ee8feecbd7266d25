//! Core types for tui-code-input.
//!
//! Value types shared by the component, the state services, and the
//! renderer: colors, text attributes, border charsets, component roles,
//! and the style structs with their override merging.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border style constants for the code boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    None = 0,
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single = 1,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 2,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold = 4,
    /// - | + + + +
    Ascii = 5,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::None => (" ", " ", " ", " ", " ", " "),
            Self::Single => ("─", "│", "┌", "┐", "┘", "└"),
            Self::Double => ("═", "║", "╔", "╗", "╝", "╚"),
            Self::Rounded => ("─", "│", "╭", "╮", "╯", "╰"),
            Self::Bold => ("━", "┃", "┏", "┓", "┛", "┗"),
            Self::Ascii => ("-", "|", "+", "+", "+", "+"),
        }
    }
}

// =============================================================================
// Component Types - For parallel arrays
// =============================================================================

/// Component roles for the parallel arrays pattern.
///
/// Each component at index i has componentType[i] set to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    None = 0,
    /// The tappable row container holding the code boxes.
    Row = 1,
    /// One fixed-size digit display box.
    CodeBox = 2,
    /// The hidden text entry that receives the actual keystrokes.
    Entry = 3,
}

// =============================================================================
// Styles
// =============================================================================

/// Resolved presentation for a code box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    /// Box width in terminal cells (including borders).
    pub width: u16,
    /// Box height in terminal cells (including borders).
    pub height: u16,
    pub border: BorderStyle,
    pub border_color: Rgba,
    pub bg: Rgba,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: 7,
            height: 3,
            border: BorderStyle::Single,
            border_color: Rgba::GRAY,
            bg: Rgba::TERMINAL_DEFAULT,
        }
    }
}

impl BoxStyle {
    /// Built-in style for the caret box (next entry position).
    ///
    /// Same geometry as the default box, bold border so the caret position
    /// reads at a glance without any host overrides.
    pub fn caret_default() -> Self {
        Self {
            border: BorderStyle::Bold,
            ..Self::default()
        }
    }
}

/// Per-field overrides for [`BoxStyle`], merged over a base style.
///
/// Mirrors how hosts override only the fields they care about and inherit
/// the rest from the built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxStyleOverride {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub border: Option<BorderStyle>,
    pub border_color: Option<Rgba>,
    pub bg: Option<Rgba>,
}

impl BoxStyleOverride {
    /// Merge these overrides over `base`, field by field.
    pub fn merge_over(&self, base: BoxStyle) -> BoxStyle {
        BoxStyle {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            border: self.border.unwrap_or(base.border),
            border_color: self.border_color.unwrap_or(base.border_color),
            bg: self.bg.unwrap_or(base.bg),
        }
    }
}

/// Resolved presentation for the digit text inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Rgba,
    pub attrs: Attr,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

/// Per-field overrides for [`TextStyle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyleOverride {
    pub fg: Option<Rgba>,
    pub attrs: Option<Attr>,
}

impl TextStyleOverride {
    /// Merge these overrides over `base`, field by field.
    pub fn merge_over(&self, base: TextStyle) -> TextStyle {
        TextStyle {
            fg: self.fg.unwrap_or(base.fg),
            attrs: self.attrs.unwrap_or(base.attrs),
        }
    }
}

/// Resolved presentation for the row container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    /// Gap between boxes in terminal cells.
    pub gap: u16,
    pub bg: Rgba,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            gap: 1,
            bg: Rgba::TERMINAL_DEFAULT,
        }
    }
}

/// Per-field overrides for [`RowStyle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RowStyleOverride {
    pub gap: Option<u16>,
    pub bg: Option<Rgba>,
}

impl RowStyleOverride {
    /// Merge these overrides over `base`, field by field.
    pub fn merge_over(&self, base: RowStyle) -> RowStyle {
        RowStyle {
            gap: self.gap.unwrap_or(base.gap),
            bg: self.bg.unwrap_or(base.bg),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constructors() {
        let c = Rgba::rgb(10, 20, 30);
        assert_eq!(c.r, 10);
        assert_eq!(c.g, 20);
        assert_eq!(c.b, 30);
        assert_eq!(c.a, 255);

        assert!(Rgba::TERMINAL_DEFAULT.is_terminal_default());
        assert!(!Rgba::GRAY.is_terminal_default());
    }

    #[test]
    fn test_attr_flags() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(!attrs.contains(Attr::DIM));
    }

    #[test]
    fn test_border_chars() {
        let (h, v, tl, tr, br, bl) = BorderStyle::Single.chars();
        assert_eq!(h, "─");
        assert_eq!(v, "│");
        assert_eq!(tl, "┌");
        assert_eq!(tr, "┐");
        assert_eq!(br, "┘");
        assert_eq!(bl, "└");

        let (h, ..) = BorderStyle::Ascii.chars();
        assert_eq!(h, "-");
    }

    #[test]
    fn test_box_style_merge() {
        let merged = BoxStyleOverride {
            border: Some(BorderStyle::Rounded),
            bg: Some(Rgba::BLACK),
            ..Default::default()
        }
        .merge_over(BoxStyle::default());

        // Overridden fields
        assert_eq!(merged.border, BorderStyle::Rounded);
        assert_eq!(merged.bg, Rgba::BLACK);
        // Inherited fields
        assert_eq!(merged.width, BoxStyle::default().width);
        assert_eq!(merged.border_color, Rgba::GRAY);
    }

    #[test]
    fn test_empty_override_is_identity() {
        let base = BoxStyle::caret_default();
        assert_eq!(BoxStyleOverride::default().merge_over(base), base);

        let text = TextStyle::default();
        assert_eq!(TextStyleOverride::default().merge_over(text), text);

        let row = RowStyle::default();
        assert_eq!(RowStyleOverride::default().merge_over(row), row);
    }

    #[test]
    fn test_caret_default_differs_from_box_default() {
        let plain = BoxStyle::default();
        let caret = BoxStyle::caret_default();
        assert_ne!(plain.border, caret.border);
        assert_eq!(plain.width, caret.width);
        assert_eq!(plain.height, caret.height);
    }

    #[test]
    fn test_text_style_merge() {
        let merged = TextStyleOverride {
            attrs: Some(Attr::BOLD),
            ..Default::default()
        }
        .merge_over(TextStyle::default());

        assert_eq!(merged.attrs, Attr::BOLD);
        assert!(merged.fg.is_terminal_default());
    }
}
