use ratatui::style::Color;

/// Color palette and checkbox glyphs for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub done: Color,
    pub warn: Color,
    pub selection_bg: Color,
    /// Checkbox glyph for a pending task
    pub marker_todo: &'static str,
    /// Checkbox glyph for a completed task
    pub marker_done: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1A, 0x1A, 0x22),
            text: Color::Rgb(0xB2, 0xB2, 0xB2),
            text_bright: Color::Rgb(0xF2, 0xF2, 0xF2),
            dim: Color::Rgb(0x66, 0x66, 0x6E),
            highlight: Color::Rgb(0x82, 0x57, 0xE5),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            warn: Color::Rgb(0xE2, 0x5C, 0x4A),
            selection_bg: Color::Rgb(0x2B, 0x2B, 0x38),
            marker_todo: "\u{25CB}", // ○
            marker_done: "\u{25CF}", // ●
        }
    }
}

impl Theme {
    /// Default theme, optionally with ASCII checkbox glyphs for terminals
    /// without good Unicode coverage
    pub fn new(ascii: bool) -> Self {
        let mut theme = Theme::default();
        if ascii {
            theme.marker_todo = "[ ]";
            theme.marker_done = "[x]";
        }
        theme
    }
}
