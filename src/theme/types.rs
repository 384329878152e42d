use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind modals.
    pub mantle: Color,
    /// Darkest background shade, used as text on highlighted rows.
    pub crust: Color,
    /// Border color of unfocused panes.
    pub surface1: Color,
    /// Border color of read-only panes.
    pub surface2: Color,
    /// Muted titles and captions.
    pub overlay1: Color,
    /// Secondary muted text.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Text of unfocused inputs.
    pub subtext0: Color,
    /// Hints inside modals.
    pub subtext1: Color,
    /// Prompt marker of the focused input.
    pub sapphire: Color,
    /// Focused pane borders and titles.
    pub mauve: Color,
    /// Positive sentiment and success states.
    pub green: Color,
    /// Warnings and the pending indicator.
    pub yellow: Color,
    /// Negative sentiment and errors.
    pub red: Color,
    /// Selection highlight.
    pub lavender: Color,
}
