//! Fixed colour palette.

use ratatui::style::Color;

/// Colours used by the renderer.
///
/// One light palette is chosen at startup; there is no runtime toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub text: Color,
    /// Title and player X.
    pub accent: Color,
    /// Player O.
    pub secondary: Color,
    /// Dimmed cell numbers and borders.
    pub muted: Color,
    /// Border of the cell under the cursor.
    pub cursor: Color,
    /// Background of the winning line.
    pub win: Color,
    /// Background of the just-placed cell.
    pub pulse: Color,
}

impl Theme {
    /// The light palette.
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(0xff, 0xff, 0xff),
            text: Color::Rgb(0x28, 0x2c, 0x34),
            accent: Color::Rgb(0x19, 0x76, 0xd2),
            secondary: Color::Rgb(0xe5, 0x39, 0x35),
            muted: Color::Rgb(0x9e, 0x9e, 0x9e),
            cursor: Color::Rgb(0xff, 0x98, 0x00),
            win: Color::Rgb(0xc8, 0xe6, 0xc9),
            pulse: Color::Rgb(0xff, 0xf3, 0xc4),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
