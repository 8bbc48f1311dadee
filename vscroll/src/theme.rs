//! Color theme system for vscroll.
//!
//! A `Theme` holds named `ratatui::style::Color` fields covering every UI surface
//! vscroll renders. Two built-in themes are provided:
//!
//! - `dark` uses ANSI 16 colors so it works on any terminal, including
//!   256-color SSH sessions with no truecolor support.
//! - `catppuccin_mocha`: Catppuccin Mocha palette in RGB; requires truecolor.

use ratatui::style::Color;

/// All color values used across vscroll's UI surfaces.
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    /// Border color of the list panel.
    pub border_active: Color,
    /// Border color of the help overlay.
    pub border_overlay: Color,

    // List
    /// Text of items at even indices.
    pub item_text: Color,
    /// Text of items at odd indices.
    pub item_text_alt: Color,
    /// Background of spacer rows. Normally the panel background; a distinct
    /// color makes the spacers visible while debugging.
    pub spacer: Color,
    /// Scrollbar thumb.
    pub scrollbar: Color,

    // Status bar
    /// Status bar background.
    pub status_bar_bg: Color,
    /// Status bar foreground (general text).
    pub status_bar_fg: Color,
    /// Mode indicator color.
    pub status_mode: Color,
    /// Color of an engine build error in the status bar.
    pub status_error: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_overlay: Color::Cyan,

            item_text: Color::Reset,
            item_text_alt: Color::Gray,
            spacer: Color::Reset,
            scrollbar: Color::Cyan,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            status_mode: Color::Cyan,
            status_error: Color::Red,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        let red = Color::Rgb(243, 139, 168); // #f38ba8
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let subtext0 = Color::Rgb(166, 173, 200); // #a6adc8
        let surface1 = Color::Rgb(69, 71, 90); // #45475a
        let base = Color::Rgb(30, 30, 46); // #1e1e2e
        let text = Color::Rgb(205, 214, 244); // #cdd6f4

        Self {
            border_active: lavender,
            border_overlay: lavender,

            item_text: text,
            item_text_alt: subtext0,
            spacer: base,
            scrollbar: lavender,

            status_bar_bg: surface1,
            status_bar_fg: text,
            status_mode: lavender,
            status_error: red,
        }
    }

    /// Resolves a theme name string to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never prevents
    /// startup. The fallback is logged to stderr (not a hard error).
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                eprintln!("vscroll: unknown theme '{}', falling back to 'dark'", other);
                Self::dark()
            }
        }
    }
}
