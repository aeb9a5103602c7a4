// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and
//! hexadecimal strings, used both for terminal emulator styling and for the
//! artwork colours in the catalog.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) inactive_colour: Color,
    pub(crate) highlight_bg: Color,

    pub(crate) title_fg: Color,
    pub(crate) date_fg: Color,
    pub(crate) queued_fg: Color,
    pub(crate) badge_fg: Color,
    pub(crate) section_fg: Color,

    pub(crate) status_fg: Color,
    pub(crate) commander_fg: Color,
    pub(crate) commander_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 28, 38),
            accent_colour: Color::Rgb(0, 168, 107),
            border_colour: Color::Rgb(102, 102, 102),
            inactive_colour: Color::Rgb(130, 130, 140),
            highlight_bg: Color::Rgb(40, 70, 120),

            title_fg: Color::Rgb(255, 255, 255),
            date_fg: Color::Rgb(162, 161, 166),
            queued_fg: Color::Rgb(0, 168, 107),
            badge_fg: Color::Rgb(250, 189, 47),
            section_fg: Color::Rgb(179, 157, 219),

            status_fg: Color::Rgb(162, 161, 166),
            commander_fg: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(34, 40, 54),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Returns `None` for anything other than a [`Color::Rgb`] colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }

    /// Swatch colour for a tutorial's artwork, falling back to the border
    /// colour when the catalog value cannot be parsed.
    pub(crate) fn artwork_colour(&self, rgb: Option<(u8, u8, u8)>) -> Color {
        rgb.map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(self.border_colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_only_for_rgb() {
        assert_eq!(Theme::to_hex(Color::Rgb(24, 28, 38)), Some("#181c26".to_string()));
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }

    #[test]
    fn artwork_falls_back_to_border() {
        let theme = Theme::default();
        assert_eq!(theme.artwork_colour(Some((1, 2, 3))), Color::Rgb(1, 2, 3));
        assert_eq!(theme.artwork_colour(None), theme.border_colour);
    }
}
