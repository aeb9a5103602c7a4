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

//! Terminal environment and styling utilities.
//!
//! This module provides functions to manipulate the terminal emulator's
//! background colour using OSC (Operating System Command) escape sequences.
//!
//! # Compatibility
//!
//! These functions rely on the terminal emulator supporting the specific OSC
//! codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences; others silently ignore them.

use std::io::{self, Write};

/// Sets the terminal background colour (OSC 11), e.g. `"#1e1e1e"`.
pub(crate) fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    write_osc(&format!("11;{}", hex_color))
}

/// Reverts the terminal background to the user's configured colour (OSC 111).
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    write_osc("111")
}

fn write_osc(body: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\x1b]{}\x07", body)?;
    stdout.flush()
}
