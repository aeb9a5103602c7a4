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

//! Formatting helpers for labels shown in the views.

/// Formats a pending update count as a badge label.
///
/// Returns `None` when there is nothing pending, so no badge is shown.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_update_badge(0), None);
/// assert_eq!(format_update_badge(3), Some("3 updates".to_string()));
/// ```
pub(crate) fn format_update_badge(update_count: u32) -> Option<String> {
    match update_count {
        0 => None,
        1 => Some("1 update".to_string()),
        n => Some(format!("{} updates", n)),
    }
}

pub(crate) fn format_tutorial_count(count: usize) -> String {
    plural(count, "tutorial", "tutorials")
}

pub(crate) fn format_video_count(count: usize) -> String {
    plural(count, "video", "videos")
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, many)
    }
}
