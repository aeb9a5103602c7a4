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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, tutorial
//! collections, tutorials, and their content sections and videos, as decoded
//! from the catalog file.
//!
//! Tutorials live in an arena owned by the [`catalog::Catalog`]; every other
//! holder (collections, snapshots, the queue) refers to them by
//! [`TutorialKey`].

pub(crate) mod catalog;
pub(crate) mod queue;
pub(crate) mod snapshot;

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

/// Label shown on the detail view when a tutorial can be queued.
pub(crate) const ADD_TO_QUEUE_LABEL: &str = "Add to queue";

/// Label shown on the detail view when a tutorial is already queued.
pub(crate) const REMOVE_FROM_QUEUE_LABEL: &str = "Remove from queue";

/// Stable identifier of a tutorial.
///
/// Generated once when the tutorial is constructed, never derived from its
/// content, so two tutorials with the same title and date still have distinct
/// identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TutorialId(Uuid);

impl TutorialId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TutorialId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TutorialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

/// Index of a tutorial record in the catalog arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct TutorialKey(pub(crate) usize);

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Video {
    pub(crate) title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Section {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) videos: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tutorial {
    #[serde(skip)]
    pub(crate) id: TutorialId,
    pub(crate) title: String,
    pub(crate) thumbnail: String,
    pub(crate) artwork_color: String,
    pub(crate) publish_date: NaiveDate,
    pub(crate) is_queued: bool,
    #[serde(default)]
    pub(crate) update_count: u32,
    pub(crate) content: Vec<Section>,
}

impl Tutorial {
    /// Returns `true` when both values are the same record, compared by
    /// identifier.
    pub(crate) fn identity_eq(&self, other: &Tutorial) -> bool {
        self.id == other.id
    }

    /// Returns `true` when both values describe the same catalog entry,
    /// compared by title and publish date.
    ///
    /// Two distinct records may be content-equal; use [`Self::identity_eq`]
    /// when deciding whether they are the same record.
    pub(crate) fn content_eq(&self, other: &Tutorial) -> bool {
        self.title == other.title && self.publish_date == other.publish_date
    }

    pub(crate) fn has_updates(&self) -> bool {
        self.update_count > 0
    }

    /// Formats the publish date with a `chrono` format string, e.g. `"%b %-d"`.
    pub(crate) fn formatted_date(&self, format: &str) -> String {
        self.publish_date.format(format).to_string()
    }

    /// Parses the artwork colour reference (`#rrggbb` or `rrggbb`).
    pub(crate) fn artwork_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_rgb(&self.artwork_color)
    }

    pub(crate) fn queue_action_label(&self) -> &'static str {
        if self.is_queued {
            REMOVE_FROM_QUEUE_LABEL
        } else {
            ADD_TO_QUEUE_LABEL
        }
    }

    pub(crate) fn video_count(&self) -> usize {
        self.content.iter().map(|s| s.videos.len()).sum()
    }
}

/// A named grouping of tutorials as it appears in the catalog.
#[derive(Debug, Clone)]
pub(crate) struct TutorialCollection {
    pub(crate) title: String,
    pub(crate) tutorials: Vec<TutorialKey>,
}

fn parse_hex_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn tutorial(title: &str, date: (i32, u32, u32)) -> Tutorial {
        Tutorial {
            id: TutorialId::new(),
            title: title.to_string(),
            thumbnail: format!("{}-thumb", title.to_lowercase()),
            artwork_color: "#2b3e50".to_string(),
            publish_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            is_queued: false,
            update_count: 0,
            content: vec![Section {
                title: "Introduction".to_string(),
                videos: vec![
                    Video { title: "Overview".to_string() },
                    Video { title: "Setup".to_string() },
                ],
            }],
        }
    }

    #[test]
    fn content_equal_tutorials_keep_distinct_identity() {
        let a = tutorial("Layouts", (2019, 4, 2));
        let b = tutorial("Layouts", (2019, 4, 2));

        assert!(a.content_eq(&b));
        assert!(!a.identity_eq(&b));
        assert!(a.identity_eq(&a.clone()));
    }

    #[test]
    fn different_dates_are_not_content_equal() {
        let a = tutorial("Layouts", (2019, 4, 2));
        let b = tutorial("Layouts", (2020, 4, 2));

        assert!(!a.content_eq(&b));
    }

    #[test]
    fn formats_publish_date() {
        let t = tutorial("Layouts", (2019, 4, 2));
        assert_eq!(t.formatted_date("%b %-d"), "Apr 2");
        assert_eq!(t.formatted_date("%Y-%m-%d"), "2019-04-02");
    }

    #[test]
    fn parses_artwork_colour() {
        let mut t = tutorial("Layouts", (2019, 4, 2));
        assert_eq!(t.artwork_rgb(), Some((0x2b, 0x3e, 0x50)));

        t.artwork_color = "FFA500".to_string();
        assert_eq!(t.artwork_rgb(), Some((255, 165, 0)));

        t.artwork_color = "#12345".to_string();
        assert_eq!(t.artwork_rgb(), None);

        t.artwork_color = "#zz0000".to_string();
        assert_eq!(t.artwork_rgb(), None);
    }

    #[test]
    fn queue_label_follows_flag() {
        let mut t = tutorial("Layouts", (2019, 4, 2));
        assert_eq!(t.queue_action_label(), ADD_TO_QUEUE_LABEL);

        t.is_queued = true;
        assert_eq!(t.queue_action_label(), REMOVE_FROM_QUEUE_LABEL);
    }

    #[test]
    fn identifiers_are_generated_on_decode() {
        let json = r##"{
            "title": "Layouts",
            "thumbnail": "layouts",
            "artworkColor": "#2b3e50",
            "publishDate": "2019-04-02",
            "isQueued": true,
            "content": []
        }"##;

        let a: Tutorial = serde_json::from_str(json).unwrap();
        let b: Tutorial = serde_json::from_str(json).unwrap();

        assert!(a.content_eq(&b));
        assert!(!a.identity_eq(&b));
        assert_eq!(a.update_count, 0);
        assert!(a.is_queued);
    }
}
