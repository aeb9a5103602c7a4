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

//! Tutorial detail view.
//!
//! Shows one tutorial: artwork, title, publish date, the queue toggle, and its
//! content sections with their videos. The view remembers the tutorial by
//! identifier and looks the record up in the catalog when drawing, so the
//! queue label always reflects the shared record.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    MainView,
    model::{Tutorial, TutorialId, snapshot::Snapshot},
};

/// Content projection: section titles to video titles.
pub(crate) type ContentSnapshot = Snapshot<String, String>;

#[derive(Default)]
pub(crate) struct DetailView {
    pub(crate) tutorial: Option<TutorialId>,
    /// View to go back to when the detail view is closed.
    pub(crate) return_view: MainView,
    pub(crate) snapshot: ContentSnapshot,
    pub(crate) list_state: ListState,
}

impl DetailView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn open(&mut self, tutorial: &Tutorial, return_view: MainView) {
        self.tutorial = Some(tutorial.id);
        self.return_view = return_view;
        self.snapshot = tutorial.content.iter().fold(Snapshot::new(), |snapshot, section| {
            snapshot.with_section(
                section.title.clone(),
                section.videos.iter().map(|video| video.title.clone()),
            )
        });
        self.list_state.select((!self.snapshot.is_empty()).then_some(0));

        log::debug!("Opened '{}' ({})", tutorial.title, tutorial.id);
    }

    fn scroll_down(&mut self) {
        let len = self.snapshot.item_count();
        if len == 0 { return; }
        let i = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(i));
    }

    fn scroll_up(&mut self) {
        if self.snapshot.is_empty() { return; }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::tests::tutorial;

    #[test]
    fn open_projects_sections_and_videos() {
        let t = tutorial("Layouts", (2019, 4, 2));
        let mut view = DetailView::new();

        view.open(&t, MainView::Library);

        assert_eq!(view.tutorial, Some(t.id));
        assert_eq!(
            view.snapshot.sections().map(|(section, _)| section.clone()).collect::<Vec<_>>(),
            vec!["Introduction".to_string()]
        );
        assert_eq!(view.snapshot.items_in(0), &["Overview".to_string(), "Setup".to_string()]);
        assert_eq!(view.list_state.selected(), Some(0));
    }

    #[test]
    fn scrolling_stays_in_bounds() {
        let t = tutorial("Layouts", (2019, 4, 2));
        let mut view = DetailView::new();
        view.open(&t, MainView::Library);

        view.scroll_down();
        view.scroll_down();
        assert_eq!(view.list_state.selected(), Some(1));

        view.scroll_up();
        view.scroll_up();
        assert_eq!(view.list_state.selected(), Some(0));
    }
}
