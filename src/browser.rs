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

//! Library browser state management.
//!
//! This module provides state for the library browser, managing the selected
//! collection and tutorial, and navigating between the two panes in the UI.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use ratatui::widgets::ListState;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    model::{TutorialKey, catalog::LibrarySnapshot},
};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) enum LibraryPane {
    #[default]
    Collections,
    Tutorials,
}

#[derive(Default)]
pub(crate) struct LibraryBrowser {
    pub(crate) active_pane: LibraryPane,

    pub(crate) snapshot: LibrarySnapshot,

    pub(crate) collections_state: ListState,
    pub(crate) tutorials_state: ListState,
}

impl LibraryBrowser {
    pub(crate) fn new(snapshot: LibrarySnapshot) -> Self {
        let mut browser = Self::default();
        browser.set_snapshot(snapshot);
        browser
    }

    pub(crate) fn set_snapshot(&mut self, snapshot: LibrarySnapshot) {
        self.snapshot = snapshot;
        self.collections_state
            .select((self.snapshot.section_count() > 0).then_some(0));
        self.reset_tutorial_selection();
    }

    pub(crate) fn next_pane(&mut self) {
        self.active_pane = match self.active_pane {
            LibraryPane::Collections => LibraryPane::Tutorials,
            LibraryPane::Tutorials => LibraryPane::Collections,
        };
    }

    pub(crate) fn selected_collection(&self) -> Option<usize> {
        self.collections_state
            .selected()
            .filter(|index| *index < self.snapshot.section_count())
    }

    /// Tutorials of the selected collection.
    pub(crate) fn tutorials(&self) -> &[TutorialKey] {
        self.selected_collection()
            .map(|index| self.snapshot.items_in(index))
            .unwrap_or_default()
    }

    pub(crate) fn selected_tutorial(&self) -> Option<TutorialKey> {
        let index = self.tutorials_state.selected()?;
        self.tutorials().get(index).copied()
    }

    pub(crate) fn next_collection(&mut self) {
        Self::next(&mut self.collections_state, self.snapshot.section_count());
        self.reset_tutorial_selection();
    }

    pub(crate) fn previous_collection(&mut self) {
        Self::previous(&mut self.collections_state, self.snapshot.section_count());
        self.reset_tutorial_selection();
    }

    pub(crate) fn next_tutorial(&mut self) {
        let len = self.tutorials().len();
        Self::next(&mut self.tutorials_state, len);
    }

    pub(crate) fn previous_tutorial(&mut self) {
        let len = self.tutorials().len();
        Self::previous(&mut self.tutorials_state, len);
    }

    fn reset_tutorial_selection(&mut self) {
        let has_tutorials = !self.tutorials().is_empty();
        self.tutorials_state.select(has_tutorials.then_some(0));
    }

    fn next(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        state.select(Some(i));
    }

    fn previous(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        state.select(Some(i));
    }
}

impl AppEventProcessor for LibraryBrowser {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };

        match (key.code, self.active_pane) {
            (KeyCode::Char('j') | KeyCode::Down, LibraryPane::Collections) => self.next_collection(),
            (KeyCode::Char('k') | KeyCode::Up, LibraryPane::Collections) => self.previous_collection(),
            (KeyCode::Char('j') | KeyCode::Down, LibraryPane::Tutorials) => self.next_tutorial(),
            (KeyCode::Char('k') | KeyCode::Up, LibraryPane::Tutorials) => self.previous_tutorial(),

            (KeyCode::Char('h') | KeyCode::Left, _)
            | (KeyCode::Char('l') | KeyCode::Right, _)
            | (KeyCode::Tab, _) => self.next_pane(),

            (KeyCode::Enter, LibraryPane::Collections) => self.active_pane = LibraryPane::Tutorials,
            (KeyCode::Enter, LibraryPane::Tutorials) => {
                if let Some(key) = self.selected_tutorial() {
                    event_tx.send(AppEvent::OpenDetail(key))?;
                }
            }

            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::snapshot::Snapshot;

    fn browser() -> LibraryBrowser {
        LibraryBrowser::new(
            Snapshot::new()
                .with_section("Swift".to_string(), [TutorialKey(0), TutorialKey(1)])
                .with_section("Empty".to_string(), [])
                .with_section("Unity".to_string(), [TutorialKey(2)]),
        )
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn selects_first_collection_and_tutorial() {
        let browser = browser();
        assert_eq!(browser.selected_collection(), Some(0));
        assert_eq!(browser.selected_tutorial(), Some(TutorialKey(0)));
    }

    #[test]
    fn changing_collection_resets_tutorial_selection() {
        let mut browser = browser();
        browser.next_pane();
        browser.next_tutorial();
        assert_eq!(browser.selected_tutorial(), Some(TutorialKey(1)));

        browser.next_collection();
        assert_eq!(browser.selected_tutorial(), None);

        browser.next_collection();
        assert_eq!(browser.selected_tutorial(), Some(TutorialKey(2)));

        browser.next_collection();
        assert_eq!(browser.selected_collection(), Some(0));
    }

    #[test]
    fn enter_on_tutorial_opens_detail() {
        let (tx, rx) = mpsc::channel();
        let mut browser = browser();

        browser.process_event(key(KeyCode::Enter), &tx).unwrap();
        assert_eq!(browser.active_pane, LibraryPane::Tutorials);
        assert!(rx.try_recv().is_err());

        browser.process_event(key(KeyCode::Char('j')), &tx).unwrap();
        browser.process_event(key(KeyCode::Enter), &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::OpenDetail(TutorialKey(1)))));
    }

    #[test]
    fn empty_library_has_no_selection() {
        let browser = LibraryBrowser::new(Snapshot::new());
        assert_eq!(browser.selected_collection(), None);
        assert_eq!(browser.selected_tutorial(), None);
    }
}
