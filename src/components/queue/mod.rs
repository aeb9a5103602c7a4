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

//! Queue view and queue selection management.
//!
//! This module coordinates the queue list shown to the user: cursor
//! movement, editing mode with multi-selection, and the queue operations
//! triggered from the view. The view renders from its own snapshot of the
//! [`Queue`], refreshed after every operation.

mod event;
mod render;

use std::collections::BTreeSet;

use ratatui::widgets::TableState;

use crate::model::{
    TutorialKey,
    catalog::Catalog,
    queue::{Queue, QueueViewSnapshot},
};

#[derive(Default)]
pub(crate) struct QueueView {
    pub(crate) snapshot: QueueViewSnapshot,
    pub(crate) selection: BTreeSet<usize>,
    pub(crate) editing: bool,
    pub(crate) table_state: TableState,
}

impl QueueView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the queue from the catalog and leaves editing mode.
    pub(crate) fn became_visible(&mut self, queue: &mut Queue, catalog: &Catalog) {
        queue.rebuild(catalog);
        self.set_editing(false);
        self.refresh(queue);
    }

    fn refresh(&mut self, queue: &Queue) {
        self.snapshot = queue.view_snapshot();

        let len = self.snapshot.item_count();
        let cursor = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(cursor);
    }

    pub(crate) fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
        if !editing {
            self.selection.clear();
        }
    }

    pub(crate) fn toggle_editing(&mut self) {
        self.set_editing(!self.editing);
    }

    pub(crate) fn current(&self) -> Option<TutorialKey> {
        let index = self.table_state.selected()?;
        self.snapshot.item_at(index).copied()
    }

    /// Removes the selected tutorials from the queue and leaves editing mode.
    ///
    /// Returns the number of tutorials removed.
    pub(crate) fn delete_selected(&mut self, queue: &mut Queue, catalog: &mut Catalog) -> usize {
        if !self.editing {
            return 0;
        }

        let removed = queue.remove_selected(catalog, &self.selection);

        self.set_editing(false);
        self.refresh(queue);

        removed.len()
    }

    pub(crate) fn trigger_update(&mut self, queue: &mut Queue, catalog: &mut Catalog) -> Option<TutorialKey> {
        let key = queue.trigger_update(catalog);
        self.refresh(queue);
        key
    }

    pub(crate) fn apply_updates(&mut self, queue: &mut Queue, catalog: &mut Catalog) -> Vec<TutorialKey> {
        let promoted = queue.apply_updates(catalog);
        self.refresh(queue);
        promoted
    }

    fn toggle_select_current(&mut self) {
        if !self.editing {
            return;
        }

        if let Some(index) = self.table_state.selected() {
            if index < self.snapshot.item_count() && !self.selection.insert(index) {
                self.selection.remove(&index);
            }
        }
    }

    fn select_all(&mut self) {
        if self.editing {
            self.selection.extend(0..self.snapshot.item_count());
        }
    }

    fn select_none(&mut self) {
        self.selection.clear();
    }

    fn goto_next(&mut self) {
        let len = self.snapshot.item_count();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.snapshot.item_count();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        let len = self.snapshot.item_count();
        self.table_state.select((len > 0).then_some(0));
    }

    // TableState::select_last defers clamping to render time, selection
    // needs a real index
    fn goto_last(&mut self) {
        let len = self.snapshot.item_count();
        self.table_state.select(len.checked_sub(1));
    }
}
