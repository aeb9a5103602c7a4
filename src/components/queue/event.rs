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

//! Input handling for the queue view.
//!
//! Navigation and selection are handled locally. Queue operations are sent
//! as application events so they are applied against the catalog by the
//! main loop.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::QueueView,
};

impl AppEventProcessor for QueueView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(),
            (KeyCode::Char('g'), _) => self.goto_first(),
            (KeyCode::Char('G'), _) => self.goto_last(),

            (KeyCode::Char('e'), _) => event_tx.send(AppEvent::ToggleEditing)?,
            (KeyCode::Esc, _) if self.editing => event_tx.send(AppEvent::ToggleEditing)?,

            (KeyCode::Char(' '), _) if self.editing => {
                self.toggle_select_current();
                self.goto_next();
            }
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => self.select_all(),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => self.select_none(),
            (KeyCode::Char('d'), _) | (KeyCode::Delete, _) if self.editing => {
                event_tx.send(AppEvent::DeleteSelected)?
            }

            (KeyCode::Char('u'), _) if !self.editing => event_tx.send(AppEvent::TriggerUpdate)?,
            (KeyCode::Char('p'), _) if !self.editing => event_tx.send(AppEvent::ApplyUpdates)?,
            (KeyCode::Enter, _) if !self.editing => {
                if let Some(key) = self.current() {
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

    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn delete_only_sent_while_editing() {
        let (tx, rx) = mpsc::channel();
        let mut view = QueueView::new();

        view.process_event(key(KeyCode::Char('d')), &tx).unwrap();
        assert!(rx.try_recv().is_err());

        view.set_editing(true);
        view.process_event(key(KeyCode::Char('d')), &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::DeleteSelected)));
    }

    #[test]
    fn update_keys_ignored_while_editing() {
        let (tx, rx) = mpsc::channel();
        let mut view = QueueView::new();

        view.process_event(key(KeyCode::Char('u')), &tx).unwrap();
        view.process_event(key(KeyCode::Char('p')), &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::TriggerUpdate)));
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ApplyUpdates)));

        view.set_editing(true);
        view.process_event(key(KeyCode::Char('u')), &tx).unwrap();
        view.process_event(key(KeyCode::Char('p')), &tx).unwrap();
        assert!(rx.try_recv().is_err());
    }
}
