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

//! Input handling for the detail view.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::DetailView,
};

impl AppEventProcessor for DetailView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(),

            KeyCode::Char('a') | KeyCode::Enter => {
                if let Some(id) = self.tutorial {
                    event_tx.send(AppEvent::ToggleQueued(id))?;
                }
            }

            KeyCode::Esc | KeyCode::Backspace => {
                event_tx.send(AppEvent::SetMainView(self.return_view))?
            }

            _ => {}
        }

        Ok(())
    }
}
