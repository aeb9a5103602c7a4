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

//! Command-line input logic and state management.
//!
//! This module implements the command-line component: `:` opens a text
//! input, and submitting it dispatches the matching application event.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, actions::events::AppEvent};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {

    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` when the event was consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    if let Err(e) = run_command(&buffer, event_tx) {
                        log::error!("Failed to dispatch command '{}': {}", buffer, e);
                    }
                }
                self.input.reset();
                self.active = false;
            }

            // Delegate all other keys to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }
}

/// Maps a command line to an application event.
fn parse_command(buffer: &str) -> Result<AppEvent, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["1"] | ["library"] => AppEvent::SetMainView(MainView::Library),
        ["2"] | ["queue"] => AppEvent::SetMainView(MainView::Queue),

        ["edit"] => AppEvent::ToggleEditing,
        ["delete"] => AppEvent::DeleteSelected,
        ["update"] => AppEvent::TriggerUpdate,
        ["apply"] => AppEvent::ApplyUpdates,

        [cmd, ..] => return Err(format!("Unknown command: {}", cmd)),
        [] => return Err("Empty command".to_string()),
    };

    Ok(event)
}

fn run_command(buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
    let event = parse_command(buffer).unwrap_or_else(AppEvent::Error);
    event_tx.send(event)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_known_commands() {
        assert!(matches!(parse_command("q"), Ok(AppEvent::ExitApplication)));
        assert!(matches!(parse_command("queue"), Ok(AppEvent::SetMainView(MainView::Queue))));
        assert!(matches!(parse_command(" 1 "), Ok(AppEvent::SetMainView(MainView::Library))));
        assert!(matches!(parse_command("update"), Ok(AppEvent::TriggerUpdate)));
        assert!(matches!(parse_command("apply"), Ok(AppEvent::ApplyUpdates)));
        assert!(matches!(parse_command("edit"), Ok(AppEvent::ToggleEditing)));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert_eq!(parse_command("shuffle now").err().as_deref(), Some("Unknown command: shuffle"));
    }

    #[test]
    fn typed_command_is_dispatched_on_enter() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('a')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        for c in "apply".chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), &tx));
        }
        assert_eq!(commander.input.value(), "apply");

        assert!(commander.handle_event(&key(KeyCode::Enter), &tx));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ApplyUpdates)));
    }

    #[test]
    fn unknown_command_reports_error() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        commander.handle_event(&key(KeyCode::Char('x')), &tx);
        commander.handle_event(&key(KeyCode::Enter), &tx);

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Error(message)) if message == "Unknown command: x"));
    }
}
