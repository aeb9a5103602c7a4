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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard, command line) and the catalog and queue
//! state, and driving the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    applying queue operations to the catalog and switching views.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    model::{TutorialId, TutorialKey},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),

    OpenDetail(TutorialKey),
    ToggleQueued(TutorialId),

    ToggleEditing,
    DeleteSelected,
    TriggerUpdate,
    ApplyUpdates,

    Status(String),
    Error(String),

    Tick,

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            log::info!("Exiting");
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::SetMainView(main_view) => set_main_view(app, main_view),

            AppEvent::OpenDetail(key) => open_detail(app, key),

            AppEvent::ToggleQueued(id) => {
                let toggled = app
                    .catalog
                    .find(&id)
                    .and_then(|key| app.catalog.toggle_queued(key).map(|queued| (key, queued)));

                if let Some((key, queued)) = toggled {
                    let title = app.catalog.tutorial(key).map(|t| t.title.clone()).unwrap_or_default();
                    let message = if queued {
                        format!("Added '{}' to the queue", title)
                    } else {
                        format!("Removed '{}' from the queue", title)
                    };
                    set_status(app, message);
                }
            }

            AppEvent::ToggleEditing => {
                ensure_queue_visible(app);
                app.queue_view.toggle_editing();
            }

            AppEvent::DeleteSelected => {
                ensure_queue_visible(app);
                let removed = app.queue_view.delete_selected(&mut app.queue, &mut app.catalog);
                if removed > 0 {
                    set_status(app, format!("Removed {} from the queue", crate::util::format::format_tutorial_count(removed)));
                }
            }

            AppEvent::TriggerUpdate => {
                ensure_queue_visible(app);
                match app.queue_view.trigger_update(&mut app.queue, &mut app.catalog) {
                    Some(key) => {
                        let title = app.catalog.tutorial(key).map(|t| t.title.clone()).unwrap_or_default();
                        set_status(app, format!("Update available for '{}'", title));
                    }
                    None => set_status(app, "The queue is empty".to_string()),
                }
            }

            AppEvent::ApplyUpdates => {
                ensure_queue_visible(app);
                let promoted = app.queue_view.apply_updates(&mut app.queue, &mut app.catalog);
                if !promoted.is_empty() {
                    set_status(app, format!("Updated {}", crate::util::format::format_tutorial_count(promoted.len())));
                }
            }

            AppEvent::Status(message) => set_status(app, message),
            AppEvent::Error(message) => {
                log::error!("{}", message);
                app.status = Some(message);
            }

            AppEvent::Tick => {}

            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn set_status(app: &mut App, message: String) {
    log::info!("{}", message);
    app.status = Some(message);
}

/// Switches views. The queue is rebuilt from the catalog when it becomes
/// visible, and keeps its local order while it stays visible.
fn set_main_view(app: &mut App, main_view: MainView) {
    if main_view == MainView::Queue && app.main_view != MainView::Queue {
        app.queue_view.became_visible(&mut app.queue, &app.catalog);
    }

    if app.main_view != main_view {
        log::debug!("Switching view {:?} -> {:?}", app.main_view, main_view);
    }

    app.main_view = main_view;
}

/// Opens the detail view, remembering the view it was opened from.
fn open_detail(app: &mut App, key: TutorialKey) {
    if let Some(tutorial) = app.catalog.tutorial(key) {
        app.detail_view.open(tutorial, app.main_view);
        set_main_view(app, MainView::Detail);
    }
}

fn ensure_queue_visible(app: &mut App) {
    if app.main_view != MainView::Queue {
        set_main_view(app, MainView::Queue);
    }
}

/// Maps keyboard input to application actions.
///
/// The command line gets the first chance to consume a key, then the global
/// bindings, and finally the active view.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the application channel.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if process_global_key_event(app, key)? {
        return Ok(());
    }

    match app.main_view {
        MainView::Library => app.library_browser.process_event(event, &app.event_tx),
        MainView::Detail => app.detail_view.process_event(event, &app.event_tx),
        MainView::Queue => app.queue_view.process_event(event, &app.event_tx),
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app.event_tx.send(AppEvent::SetMainView(MainView::Library))?,
        KeyCode::Char('2') => app.event_tx.send(AppEvent::SetMainView(MainView::Queue))?,

        _ => return Ok(false),
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::AppConfig,
        model::{catalog::Catalog, tests::tutorial},
    };

    fn app(titles: &[&str]) -> App {
        let tutorials = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let mut t = tutorial(title, (2022, 5, i as u32 + 1));
                t.is_queued = true;
                t
            })
            .collect();

        App::new(AppConfig::default(), Catalog::from_collections(vec![("All", tutorials)]))
    }

    fn queue_keys(app: &App) -> Vec<TutorialKey> {
        app.queue.snapshot().keys().to_vec()
    }

    #[test]
    fn reselecting_queue_keeps_applied_order() {
        let mut app = app(&["A", "B", "C", "D"]);

        set_main_view(&mut app, MainView::Queue);
        app.queue.trigger_update_at(&mut app.catalog, 1);
        app.queue.trigger_update_at(&mut app.catalog, 3);
        app.queue.apply_updates(&mut app.catalog);

        let applied = vec![TutorialKey(3), TutorialKey(1), TutorialKey(0), TutorialKey(2)];
        assert_eq!(queue_keys(&app), applied);

        set_main_view(&mut app, MainView::Queue);
        assert_eq!(queue_keys(&app), applied);
    }

    #[test]
    fn returning_to_queue_rebuilds_it() {
        let mut app = app(&["A", "B", "C"]);

        set_main_view(&mut app, MainView::Queue);
        app.catalog.toggle_queued(TutorialKey(1));
        set_main_view(&mut app, MainView::Library);
        set_main_view(&mut app, MainView::Queue);

        assert_eq!(queue_keys(&app), vec![TutorialKey(0), TutorialKey(2)]);
    }

    #[test]
    fn detail_opened_from_queue_returns_to_queue() {
        let mut app = app(&["A", "B", "C"]);
        set_main_view(&mut app, MainView::Queue);

        open_detail(&mut app, TutorialKey(0));
        assert_eq!(app.main_view, MainView::Detail);
        assert_eq!(app.detail_view.return_view, MainView::Queue);

        let back = app.detail_view.return_view;
        set_main_view(&mut app, back);
        assert_eq!(app.main_view, MainView::Queue);
    }
}
