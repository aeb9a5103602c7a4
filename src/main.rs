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

//! # Tutorial Library TUI.
//!
//! A terminal-based browser for a catalog of tutorial collections, with a
//! detail screen per tutorial and a personal, reorderable queue.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the catalog, the queue and the terminal, and
//!   applies every state change.
//! * **Input and Tick Threads** only forward key presses and periodic redraw
//!   ticks to the main thread.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the input threads and the main loop is handled via
//! `std::sync::mpsc` channels.

mod actions;
mod browser;
mod commander;
mod components;
mod config;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Builder, Env, Target};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::File,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::events::{AppEvent, process_events},
    browser::LibraryBrowser,
    commander::Commander,
    components::{DetailView, QueueView},
    config::AppConfig,
    model::{catalog::Catalog, queue::Queue},
    theme::Theme,
};

const ENV_LOG: &str = "TUTSHELF_LOG";
const ENV_LOG_STYLE: &str = "TUTSHELF_LOG_STYLE";

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    #[default]
    Library,
    Detail,
    Queue,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub catalog: Catalog,
    pub queue: Queue,

    pub library_browser: LibraryBrowser,
    pub detail_view: DetailView,
    pub queue_view: QueueView,

    pub commander: Commander,

    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let queue = Queue::new(config.removal_policy);
        let library_browser = LibraryBrowser::new(catalog.library_snapshot());

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Library,
            event_tx,
            event_rx,
            catalog,
            queue,
            library_browser,
            detail_view: DetailView::new(),
            queue_view: QueueView::new(),
            commander: Commander::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads configuration and the catalog, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config)?;

    let catalog = match &config.catalog_file {
        Some(path) => Catalog::load(path),
        None => Catalog::bundled(),
    };

    let mut app = App::new(config, catalog);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Routes log records to the configured log file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout or stderr.
/// Filtering is controlled by the `TUTSHELF_LOG` environment variable.
fn init_logging(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .target(Target::Pipe(Box::new(file)))
    .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Paint the whole window, otherwise the terminal default shows as a thin
    // outline around the UI
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Failed to read terminal event: {}", e);
                    break;
                }
            }
        }
    });

    // Periodic tick, the minimum "frame rate" of the UI.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    log::info!(
        "Starting with {} collections, {} tutorials",
        app.catalog.collections().len(),
        app.catalog.len()
    );

    if app.catalog.is_empty() {
        log::warn!("Catalog has no tutorials");
    }

    // Process events until the user quits
    process_events(terminal, app)
}
