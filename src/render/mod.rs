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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod browser;
mod commander;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App, MainView,
    model::catalog::Catalog,
    render::{commander::draw_commander, status::draw_status},
    theme::Theme,
};

/// Read-only state shared by every view while drawing.
pub(crate) struct RenderContext<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) theme: &'a Theme,
    pub(crate) date_format: &'a str,
}

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the active view, a status line and the command
/// line.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing views
///   to update internal view state (like list scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let ctx = RenderContext {
        catalog: &app.catalog,
        theme: &app.theme,
        date_format: &app.config.date_format,
    };

    match app.main_view {
        MainView::Library => app.library_browser.draw(f, outer[0], &ctx),
        MainView::Detail => app.detail_view.draw(f, outer[0], &ctx),
        MainView::Queue => app.queue_view.draw(f, outer[0], &ctx),
    };

    draw_status(f, outer[1], app.main_view, app.status.as_deref(), &app.theme);

    draw_commander(f, outer[2], &app.commander, &app.theme);
}
