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

//! Render the status line.
//!
//! Shows the active view, its key bindings and the last status message.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{MainView, theme::Theme};

fn key_hints(main_view: MainView) -> &'static str {
    match main_view {
        MainView::Library => "Library  enter: open  h/l: pane  2: queue  q: quit",
        MainView::Detail => "Tutorial  a: queue/unqueue  esc: back",
        MainView::Queue => "Queue  e: edit  space: select  d: delete  u: check updates  p: apply updates  1: library",
    }
}

pub(crate) fn draw_status(f: &mut Frame, area: Rect, main_view: MainView, status: Option<&str>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Percentage(40)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(key_hints(main_view)).style(Style::default().fg(theme.inactive_colour)),
        chunks[0],
    );

    if let Some(status) = status {
        f.render_widget(
            Paragraph::new(status)
                .style(Style::default().fg(theme.status_fg))
                .alignment(ratatui::layout::Alignment::Right),
            chunks[1],
        );
    }
}
