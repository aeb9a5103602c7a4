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

//! Render the library browser interface.
//!
//! This module renders the visual representation of the tutorial catalog,
//! organised as collections and the tutorials of the selected collection.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    browser::{LibraryBrowser, LibraryPane},
    render::{Render, RenderContext},
    theme::Theme,
    util::format::format_update_badge,
};

const QUEUED_MARKER: &str = "● ";

impl Render for LibraryBrowser {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        let collection_items: Vec<ListItem> = self
            .snapshot
            .sections()
            .map(|(title, keys)| ListItem::new(format!("{} ({})", title, keys.len())))
            .collect();

        render_list(f, chunks[0], " Collections ", collection_items,
            &mut self.collections_state, self.active_pane == LibraryPane::Collections, ctx.theme);

        let theme = ctx.theme;
        let tutorial_items: Vec<ListItem> = self
            .tutorials()
            .iter()
            .filter_map(|key| ctx.catalog.tutorial(*key))
            .map(|t| {
                let marker = if t.is_queued { QUEUED_MARKER } else { "  " };
                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(theme.queued_fg)),
                    Span::styled(t.title.as_str(), Style::default().fg(theme.title_fg)),
                    Span::raw("  "),
                    Span::styled(t.formatted_date(ctx.date_format), Style::default().fg(theme.date_fg)),
                ];
                if let Some(badge) = format_update_badge(t.update_count) {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(badge, Style::default().fg(theme.badge_fg)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        render_list(f, chunks[1], " Tutorials ", tutorial_items,
            &mut self.tutorials_state, self.active_pane == LibraryPane::Tutorials, ctx.theme);
    }
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    state: &mut ListState,
    is_active: bool,
    theme: &Theme,
) {
    let style = if is_active {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.inactive_colour)
    };

    let list = List::new(items)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(style))
        .highlight_style(Style::default().bg(theme.highlight_bg))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
