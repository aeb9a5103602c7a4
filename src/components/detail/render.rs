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

//! UI rendering logic for the detail view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::DetailView,
    render::{Render, RenderContext},
    util::format::format_video_count,
};

impl Render for DetailView {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;

        let Some(tutorial) = self
            .tutorial
            .and_then(|id| ctx.catalog.find(&id))
            .and_then(|key| ctx.catalog.tutorial(key))
        else {
            f.render_widget(Paragraph::new("No tutorial selected"), area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let artwork = Paragraph::new(tutorial.thumbnail.as_str())
            .style(Style::default().bg(theme.artwork_colour(tutorial.artwork_rgb())).fg(theme.title_fg))
            .block(Block::default().padding(Padding::uniform(1)));
        f.render_widget(artwork, chunks[0]);

        let queued_style = if tutorial.is_queued {
            Style::default().fg(theme.queued_fg)
        } else {
            Style::default().fg(theme.accent_colour)
        };

        let summary = Paragraph::new(vec![
            Line::from(tutorial.title.as_str())
                .style(Style::default().fg(theme.title_fg).add_modifier(Modifier::BOLD)),
            Line::from(vec![
                Span::styled(tutorial.formatted_date(ctx.date_format), Style::default().fg(theme.date_fg)),
                Span::raw("  "),
                Span::styled(format_video_count(tutorial.video_count()), Style::default().fg(theme.date_fg)),
            ]),
            Line::from(format!("[a] {}", tutorial.queue_action_label())).style(queued_style),
        ])
        .block(Block::default().padding(Padding::horizontal(1)));
        f.render_widget(summary, chunks[1]);

        // Section headers are interleaved with their videos, so the list
        // selection is translated from item position to row position
        let mut items = Vec::new();
        let mut selected_row = None;
        let mut position = 0;
        for (section, videos) in self.snapshot.sections() {
            items.push(
                ListItem::new(section.as_str())
                    .style(Style::default().fg(theme.section_fg).add_modifier(Modifier::BOLD)),
            );
            for video in videos {
                if self.list_state.selected() == Some(position) {
                    selected_row = Some(items.len());
                }
                items.push(ListItem::new(format!("  {}", video)));
                position += 1;
            }
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Content ")
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.border_colour)),
            )
            .highlight_style(Style::default().bg(theme.highlight_bg));

        let mut row_state = self.list_state.clone();
        row_state.select(selected_row);
        f.render_stateful_widget(list, chunks[2], &mut row_state);
    }
}
