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

//! UI rendering logic for the queue view.
//!
//! Draws a header with queue totals and mode, followed by a table of queued
//! tutorials with selection markers and update badges.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::QueueView,
    model::queue::QUEUE_SECTION,
    render::{Render, RenderContext},
    util::format::{format_tutorial_count, format_update_badge},
};

impl Render for QueueView {
    fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        self.draw_header(f, chunks[0], ctx);
        self.draw_table(f, chunks[1], ctx);
    }
}

impl QueueView {
    fn draw_header(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(ctx.theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header_text = format!(
            "{} | {}",
            QUEUE_SECTION,
            format_tutorial_count(self.snapshot.item_count())
        );

        if self.editing {
            let _ = write!(header_text, " | editing | {} selected", self.selection.len());
        }

        let header = Paragraph::new(header_text)
            .style(Style::default().fg(ctx.theme.accent_colour))
            .block(header_block);

        f.render_widget(header, area);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;

        let rows = self.snapshot.items().enumerate().filter_map(|(index, key)| {
            let tutorial = ctx.catalog.tutorial(*key)?;

            let selection_indicator = if self.selection.contains(&index) {
                Line::from("+").style(Style::default().fg(Color::Black).bg(theme.accent_colour))
            } else if self.editing {
                Line::from("-").style(Style::default().fg(theme.inactive_colour))
            } else {
                Line::from("")
            };

            let badge = format_update_badge(tutorial.update_count).unwrap_or_default();

            Some(Row::new(vec![
                Cell::from(selection_indicator),
                Cell::from(Line::from("  ").style(Style::default().bg(theme.artwork_colour(tutorial.artwork_rgb())))),
                Cell::from(Line::from(tutorial.title.as_str()).style(Style::default().fg(theme.title_fg))),
                Cell::from(Line::from(tutorial.formatted_date(ctx.date_format)).style(Style::default().fg(theme.date_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(badge).style(Style::default().fg(theme.badge_fg).bold()).alignment(Alignment::Right)),
            ]))
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(""),
                Cell::from("Title"),
                Cell::from(Line::from("Date").alignment(Alignment::Right)),
                Cell::from(Line::from("Updates").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(Color::White))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
