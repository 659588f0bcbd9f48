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

//! UI rendering logic for the card grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    components::{MovieList, movie_list::GRID_COLUMNS},
    model::{MovieRecord, paginate::PAGE_SIZE, view::VisiblePage},
    theme::Theme,
};

impl MovieList {
    /// Draws the page as a grid of cards, or `empty_message` when the page
    /// has no movies.
    pub(crate) fn draw(
        &self,
        f: &mut Frame,
        area: Rect,
        page: &VisiblePage,
        empty_message: &str,
        theme: &Theme,
    ) {
        if page.movies.is_empty() {
            let message = Paragraph::new(empty_message)
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .block(Block::default().padding(Padding::top(area.height / 2)));
            f.render_widget(message, area);
            return;
        }

        let grid_rows = PAGE_SIZE.div_ceil(GRID_COLUMNS) as u32;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints((0..grid_rows).map(|_| Constraint::Ratio(1, grid_rows)))
            .split(area);

        for (row_idx, row_area) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..GRID_COLUMNS).map(|_| Constraint::Ratio(1, GRID_COLUMNS as u32)))
                .split(*row_area);

            for (col_idx, cell) in cells.iter().enumerate() {
                let idx = row_idx * GRID_COLUMNS + col_idx;
                if let Some(movie) = page.movies.get(idx) {
                    draw_card(f, *cell, movie, idx == self.selected(), theme);
                }
            }
        }
    }
}

fn draw_card(f: &mut Frame, area: Rect, movie: &MovieRecord, selected: bool, theme: &Theme) {
    let border_style = if selected {
        Style::default().fg(theme.accent_colour)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", movie.heading()),
            Style::default()
                .fg(theme.card_title_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let description = Paragraph::new(movie.description.as_str())
        .style(Style::default().fg(theme.text_colour))
        .wrap(Wrap { trim: true });
    f.render_widget(description, chunks[0]);

    let image = Paragraph::new(movie.img.as_str()).style(
        Style::default()
            .fg(theme.muted_colour)
            .add_modifier(Modifier::ITALIC),
    );
    f.render_widget(image, chunks[1]);
}
