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

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::YearSelector, model::YearFilter, theme::Theme};

impl YearSelector {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, selected: &YearFilter, theme: &Theme) {
        let block = Block::default()
            .title(" Year (y/Y) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));

        // Options beyond the sentinel
        let years = self.options().len().saturating_sub(1);

        let line = Line::from(vec![
            Span::styled("◀ ", Style::default().fg(theme.muted_colour)),
            Span::styled(selected.to_string(), Style::default().fg(theme.card_year_fg)),
            Span::styled(" ▶", Style::default().fg(theme.muted_colour)),
            Span::styled(format!("  ({years})"), Style::default().fg(theme.muted_colour)),
        ]);

        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
    }
}
