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
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBar, render::Render, theme::Theme};

impl Render for SearchBar {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .title(" Search (/) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let paragraph = Paragraph::new(self.input.value())
            .style(Style::default().fg(theme.text_colour))
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(paragraph, area);

        if self.is_active {
            let cursor = self.input.visual_cursor().max(scroll) - scroll;
            f.set_cursor_position((inner.x + cursor as u16, inner.y));
        }
    }
}
