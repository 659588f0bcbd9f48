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

//! UI rendering logic for the add-movie form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{AddForm, add_form::FormField},
    render::Render,
    theme::Theme,
};

const FIELD_HEIGHT: u16 = 3;
const FORM_WIDTH: u16 = 72;

impl Render for AddForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let outer = Block::default()
            .title(" Add movie  (Tab: next field, Enter: save, Esc: cancel) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::uniform(1));

        let width = area.width.min(FORM_WIDTH);
        let height = (FIELD_HEIGHT * FormField::ALL.len() as u16 + 4).min(area.height);
        let form_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        let inner = outer.inner(form_area);
        f.render_widget(outer, form_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(FormField::ALL.map(|_| Constraint::Length(FIELD_HEIGHT)))
            .split(inner);

        for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
            let focused = *field == self.focused();
            let border_colour = if focused {
                theme.accent_colour
            } else {
                theme.border_colour
            };

            let block = Block::default()
                .title(format!(" {} ", field.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_colour));

            let input = self.input(*field);
            let field_inner = block.inner(*row);
            let scroll = input.visual_scroll(field_inner.width.max(1) as usize);

            let paragraph = Paragraph::new(input.value())
                .style(Style::default().fg(theme.text_colour))
                .scroll((0, scroll as u16))
                .block(block);
            f.render_widget(paragraph, *row);

            if focused && field_inner.height > 0 {
                let cursor = input.visual_cursor().max(scroll) - scroll;
                f.set_cursor_position((field_inner.x + cursor as u16, field_inner.y));
            }
        }
    }
}
