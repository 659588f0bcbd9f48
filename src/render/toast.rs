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
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{model::toast::Toast, theme::Theme};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Draws the toast in the top right corner of `area`.
pub(super) fn draw_toast(f: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    let toast_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };

    let colour = theme.toast_colour(toast.kind);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(toast.message.as_str())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(Clear, toast_area);
    f.render_widget(paragraph, toast_area);
}
