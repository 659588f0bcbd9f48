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

//! Status line with pagination buttons.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    model::{route::Route, view::VisiblePage},
    theme::Theme,
};

pub(super) fn draw_status(
    f: &mut Frame,
    area: Rect,
    route: Route,
    page: &VisiblePage,
    catalog_len: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .horizontal_margin(1)
        .split(area);

    let muted = Style::default().fg(theme.muted_colour);

    let fragment = format!("#{}", route.fragment());
    let summary = Line::from(vec![
        Span::styled(fragment, Style::default().fg(theme.accent_colour)),
        Span::styled(
            format!("  {} of {} movies  ", page.total_matches, catalog_len),
            muted,
        ),
        Span::styled("a: add  /: search  :: command  q: quit", muted),
    ]);
    f.render_widget(Paragraph::new(summary), chunks[0]);

    if route == Route::List {
        let buttons = Paragraph::new(page_buttons(page, theme)).right_aligned();
        f.render_widget(buttons, chunks[1]);
    }
}

/// `◀ 1 2 [3] 4 ▶`, collapsing distant pages into an ellipsis.
fn page_buttons(page: &VisiblePage, theme: &Theme) -> Line<'static> {
    let muted = Style::default().fg(theme.muted_colour);
    let active = Style::default()
        .fg(Color::Black)
        .bg(theme.accent_colour)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled("◀ ", muted)];

    let mut skipped = false;
    for number in 1..=page.total_pages {
        let near = number.abs_diff(page.current_page) <= 2;
        if near || number == 1 || number == page.total_pages {
            skipped = false;
            let style = if number == page.current_page { active } else { muted };
            spans.push(Span::styled(format!(" {number} "), style));
        } else if !skipped {
            skipped = true;
            spans.push(Span::styled(" … ", muted));
        }
    }

    spans.push(Span::styled(" ▶", muted));
    Line::from(spans)
}
