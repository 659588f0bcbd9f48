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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Each frame runs the filter and paginate pipeline
//! against the current catalog, so the screen always reflects in-memory
//! state without any explicit refresh step.

mod commander;
mod pagination;
mod toast;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    model::route::Route,
    render::{commander::draw_commander, pagination::draw_status, toast::draw_toast},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the search header, the main
///   view, a status line and the command line.
/// * **Routing**: Drawing either the card grid or the add form, depending on
///   the current route.
/// * **Notifications**: Overlaying the active toast, if any.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: header, main, status, commander
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(outer[0]);

    app.search_bar.draw(f, header[0], &app.theme);
    app.year_selector
        .draw(f, header[1], &app.view.year, &app.theme);

    let page = app.view.visible(app.catalog.records());

    match app.route {
        Route::List => {
            let empty_message = if app.catalog.is_empty() {
                "The catalog is empty. Press a to add a movie."
            } else {
                "No movies match the current search."
            };
            app.movie_list
                .draw(f, outer[1], &page, empty_message, &app.theme);
        }
        Route::AddForm => app.add_form.draw(f, outer[1], &app.theme),
    }

    draw_status(f, outer[2], app.route, &page, app.catalog.len(), &app.theme);

    draw_commander(f, outer[3], &app.commander, &app.theme);

    if let Some(toast) = &app.toast {
        draw_toast(f, outer[1], toast, &app.theme);
    }
}
