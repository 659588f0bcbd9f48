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

//! Keyboard routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    components::{AddFormAction, MovieListAction, SearchAction},
    events::AppEvent,
    model::route::{ADD_FRAGMENT, Route},
};

/// Maps keyboard input to application events.
///
/// Keys are offered, in order, to:
///
/// * **Text entry**: the add form or the focused search box, which swallow
///   every key while they have focus.
/// * **Command line**: `:` and everything typed after it.
/// * **Global bindings**: quitting, opening the form, year cycling.
/// * **Card grid**: selection movement and paging.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the application event
/// channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    if app.route == Route::AddForm {
        return process_add_form_event(app, &event);
    }

    if app.search_bar.is_active {
        if let Some(SearchAction::Changed(term)) = app.search_bar.process_event(&event) {
            app.event_tx.send(AppEvent::SearchChanged(term))?;
        }
        return Ok(());
    }

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    process_list_key_event(app, key, &event)
}

fn process_add_form_event(app: &mut App, event: &Event) -> Result<()> {
    match app.add_form.process_event(event) {
        Some(AddFormAction::Submit(draft)) => app.event_tx.send(AppEvent::AddMovie(draft))?,
        Some(AddFormAction::Cancel) => app.event_tx.send(AppEvent::Navigate(String::new()))?,
        None => {}
    }

    Ok(())
}

fn process_list_key_event(app: &mut App, key: KeyEvent, event: &Event) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('a') => app
            .event_tx
            .send(AppEvent::Navigate(ADD_FRAGMENT.to_string()))?,

        KeyCode::Char('/') => app.search_bar.is_active = true,

        // Year selector
        KeyCode::Char('y') => {
            let year = app.year_selector.next_after(&app.view.year);
            app.event_tx.send(AppEvent::SetYearFilter(year))?;
        }
        KeyCode::Char('Y') => {
            let year = app.year_selector.previous_before(&app.view.year);
            app.event_tx.send(AppEvent::SetYearFilter(year))?;
        }

        _ => {
            let page = app.view.visible(app.catalog.records());
            let page_len = page.movies.len();
            let current = page.current_page;

            let target = match app.movie_list.process_event(event, page_len) {
                Some(MovieListAction::NextPage) => Some(current + 1),
                Some(MovieListAction::PreviousPage) => Some(current.saturating_sub(1)),
                Some(MovieListAction::FirstPage) => Some(1),
                Some(MovieListAction::LastPage) => Some(page.total_pages),
                None => None,
            };

            if let Some(target) = target {
                app.event_tx.send(AppEvent::GotoPage(target))?;
            }
        }
    }

    Ok(())
}
