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

//! Application logic and event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Every state change, whether triggered by a key, a command,
//! a finished background task or the periodic tick, arrives here as an
//! [`AppEvent`] and is applied on the main thread, one event at a time.
//!
//! # Organization
//!
//! * [`key_handlers`]: Routes raw key events to the command line, the
//!   active component, or global bindings.
//! * [`handlers`]: One handler per event, applying it to the [`App`].

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{MovieDraft, MovieRecord, YearFilter, toast::ToastKind},
    render::draw,
};

use handlers::*;
use key_handlers::process_key_event;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    CatalogLoaded(Vec<MovieRecord>),
    CatalogSaved(usize),
    ReloadCatalog,

    Navigate(String),

    SearchChanged(String),
    SetYearFilter(YearFilter),
    GotoPage(usize),

    AddMovie(MovieDraft),

    ShowToast(ToastKind, String),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::CatalogLoaded(records) => handle_catalog_loaded(app, records),
        AppEvent::CatalogSaved(count) => handle_catalog_saved(count),
        AppEvent::ReloadCatalog => handle_reload_catalog(app)?,
        AppEvent::Navigate(fragment) => handle_navigate(app, &fragment),
        AppEvent::SearchChanged(term) => handle_search_changed(app, &term),
        AppEvent::SetYearFilter(year) => handle_set_year_filter(app, year),
        AppEvent::GotoPage(page) => handle_goto_page(app, page),
        AppEvent::AddMovie(draft) => handle_add_movie(app, draft)?,
        AppEvent::ShowToast(kind, message) => handle_show_toast(app, kind, message),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
