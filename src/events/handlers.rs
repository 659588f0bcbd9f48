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

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::{
    App,
    error::CatalogError,
    model::{
        MovieDraft, MovieRecord, YearFilter,
        route::Route,
        toast::{Toast, ToastKind},
    },
    tasks::AppTask,
};

pub(super) fn handle_catalog_loaded(app: &mut App, records: Vec<MovieRecord>) {
    info!(count = records.len(), "catalog loaded");

    app.catalog.replace_all(records);
    refresh_year_options(app);
    app.movie_list.reset_selection();
}

pub(super) fn handle_catalog_saved(count: usize) {
    debug!(count, "catalog snapshot written");
}

pub(super) fn handle_reload_catalog(app: &mut App) -> Result<()> {
    app.task_tx.send(AppTask::LoadCatalog)?;

    Ok(())
}

pub(super) fn handle_navigate(app: &mut App, fragment: &str) {
    let route = Route::from_fragment(fragment);
    debug!(fragment, ?route, "navigate");

    if route == Route::AddForm {
        app.search_bar.is_active = false;
    }
    app.route = route;
}

pub(super) fn handle_search_changed(app: &mut App, term: &str) {
    // Commands set the term directly, keep the search box in step
    if app.search_bar.value() != term {
        app.search_bar.set_value(term);
    }

    if !app.view.set_search_term(term) {
        return;
    }
    app.movie_list.reset_selection();

    if !term.trim().is_empty() && app.view.match_count(app.catalog.records()) == 0 {
        app.toast = Some(Toast::no_results());
    }
}

pub(super) fn handle_set_year_filter(app: &mut App, year: YearFilter) {
    if let YearFilter::Unparseable(text) = &year {
        app.toast = Some(Toast::new(
            ToastKind::Invalid,
            format!("\"{text}\" is not a valid year"),
        ));
    }

    if app.view.set_year(year) {
        app.movie_list.reset_selection();
    }
}

pub(super) fn handle_goto_page(app: &mut App, page: usize) {
    let total_pages = app.view.total_pages(app.catalog.records());
    let before = app.view.current_page;

    app.view.goto_page(page, total_pages);

    if app.view.current_page != before {
        app.movie_list.reset_selection();
    }
}

/// Validates and appends a new movie.
///
/// On success the full catalog is handed to the task worker to be saved, the
/// form is cleared and the list view is shown again. On failure the catalog
/// is untouched and the form stays open so the input can be corrected.
pub(super) fn handle_add_movie(app: &mut App, draft: MovieDraft) -> Result<()> {
    let added = app.catalog.add_movie(&draft).map(|m| m.title.clone());

    match added {
        Ok(title) => {
            info!(title = %title, "movie added");

            app.task_tx
                .send(AppTask::SaveCatalog(app.catalog.records().to_vec()))?;

            refresh_year_options(app);
            app.add_form.reset();
            handle_navigate(app, Route::List.fragment());

            app.toast = Some(Toast::new(ToastKind::Added, format!("\"{title}\" added")));
        }
        Err(e @ CatalogError::DuplicateTitle(_)) => {
            warn!(error = %e, "add rejected");
            app.toast = Some(Toast::new(ToastKind::DuplicateTitle, e.to_string()));
        }
        Err(e) => {
            warn!(error = %e, "add rejected");
            app.toast = Some(Toast::new(ToastKind::Invalid, e.to_string()));
        }
    }

    Ok(())
}

pub(super) fn handle_show_toast(app: &mut App, kind: ToastKind, message: String) {
    app.toast = Some(Toast::new(kind, message));
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!(%message, "application error");
    app.toast = Some(Toast::new(ToastKind::Error, message));
}

pub(super) fn handle_tick(app: &mut App) {
    if app
        .toast
        .as_ref()
        .is_some_and(|t| t.is_expired(Instant::now()))
    {
        app.toast = None;
    }
}

/// Re-derives the year options, dropping the year filter if its year has
/// gone from the catalog.
fn refresh_year_options(app: &mut App) {
    let year = app
        .year_selector
        .refresh(app.catalog.records(), &app.view.year);
    app.view.set_year(year);
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::{
        config::AppConfig,
        events::{AppEvent, handle_event},
        model::paginate::PAGE_SIZE,
    };

    fn app_with(records: Vec<MovieRecord>) -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx).unwrap();
        handle_catalog_loaded(&mut app, records);
        (app, task_rx)
    }

    fn sample() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("Alpha", "", 2020, ""),
            MovieRecord::new("Beta", "", 2021, ""),
            MovieRecord::new("Gamma", "", 2020, ""),
        ]
    }

    fn draft(title: &str, year: &str) -> MovieDraft {
        MovieDraft {
            title: title.to_string(),
            description: "new".to_string(),
            year: year.to_string(),
            img: String::new(),
        }
    }

    fn toast_kind(app: &App) -> Option<ToastKind> {
        app.toast.as_ref().map(|t| t.kind)
    }

    #[test]
    fn loaded_catalog_drives_year_options() {
        let (app, _task_rx) = app_with(sample());
        assert_eq!(
            app.year_selector.options(),
            &[
                YearFilter::NoFilter,
                YearFilter::Year(2021),
                YearFilter::Year(2020)
            ]
        );
    }

    #[test]
    fn add_persists_snapshot_and_returns_to_list() {
        let (mut app, task_rx) = app_with(sample());
        handle_navigate(&mut app, "#add");
        assert_eq!(app.route, Route::AddForm);

        handle_add_movie(&mut app, draft("Delta", "1999")).unwrap();

        assert_eq!(app.catalog.len(), 4);
        assert_eq!(app.route, Route::List);
        assert_eq!(toast_kind(&app), Some(ToastKind::Added));
        assert!(app.year_selector.options().contains(&YearFilter::Year(1999)));

        match task_rx.try_recv() {
            Ok(AppTask::SaveCatalog(snapshot)) => {
                assert_eq!(snapshot.len(), 4);
                assert_eq!(snapshot[3].title, "Delta");
            }
            other => panic!("expected a save task, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_add_keeps_form_open() {
        let (mut app, task_rx) = app_with(sample());
        handle_navigate(&mut app, "add");

        handle_add_movie(&mut app, draft("alpha", "2001")).unwrap();

        assert_eq!(app.catalog.len(), 3);
        assert_eq!(app.route, Route::AddForm);
        assert_eq!(toast_kind(&app), Some(ToastKind::DuplicateTitle));
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn malformed_year_add_is_rejected() {
        let (mut app, task_rx) = app_with(sample());
        handle_add_movie(&mut app, draft("Delta", "soon")).unwrap();

        assert_eq!(app.catalog.len(), 3);
        assert_eq!(toast_kind(&app), Some(ToastKind::Invalid));
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn search_resets_page_and_reports_no_results() {
        let records = (0..40)
            .map(|i| MovieRecord::new(&format!("Movie {i}"), "", 2000, ""))
            .collect();
        let (mut app, _task_rx) = app_with(records);

        handle_goto_page(&mut app, 3);
        assert_eq!(app.view.current_page, 3);

        handle_search_changed(&mut app, "movie 1");
        assert_eq!(app.view.current_page, 1);
        assert_eq!(app.search_bar.value(), "movie 1");
        assert!(app.toast.is_none());

        handle_search_changed(&mut app, "zzz");
        assert_eq!(toast_kind(&app), Some(ToastKind::NoResults));
    }

    #[test]
    fn goto_page_is_clamped() {
        let records = (0..PAGE_SIZE + 1)
            .map(|i| MovieRecord::new(&format!("Movie {i}"), "", 2000, ""))
            .collect();
        let (mut app, _task_rx) = app_with(records);

        handle_goto_page(&mut app, 10);
        assert_eq!(app.view.current_page, 2);
    }

    #[test]
    fn unparseable_year_filter_matches_nothing() {
        let (mut app, _task_rx) = app_with(sample());
        handle_set_year_filter(&mut app, YearFilter::parse("20x0"));

        assert_eq!(toast_kind(&app), Some(ToastKind::Invalid));
        assert_eq!(app.view.match_count(app.catalog.records()), 0);
    }

    #[test]
    fn reload_replaces_catalog_but_keeps_surviving_year() {
        let (mut app, _task_rx) = app_with(sample());
        handle_set_year_filter(&mut app, YearFilter::Year(2021));

        handle_catalog_loaded(&mut app, vec![MovieRecord::new("Beta", "", 2021, "")]);
        assert_eq!(app.view.year, YearFilter::Year(2021));

        handle_catalog_loaded(&mut app, vec![]);
        assert_eq!(app.view.year, YearFilter::NoFilter);
        assert!(app.catalog.is_empty());
    }

    #[test]
    fn expired_toast_is_cleared_on_tick() {
        let (mut app, _task_rx) = app_with(vec![]);
        let past = Instant::now() - crate::model::toast::TOAST_DURATION * 2;
        app.toast = Some(Toast::shown_at(ToastKind::Added, "old", past));

        handle_tick(&mut app);
        assert!(app.toast.is_none());
    }

    #[test]
    fn add_form_keys_flow_through_events() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let (mut app, task_rx) = app_with(sample());
        let press = |code| AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));

        handle_event(&mut app, press(KeyCode::Char('a'))).unwrap();
        pump(&mut app);
        assert_eq!(app.route, Route::AddForm);

        for c in "Delta".chars() {
            handle_event(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_event(&mut app, press(KeyCode::Tab)).unwrap();
        handle_event(&mut app, press(KeyCode::Tab)).unwrap();
        for c in "1999".chars() {
            handle_event(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_event(&mut app, press(KeyCode::Enter)).unwrap();
        pump(&mut app);

        assert_eq!(app.route, Route::List);
        assert_eq!(app.catalog.records()[3], MovieRecord::new("Delta", "", 1999, ""));
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::SaveCatalog(_))));
    }

    /// Applies every event queued by the handlers so far.
    fn pump(app: &mut App) {
        while let Ok(event) = app.event_rx.try_recv() {
            handle_event(app, event).unwrap();
        }
    }
}
