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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component: `:` opens it, text is
//! collected in an input field, and Enter translates the text into an
//! application event.
//!
//! # Commands
//!
//! * `q` - quit.
//! * `go [fragment]` - navigate to a location fragment (`add` opens the form).
//! * `add` / `list` - shorthands for `go add` and `go`.
//! * `find <term...>` - set the search term.
//! * `year [year]` - set or clear the year filter.
//! * `page <n>` - jump to a page.
//! * `reload` - reload the data file and any stored snapshot.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    model::{YearFilter, route::ADD_FRAGMENT, toast::ToastKind},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a key event to the command line.
    ///
    /// Returns `true` if the event was consumed, in which case no other
    /// component should see it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                if let Some(event) = parse_command(self.input.value()) {
                    event_tx.send(event)?;
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Translates a command line into the event it requests.
///
/// Returns `None` for a blank line. Unknown commands and bad arguments
/// produce a toast event describing the problem.
pub(crate) fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        [] => return None,

        ["q"] => AppEvent::ExitApplication,

        ["go"] => AppEvent::Navigate(String::new()),
        ["go", fragment] => AppEvent::Navigate(fragment.to_string()),
        ["add"] => AppEvent::Navigate(ADD_FRAGMENT.to_string()),
        ["list"] => AppEvent::Navigate(String::new()),

        ["find", term @ ..] => AppEvent::SearchChanged(term.join(" ")),

        ["year"] => AppEvent::SetYearFilter(YearFilter::NoFilter),
        ["year", year] => AppEvent::SetYearFilter(YearFilter::parse(year)),

        ["page", number] => match number.parse::<usize>() {
            Ok(page) => AppEvent::GotoPage(page),
            Err(_) => invalid(format!("\"{number}\" is not a page number")),
        },

        ["reload"] => AppEvent::ReloadCatalog,

        [cmd, ..] => invalid(format!("Unknown command: {cmd}")),
    };

    Some(event)
}

fn invalid(message: String) -> AppEvent {
    AppEvent::ShowToast(ToastKind::Invalid, message)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigation_commands() {
        assert!(matches!(parse_command("add"), Some(AppEvent::Navigate(f)) if f == "add"));
        assert!(matches!(parse_command("go #add"), Some(AppEvent::Navigate(f)) if f == "#add"));
        assert!(matches!(parse_command("go"), Some(AppEvent::Navigate(f)) if f.is_empty()));
        assert!(matches!(parse_command("list"), Some(AppEvent::Navigate(f)) if f.is_empty()));
    }

    #[test]
    fn filter_commands() {
        assert!(
            matches!(parse_command("find  the  matrix "), Some(AppEvent::SearchChanged(t)) if t == "the matrix")
        );
        assert!(matches!(
            parse_command("year 1999"),
            Some(AppEvent::SetYearFilter(YearFilter::Year(1999)))
        ));
        assert!(matches!(
            parse_command("year"),
            Some(AppEvent::SetYearFilter(YearFilter::NoFilter))
        ));
        assert!(matches!(
            parse_command("year soon"),
            Some(AppEvent::SetYearFilter(YearFilter::Unparseable(_)))
        ));
    }

    #[test]
    fn page_command_requires_number() {
        assert!(matches!(parse_command("page 3"), Some(AppEvent::GotoPage(3))));
        assert!(matches!(
            parse_command("page three"),
            Some(AppEvent::ShowToast(ToastKind::Invalid, _))
        ));
    }

    #[test]
    fn blank_and_unknown_commands() {
        assert!(parse_command("   ").is_none());
        assert!(matches!(
            parse_command("rewind 10"),
            Some(AppEvent::ShowToast(ToastKind::Invalid, m)) if m.contains("rewind")
        ));
    }

    #[test]
    fn colon_opens_and_enter_submits() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('q')), &event_tx).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap());
        assert!(commander.active());

        commander.handle_event(&key(KeyCode::Char('q')), &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Enter), &event_tx).unwrap();

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn escape_abandons_command() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &event_tx).unwrap();

        assert!(!commander.active());
        assert!(event_rx.try_recv().is_err());
    }
}
