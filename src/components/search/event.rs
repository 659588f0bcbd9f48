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

//! Input handling for the search box.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchBar};

impl SearchBar {
    /// Feeds a key to the search box while it is active.
    ///
    /// Enter and Esc leave the box but keep the current term. Any edit that
    /// changes the text reports the new value.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchAction> {
        if !self.is_active {
            return None;
        }

        if let Event::Key(key_event) = event {
            if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc) {
                self.is_active = false;
                return None;
            }
        }

        let before = self.input.value().to_string();
        self.input.handle_event(event);

        let after = self.input.value();
        (after != before).then(|| SearchAction::Changed(after.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn inactive_box_ignores_keys() {
        let mut search = SearchBar::new();
        assert_eq!(search.process_event(&key(KeyCode::Char('a'))), None);
        assert_eq!(search.value(), "");
    }

    #[test]
    fn typing_reports_changes() {
        let mut search = SearchBar::new();
        search.is_active = true;

        assert_eq!(
            search.process_event(&key(KeyCode::Char('a'))),
            Some(SearchAction::Changed("a".to_string()))
        );
        assert_eq!(
            search.process_event(&key(KeyCode::Char('l'))),
            Some(SearchAction::Changed("al".to_string()))
        );
        assert_eq!(
            search.process_event(&key(KeyCode::Backspace)),
            Some(SearchAction::Changed("a".to_string()))
        );
    }

    #[test]
    fn enter_leaves_box_and_keeps_term() {
        let mut search = SearchBar::new();
        search.set_value("beta");
        search.is_active = true;

        assert_eq!(search.process_event(&key(KeyCode::Enter)), None);
        assert!(!search.is_active);
        assert_eq!(search.value(), "beta");
    }
}
