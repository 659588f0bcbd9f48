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

//! Input handling for the card grid.
//!
//! Card movement is handled internally; paging keys become
//! [`MovieListAction`]s.

use crossterm::event::{Event, KeyCode};

use crate::components::{MovieList, MovieListAction};

impl MovieList {
    pub(crate) fn process_event(&mut self, event: &Event, page_len: usize) -> Option<MovieListAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next(page_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.goto_previous(page_len);
                None
            }

            KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => {
                Some(MovieListAction::NextPage)
            }
            KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => {
                Some(MovieListAction::PreviousPage)
            }
            KeyCode::Char('g') | KeyCode::Home => Some(MovieListAction::FirstPage),
            KeyCode::Char('G') | KeyCode::End => Some(MovieListAction::LastPage),

            _ => None,
        }
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
    fn selection_wraps_within_page() {
        let mut list = MovieList::new();
        assert_eq!(list.process_event(&key(KeyCode::Char('k')), 3), None);
        assert_eq!(list.selected(), 2);

        list.process_event(&key(KeyCode::Down), 3);
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn empty_page_keeps_selection() {
        let mut list = MovieList::new();
        list.process_event(&key(KeyCode::Char('j')), 0);
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn paging_keys_become_actions() {
        let mut list = MovieList::new();
        assert_eq!(
            list.process_event(&key(KeyCode::Right), 5),
            Some(MovieListAction::NextPage)
        );
        assert_eq!(
            list.process_event(&key(KeyCode::Char('p')), 5),
            Some(MovieListAction::PreviousPage)
        );
        assert_eq!(
            list.process_event(&key(KeyCode::Char('G')), 5),
            Some(MovieListAction::LastPage)
        );
    }
}
