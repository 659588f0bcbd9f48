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

//! Fixed-size page slicing.

/// Number of cards on a page.
pub(crate) const PAGE_SIZE: usize = 15;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Page<'a, T> {
    pub(crate) items: &'a [T],
    pub(crate) total_pages: usize,
}

/// Returns the slice for 1-based `current_page` and the total page count.
///
/// A page past the end yields an empty slice rather than an error; page `0`
/// is treated as page `1`.
pub(crate) fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size);

    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    let slice = if start >= items.len() {
        &items[0..0]
    } else {
        let end = (start + page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_items_fit_on_one_page() {
        let items = ["Alpha", "Beta", "Gamma"];
        let page = paginate(&items, PAGE_SIZE, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items, &["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<usize> = (0..32).collect();
        let page = paginate(&items, PAGE_SIZE, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, &[30, 31]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<usize> = (0..16).collect();
        let page = paginate(&items, PAGE_SIZE, 5);
        assert_eq!(page.total_pages, 2);
        assert!(page.items.is_empty());
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: [u8; 0] = [];
        let page = paginate(&items, PAGE_SIZE, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 2, 0).items, &[1, 2]);
    }

    #[test]
    fn pages_reconstruct_the_input() {
        for len in [0, 1, 14, 15, 16, 45, 46] {
            let items: Vec<usize> = (0..len).collect();
            let total = paginate(&items, PAGE_SIZE, 1).total_pages;

            let joined: Vec<usize> = (1..=total)
                .flat_map(|p| paginate(&items, PAGE_SIZE, p).items.to_vec())
                .collect();

            assert_eq!(joined, items, "length {len}");
        }
    }
}
