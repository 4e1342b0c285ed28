// SPDX-License-Identifier: MPL-2.0
//! Per-document bookmarks.
//!
//! Bookmarks are kept sorted by page number and stored as plain text, one
//! `<page>:<title>` line per bookmark (the title may be empty). At most one
//! bookmark exists per page.

mod store;

pub use store::{clear_dir, BookmarkStore};

use std::fmt::Write as _;

/// A bookmarked page, 1-based as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub page: u32,
    pub title: Option<String>,
}

impl Bookmark {
    pub fn new(page: u32, title: Option<String>) -> Self {
        Self {
            page,
            title: title.filter(|t| !t.is_empty()),
        }
    }

    /// Zero-based index of the page this bookmark points to.
    pub fn page_index(&self) -> usize {
        self.page.saturating_sub(1) as usize
    }

    fn parse_line(line: &str) -> Option<Self> {
        let (page, title) = line.split_once(':')?;
        let page = page.trim().parse().ok().filter(|&page: &u32| page >= 1)?;
        Some(Self::new(page, Some(title.to_string())))
    }
}

/// Result of [`BookmarkList::edit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    /// The requested page is not in `1..=count`.
    OutOfRange { count: usize },
    /// Another bookmark already points to the requested page.
    Duplicate,
    /// No bookmark exists for the edited page.
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkList {
    items: Vec<Bookmark>,
}

impl BookmarkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the file contents. Lines that cannot be read are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut list = Self::new();
        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Bookmark::parse_line(line) {
                Some(bookmark) => {
                    if !list.insert(bookmark) {
                        log::warn!("Duplicate bookmark on line {} ignored", number + 1);
                    }
                }
                None => log::warn!("Malformed bookmark on line {} ignored: {:?}", number + 1, line),
            }
        }
        list
    }

    pub fn to_file_string(&self) -> String {
        let mut out = String::new();
        for bookmark in &self.items {
            let _ = writeln!(
                out,
                "{}:{}",
                bookmark.page,
                bookmark.title.as_deref().unwrap_or_default()
            );
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, page: u32) -> bool {
        self.items.binary_search_by_key(&page, |b| b.page).is_ok()
    }

    /// Adds a bookmark in page order. Returns `false` and leaves the list
    /// untouched if the page is already bookmarked or is page 0.
    pub fn add(&mut self, page: u32, title: Option<String>) -> bool {
        page >= 1 && self.insert(Bookmark::new(page, title))
    }

    pub fn remove(&mut self, page: u32) -> Option<Bookmark> {
        let pos = self.items.binary_search_by_key(&page, |b| b.page).ok()?;
        Some(self.items.remove(pos))
    }

    /// Applies the bookmark editor form to the bookmark on `old_page`.
    ///
    /// A blank `page_input` keeps the current page. The new page must lie in
    /// `1..=page_count`; a page already used by another bookmark leaves the
    /// list unchanged.
    pub fn edit(
        &mut self,
        old_page: u32,
        page_input: &str,
        title: &str,
        page_count: usize,
    ) -> EditOutcome {
        let page_input = page_input.trim();
        let new_page = if page_input.is_empty() {
            old_page
        } else {
            match page_input.parse::<u32>() {
                Ok(page) if page >= 1 && (page as usize) <= page_count => page,
                _ => return EditOutcome::OutOfRange { count: page_count },
            }
        };

        let Some(old) = self.remove(old_page) else {
            return EditOutcome::NotFound;
        };

        let title = title.trim();
        let title = (!title.is_empty()).then(|| title.to_string());
        if self.add(new_page, title) {
            EditOutcome::Updated
        } else {
            self.insert(old);
            EditOutcome::Duplicate
        }
    }

    fn insert(&mut self, bookmark: Bookmark) -> bool {
        match self.items.binary_search_by_key(&bookmark.page, |b| b.page) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, bookmark);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(list: &BookmarkList) -> Vec<u32> {
        list.iter().map(|b| b.page).collect()
    }

    #[test]
    fn parse_reads_titles_and_blank_titles() {
        let list = BookmarkList::parse("3:Intro\n7:\n");
        let items: Vec<_> = list.iter().cloned().collect();
        assert_eq!(
            items,
            vec![
                Bookmark::new(3, Some("Intro".into())),
                Bookmark::new(7, None)
            ]
        );
    }

    #[test]
    fn title_may_contain_colons() {
        let list = BookmarkList::parse("2:Part 1: Basics\n");
        assert_eq!(
            list.iter().next().and_then(|b| b.title.as_deref()),
            Some("Part 1: Basics")
        );
    }

    #[test]
    fn parse_skips_garbage_and_sorts() {
        let list = BookmarkList::parse("9:last\nnot a bookmark\n\nx:bad page\n1:first\n9:again\n");
        assert_eq!(pages(&list), vec![1, 9]);
    }

    #[test]
    fn parse_skips_page_zero() {
        let list = BookmarkList::parse("0:cover\n2:body\n");
        assert_eq!(pages(&list), vec![2]);
    }

    #[test]
    fn add_rejects_page_zero() {
        let mut list = BookmarkList::new();
        assert!(!list.add(0, Some("cover".into())));
        assert!(list.is_empty());
    }

    #[test]
    fn serialization_matches_file_format() {
        let mut list = BookmarkList::new();
        list.add(12, None);
        list.add(4, Some("Chapter".into()));
        assert_eq!(list.to_file_string(), "4:Chapter\n12:\n");
        assert_eq!(BookmarkList::parse(&list.to_file_string()), list);
    }

    #[test]
    fn add_keeps_page_order() {
        let mut list = BookmarkList::new();
        for page in [5, 1, 9, 3] {
            assert!(list.add(page, None));
        }
        assert_eq!(pages(&list), vec![1, 3, 5, 9]);
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut list = BookmarkList::new();
        assert!(list.add(5, Some("first".into())));
        assert!(!list.add(5, Some("second".into())));
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().and_then(|b| b.title.as_deref()), Some("first"));
    }

    #[test]
    fn remove_returns_the_bookmark() {
        let mut list = BookmarkList::parse("1:\n2:two\n");
        assert_eq!(list.remove(2), Some(Bookmark::new(2, Some("two".into()))));
        assert_eq!(list.remove(2), None);
        assert_eq!(pages(&list), vec![1]);
    }

    #[test]
    fn edit_moves_and_renames() {
        let mut list = BookmarkList::parse("2:old\n8:\n");
        assert_eq!(list.edit(2, "10", "new", 20), EditOutcome::Updated);
        assert_eq!(pages(&list), vec![8, 10]);
        assert!(list.iter().any(|b| b.page == 10 && b.title.as_deref() == Some("new")));
    }

    #[test]
    fn edit_with_blank_page_keeps_the_page() {
        let mut list = BookmarkList::parse("4:\n");
        assert_eq!(list.edit(4, "  ", "Renamed", 10), EditOutcome::Updated);
        assert_eq!(list.iter().next(), Some(&Bookmark::new(4, Some("Renamed".into()))));
    }

    #[test]
    fn edit_with_blank_title_clears_it() {
        let mut list = BookmarkList::parse("4:Title\n");
        list.edit(4, "", "", 10);
        assert_eq!(list.iter().next().and_then(|b| b.title.clone()), None);
    }

    #[test]
    fn edit_rejects_pages_outside_the_document() {
        let mut list = BookmarkList::parse("4:keep\n");
        for input in ["0", "11", "-1", "abc"] {
            assert_eq!(
                list.edit(4, input, "x", 10),
                EditOutcome::OutOfRange { count: 10 },
                "input {input:?}"
            );
        }
        assert_eq!(list.to_file_string(), "4:keep\n");
    }

    #[test]
    fn edit_onto_existing_bookmark_restores_the_original() {
        let mut list = BookmarkList::parse("3:a\n6:b\n");
        assert_eq!(list.edit(3, "6", "moved", 10), EditOutcome::Duplicate);
        assert_eq!(list.to_file_string(), "3:a\n6:b\n");
    }

    #[test]
    fn edit_of_unknown_bookmark_is_reported() {
        let mut list = BookmarkList::parse("3:a\n");
        assert_eq!(list.edit(5, "6", "", 10), EditOutcome::NotFound);
    }

    #[test]
    fn page_index_is_zero_based() {
        assert_eq!(Bookmark::new(1, None).page_index(), 0);
        assert_eq!(Bookmark::new(7, None).page_index(), 6);
    }
}
