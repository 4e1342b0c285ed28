// SPDX-License-Identifier: MPL-2.0
//! Bounded page cache with ring-buffer replacement.
//!
//! The loader keeps at most [`MAX_CACHED_PAGES`] rendered pages, ordered from
//! the least to the most recently loaded. A miss renders the page and, when
//! the ring is full, drops the page loaded longest ago. Cache hits through
//! [`PageLoader::get`] do not change the order; [`PageLoader::load_pos`]
//! reloads its pages, moving cached ones to the recent end without rendering
//! them again.

use super::{PageSource, RenderedPage};
use crate::config::MAX_CACHED_PAGES;
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Slot {
    index: usize,
    page: Arc<RenderedPage>,
}

#[derive(Debug)]
pub struct PageLoader<S: PageSource> {
    source: S,
    scale: f32,
    capacity: usize,
    /// Oldest load at the front.
    slots: VecDeque<Slot>,
}

impl<S: PageSource> PageLoader<S> {
    /// Builds the cache and renders the first `min(5, page_count)` pages.
    pub fn new(source: S, scale: f32) -> Result<Self> {
        let page_count = source.page_count();
        if page_count == 0 {
            return Err(Error::EmptyDocument);
        }

        let capacity = page_count.min(MAX_CACHED_PAGES);
        let mut slots = VecDeque::with_capacity(capacity);
        for index in 0..capacity {
            let page = Arc::new(source.render(index, scale)?);
            slots.push_back(Slot { index, page });
        }

        Ok(Self {
            source,
            scale,
            capacity,
            slots,
        })
    }

    /// Number of pages in the document.
    pub fn len(&self) -> usize {
        self.source.page_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident pages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cached page without rendering anything.
    pub fn peek(&self, index: usize) -> Option<Arc<RenderedPage>> {
        self.position(index)
            .map(|pos| Arc::clone(&self.slots[pos].page))
    }

    /// Returns the page, rendering it into the ring on a miss.
    pub fn get(&mut self, index: usize) -> Result<Arc<RenderedPage>> {
        self.check_index(index)?;
        if let Some(page) = self.peek(index) {
            return Ok(page);
        }
        self.load_page(index)
    }

    /// Loads `pos` and up to two neighbours on each side, as used when jumping
    /// to a page. Out of range positions are ignored.
    ///
    /// Afterwards every page of the neighbourhood is resident.
    pub fn load_pos(&mut self, pos: usize) -> Result<()> {
        let len = self.len();
        if pos >= len {
            return Ok(());
        }

        self.reload(pos)?;

        if pos >= 2 {
            self.reload(pos - 2)?;
            self.reload(pos - 1)?;
        } else if pos >= 1 {
            self.reload(pos - 1)?;
        }

        if pos + 2 < len {
            self.reload(pos + 2)?;
            self.reload(pos + 1)?;
        } else if pos + 1 < len {
            self.reload(pos + 1)?;
        }

        Ok(())
    }

    /// Page size in points, for laying out pages that are not cached.
    pub fn page_size(&self, index: usize) -> Result<(f32, f32)> {
        self.source.page_size(index)
    }

    /// Scale used when rendering, in pixels per point.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Page indices currently resident, least recently loaded first.
    pub fn cached_indices(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.index).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::PageOutOfRange {
                index,
                count: self.len(),
            });
        }
        Ok(())
    }

    fn position(&self, index: usize) -> Option<usize> {
        self.slots.iter().position(|slot| slot.index == index)
    }

    /// Marks a page as just loaded, rendering it only if it is not resident.
    fn reload(&mut self, index: usize) -> Result<()> {
        match self.position(index).and_then(|pos| self.slots.remove(pos)) {
            Some(slot) => {
                self.slots.push_back(slot);
                Ok(())
            }
            None => self.load_page(index).map(|_| ()),
        }
    }

    fn load_page(&mut self, index: usize) -> Result<Arc<RenderedPage>> {
        let page = Arc::new(self.source.render(index, self.scale)?);
        if self.slots.len() >= self.capacity {
            if let Some(evicted) = self.slots.pop_front() {
                log::debug!("Page {} loaded, page {} evicted", index, evicted.index);
            }
        }
        self.slots.push_back(Slot {
            index,
            page: Arc::clone(&page),
        });
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory source recording every render call.
    struct FakeSource {
        pages: usize,
        renders: RefCell<Vec<usize>>,
    }

    impl FakeSource {
        fn new(pages: usize) -> Self {
            Self {
                pages,
                renders: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageSource for FakeSource {
        fn page_count(&self) -> usize {
            self.pages
        }

        fn page_size(&self, _index: usize) -> Result<(f32, f32)> {
            Ok((10.0, 20.0))
        }

        fn render(&self, index: usize, scale: f32) -> Result<RenderedPage> {
            self.renders.borrow_mut().push(index);
            let w = (10.0 * scale) as u32;
            let h = (20.0 * scale) as u32;
            Ok(RenderedPage::from_rgba(index, w, h, vec![0; (w * h * 4) as usize]))
        }
    }

    fn renders(loader: &PageLoader<FakeSource>) -> Vec<usize> {
        loader.source().renders.borrow().clone()
    }

    #[test]
    fn empty_document_is_rejected() {
        let result = PageLoader::new(FakeSource::new(0), 1.0);
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }

    #[test]
    fn initial_fill_renders_first_five_pages() {
        let loader = PageLoader::new(FakeSource::new(12), 1.0).expect("loader");
        assert_eq!(loader.capacity(), 5);
        assert_eq!(loader.cached_indices(), vec![0, 1, 2, 3, 4]);
        assert_eq!(renders(&loader), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn small_documents_shrink_the_ring() {
        let loader = PageLoader::new(FakeSource::new(3), 1.0).expect("loader");
        assert_eq!(loader.capacity(), 3);
        assert_eq!(loader.cached_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn cache_hit_does_not_render() {
        let mut loader = PageLoader::new(FakeSource::new(12), 1.0).expect("loader");
        let page = loader.get(3).expect("page");
        assert_eq!(page.index, 3);
        assert_eq!(renders(&loader).len(), 5);
    }

    #[test]
    fn misses_evict_in_ring_order() {
        let mut loader = PageLoader::new(FakeSource::new(12), 1.0).expect("loader");

        loader.get(5).expect("page 5");
        assert_eq!(loader.cached_indices(), vec![1, 2, 3, 4, 5]);

        loader.get(6).expect("page 6");
        loader.get(7).expect("page 7");
        assert_eq!(loader.cached_indices(), vec![3, 4, 5, 6, 7]);

        loader.get(8).expect("page 8");
        loader.get(9).expect("page 9");
        loader.get(10).expect("page 10");
        assert_eq!(loader.cached_indices(), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn hits_do_not_refresh_a_page() {
        let mut loader = PageLoader::new(FakeSource::new(12), 1.0).expect("loader");
        loader.get(0).expect("hit");
        loader.get(7).expect("miss");
        // Page 0 was the oldest load and goes first despite the hit.
        assert_eq!(loader.cached_indices(), vec![1, 2, 3, 4, 7]);
    }

    #[test]
    fn never_holds_more_than_capacity() {
        let mut loader = PageLoader::new(FakeSource::new(40), 1.0).expect("loader");
        for index in (0..40).rev() {
            loader.get(index).expect("page");
            assert_eq!(loader.cached_indices().len(), 5);
        }
    }

    #[test]
    fn out_of_range_get_errors() {
        let mut loader = PageLoader::new(FakeSource::new(4), 1.0).expect("loader");
        assert!(matches!(
            loader.get(4),
            Err(Error::PageOutOfRange { index: 4, count: 4 })
        ));
    }

    #[test]
    fn peek_never_renders() {
        let loader = PageLoader::new(FakeSource::new(12), 1.0).expect("loader");
        assert!(loader.peek(9).is_none());
        assert!(loader.peek(0).is_some());
        assert_eq!(renders(&loader).len(), 5);
    }

    #[test]
    fn load_pos_in_the_middle_loads_two_each_side() {
        let mut loader = PageLoader::new(FakeSource::new(20), 1.0).expect("loader");
        loader.load_pos(10).expect("load");
        assert_eq!(renders(&loader)[5..], [10, 8, 9, 12, 11]);
        assert_eq!(loader.cached_indices(), vec![10, 8, 9, 12, 11]);
    }

    #[test]
    fn load_pos_near_the_start_loads_single_predecessor() {
        let mut loader = PageLoader::new(FakeSource::new(20), 1.0).expect("loader");
        loader.load_pos(9).expect("load");
        loader.load_pos(1).expect("load");
        // Page 1 was evicted by the first jump; only 0 precedes it.
        let tail: Vec<usize> = renders(&loader)[10..].to_vec();
        assert_eq!(tail, vec![1, 0, 3, 2]);
    }

    #[test]
    fn load_pos_at_the_end_loads_predecessors_only() {
        let mut loader = PageLoader::new(FakeSource::new(20), 1.0).expect("loader");
        loader.load_pos(19).expect("load");
        assert_eq!(renders(&loader)[5..], [19, 17, 18]);
    }

    #[test]
    fn load_pos_next_to_last_loads_single_successor() {
        let mut loader = PageLoader::new(FakeSource::new(20), 1.0).expect("loader");
        loader.load_pos(18).expect("load");
        assert_eq!(renders(&loader)[5..], [18, 16, 17, 19]);
    }

    #[test]
    fn load_pos_refreshes_cached_pages_without_rendering() {
        let mut loader = PageLoader::new(FakeSource::new(12), 1.0).expect("loader");
        loader.load_pos(2).expect("load");
        assert_eq!(renders(&loader).len(), 5);
        assert_eq!(loader.cached_indices(), vec![2, 0, 1, 4, 3]);

        loader.get(9).expect("miss");
        assert_eq!(loader.cached_indices(), vec![0, 1, 4, 3, 9]);
    }

    #[test]
    fn load_pos_out_of_range_is_ignored() {
        let mut loader = PageLoader::new(FakeSource::new(20), 1.0).expect("loader");
        loader.load_pos(20).expect("no-op");
        assert_eq!(renders(&loader).len(), 5);
    }

    #[test]
    fn load_pos_keeps_the_target_resident() {
        let mut loader = PageLoader::new(FakeSource::new(30), 1.0).expect("loader");
        for pos in [14, 3, 27, 0, 29, 28, 1] {
            loader.load_pos(pos).expect("load");
            let first = pos.saturating_sub(2);
            let last = (pos + 2).min(29);
            for index in first..=last {
                assert!(loader.peek(index).is_some(), "page {index} should be cached");
            }
        }
    }

    #[test]
    fn render_scale_is_applied() {
        let loader = PageLoader::new(FakeSource::new(1), 2.0).expect("loader");
        let page = loader.peek(0).expect("cached");
        assert_eq!((page.width, page.height), (20, 40));
    }
}
