// SPDX-License-Identifier: MPL-2.0
//! Vertical layout of the page list.
//!
//! Every page is shown at the same width, keeping its aspect ratio, stacked
//! top to bottom with a fixed gap and padding around the list. The viewer
//! needs this geometry without asking the widget tree: to know which pages
//! are on screen, which page number to show and where to scroll on a jump.

use crate::ui::design_tokens::spacing;
use std::ops::Range;

/// Space between the list edges and the pages.
pub const PAGE_PADDING: f32 = spacing::MD;
/// Space between two consecutive pages.
pub const PAGE_GAP: f32 = spacing::XS;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    width: f32,
    tops: Vec<f32>,
    bottoms: Vec<f32>,
    total_height: f32,
}

impl PageLayout {
    /// Lays out pages of the given sizes (points) for a viewport `viewport_width` wide.
    pub fn new(page_sizes: &[(f32, f32)], viewport_width: f32) -> Self {
        let width = (viewport_width - 2.0 * PAGE_PADDING).max(1.0);
        let mut tops = Vec::with_capacity(page_sizes.len());
        let mut bottoms = Vec::with_capacity(page_sizes.len());

        let mut y = PAGE_PADDING;
        for (index, &(page_width, page_height)) in page_sizes.iter().enumerate() {
            if index > 0 {
                y += PAGE_GAP;
            }
            let height = if page_width > 0.0 && page_height > 0.0 {
                width * page_height / page_width
            } else {
                width
            };
            tops.push(y);
            y += height;
            bottoms.push(y);
        }

        Self {
            width,
            tops,
            bottoms,
            total_height: y + PAGE_PADDING,
        }
    }

    pub fn len(&self) -> usize {
        self.tops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }

    /// Display width shared by every page.
    pub fn page_width(&self) -> f32 {
        self.width
    }

    pub fn page_height(&self, index: usize) -> f32 {
        match (self.tops.get(index), self.bottoms.get(index)) {
            (Some(top), Some(bottom)) => bottom - top,
            _ => 0.0,
        }
    }

    pub fn top(&self, index: usize) -> f32 {
        self.tops.get(index).copied().unwrap_or(0.0)
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Pages intersecting the window `[offset, offset + viewport_height)`.
    pub fn visible_range(&self, offset: f32, viewport_height: f32) -> Range<usize> {
        let bottom = offset + viewport_height;
        let start = self.bottoms.partition_point(|&page_bottom| page_bottom <= offset);
        let end = self.tops.partition_point(|&page_top| page_top < bottom);
        start..end.max(start)
    }

    /// Page shown in the indicator: the first page entirely on screen, else
    /// the first page partly on screen.
    pub fn indicator(&self, offset: f32, viewport_height: f32) -> Option<usize> {
        let range = self.visible_range(offset, viewport_height);
        let bottom = offset + viewport_height;
        range
            .clone()
            .find(|&index| self.tops[index] >= offset && self.bottoms[index] <= bottom)
            .or_else(|| (!range.is_empty()).then_some(range.start))
    }

    fn max_offset(&self, viewport_height: f32) -> f32 {
        (self.total_height - viewport_height).max(0.0)
    }

    /// Scroll offset that brings page `index` to the top of the viewport.
    ///
    /// Stops at the gap above the page so the previous page is fully out of view.
    pub fn scroll_offset(&self, index: usize, viewport_height: f32) -> f32 {
        let margin = if index == 0 { PAGE_PADDING } else { PAGE_GAP };
        (self.top(index) - margin).clamp(0.0, self.max_offset(viewport_height))
    }

    /// [`Self::scroll_offset`] as a fraction of the scrollable range, for `snap_to`.
    pub fn relative_offset(&self, index: usize, viewport_height: f32) -> f32 {
        let max = self.max_offset(viewport_height);
        if max <= 0.0 {
            0.0
        } else {
            self.scroll_offset(index, viewport_height) / max
        }
    }
}
