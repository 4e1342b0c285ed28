// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the scrollable's bounds and scroll offset as reported by its
//! `on_scroll` callback.

use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};

#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    pub offset: AbsoluteOffset,
    pub bounds: Option<Rectangle>,
    /// Size assumed until the scrollable reports its bounds.
    pub estimated: Option<Size>,
}

impl ViewportState {
    /// Records a viewport report. Returns true if the width changed, which
    /// means every page height changed too.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        let previous_width = self.size().map(|size| size.width);
        self.offset = offset;
        self.bounds = Some(bounds);
        previous_width.is_some_and(|width| (width - bounds.width).abs() > f32::EPSILON)
    }

    /// Best known viewport size: reported bounds first, then the estimate.
    pub fn size(&self) -> Option<Size> {
        self.bounds.map(|bounds| bounds.size()).or(self.estimated)
    }

    /// Moves the offset ahead of the scrollable, after a programmatic scroll.
    pub fn scroll_to(&mut self, y: f32) {
        self.offset = AbsoluteOffset { x: 0.0, y };
    }
}
