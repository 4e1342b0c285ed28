// SPDX-License-Identifier: MPL-2.0
//! Viewer component: the open document, its page cache and bookmarks.

use super::geometry::PageLayout;
use crate::bookmarks::{BookmarkList, BookmarkStore, EditOutcome};
use crate::document::{PageLoader, PageSource, PdfDocument, RenderedPage};
use crate::error::{Error, Result};
use crate::ui::notifications::Notification;
use crate::ui::state::ViewportState;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{Rectangle, Size, Task};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifier used for the page list scrollable.
pub const SCROLLABLE_ID: &str = "viewer-page-scrollable";

/// Points assumed for a page whose size cannot be read (US Letter).
const FALLBACK_PAGE_SIZE: (f32, f32) = (612.0, 792.0);

#[derive(Debug, Clone)]
pub enum Message {
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    JumpInputChanged(String),
    JumpSubmitted,
    ToggleDrawer,
    BookmarkSelected(u32),
    AddBookmark,
    RemoveBookmark(u32),
    EditBookmark(u32),
    EditPageChanged(String),
    EditTitleChanged(String),
    EditSubmitted,
    EditCancelled,
    OpenSettings,
    OpenCapture,
    OpenEditor,
    CloseDocument,
}

/// Side effects the application should perform after a viewer message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    OpenSettings,
    OpenCapture(Arc<RenderedPage>),
    OpenEditor(Arc<RenderedPage>),
    CloseDocument,
    Notify(Notification),
}

/// Reason the bookmark form refused the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    OutOfRange { count: usize },
    Duplicate,
}

/// Inline editor for one bookmark of the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkForm {
    pub page: u32,
    pub page_input: String,
    pub title_input: String,
    pub error: Option<FormError>,
}

/// Viewer state over any page source; the application uses mupdf.
pub struct State<S: PageSource = PdfDocument> {
    path: PathBuf,
    loader: PageLoader<S>,
    page_sizes: Vec<(f32, f32)>,
    layout: PageLayout,
    viewport: ViewportState,
    bookmarks: BookmarkList,
    store: Option<BookmarkStore>,
    drawer_open: bool,
    jump_input: String,
    form: Option<BookmarkForm>,
}

impl<S: PageSource> std::fmt::Debug for State<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("path", &self.path)
            .field("pages", &self.page_sizes.len())
            .field("bookmarks", &self.bookmarks.len())
            .field("drawer_open", &self.drawer_open)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Opens `path` and loads its bookmarks.
    ///
    /// `viewport` is the expected size of the page list until the scrollable
    /// reports its real bounds. A bookmark file that cannot be read yields an
    /// empty list and a warning.
    pub fn open(
        path: &Path,
        scale: f32,
        data_dir: Option<PathBuf>,
        viewport: Size,
    ) -> Result<(Self, Option<Notification>)> {
        let document = PdfDocument::open(path)?;
        let loader = PageLoader::new(document, scale)?;
        let store = BookmarkStore::for_document(path, data_dir);
        Ok(Self::with_loader(path, loader, store, viewport))
    }
}

impl<S: PageSource> State<S> {
    /// Builds the viewer around an already filled page cache.
    pub fn with_loader(
        path: &Path,
        loader: PageLoader<S>,
        store: Option<BookmarkStore>,
        viewport: Size,
    ) -> (Self, Option<Notification>) {
        let page_sizes: Vec<(f32, f32)> = (0..loader.len())
            .map(|index| {
                loader.page_size(index).unwrap_or_else(|err| {
                    log::warn!("Cannot read size of page {}: {}", index + 1, err);
                    FALLBACK_PAGE_SIZE
                })
            })
            .collect();

        let (bookmarks, warning) = match store.as_ref().map(BookmarkStore::load) {
            Some(Ok(list)) => (list, None),
            Some(Err(err)) => {
                log::warn!("Cannot read bookmarks for {}: {}", path.display(), err);
                (
                    BookmarkList::new(),
                    Some(Notification::warning("notification-bookmarks-load-error")),
                )
            }
            None => (BookmarkList::new(), None),
        };

        log::info!(
            "Opened {} ({} pages, {} bookmarks)",
            path.display(),
            page_sizes.len(),
            bookmarks.len()
        );

        let mut state = Self {
            path: path.to_path_buf(),
            layout: PageLayout::new(&page_sizes, viewport.width),
            loader,
            page_sizes,
            viewport: ViewportState {
                estimated: Some(viewport),
                ..ViewportState::default()
            },
            bookmarks,
            store,
            drawer_open: false,
            jump_input: String::new(),
            form: None,
        };
        state.fetch_visible();
        (state, warning)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn page_count(&self) -> usize {
        self.page_sizes.len()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn bookmarks(&self) -> &BookmarkList {
        &self.bookmarks
    }

    pub fn store(&self) -> Option<&BookmarkStore> {
        self.store.as_ref()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn jump_input(&self) -> &str {
        &self.jump_input
    }

    pub fn form(&self) -> Option<&BookmarkForm> {
        self.form.as_ref()
    }

    /// Cached bitmap of a page, if resident.
    pub fn cached_page(&self, index: usize) -> Option<Arc<RenderedPage>> {
        self.loader.peek(index)
    }

    fn viewport_height(&self) -> f32 {
        self.viewport.size().map_or(0.0, |size| size.height)
    }

    /// Zero-based page shown in the indicator.
    pub fn current_page(&self) -> usize {
        self.layout
            .indicator(self.viewport.offset.y, self.viewport_height())
            .unwrap_or(0)
    }

    /// Updates the assumed viewport size after a window resize, until the
    /// scrollable reports its own bounds.
    pub fn set_viewport_estimate(&mut self, size: Size) {
        self.viewport.estimated = Some(size);
        if self.viewport.bounds.is_none() {
            self.layout = PageLayout::new(&self.page_sizes, size.width);
            self.fetch_visible();
        }
    }

    /// Rereads the bookmark file, after bookmarks were cleared elsewhere.
    pub fn reload_bookmarks(&mut self) {
        self.form = None;
        self.bookmarks = match self.store.as_ref().map(BookmarkStore::load) {
            Some(Ok(list)) => list,
            Some(Err(err)) => {
                log::warn!("Cannot reload bookmarks: {}", err);
                BookmarkList::new()
            }
            None => BookmarkList::new(),
        };
    }

    /// Escape closes the drawer first, then the document.
    pub fn handle_escape(&mut self) -> Effect {
        if self.drawer_open {
            self.drawer_open = false;
            self.form = None;
            Effect::None
        } else {
            Effect::CloseDocument
        }
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ViewportChanged { bounds, offset } => {
                if self.viewport.update(bounds, offset) {
                    self.layout = PageLayout::new(&self.page_sizes, bounds.width);
                }
                self.fetch_visible();
                (Effect::None, Task::none())
            }
            Message::JumpInputChanged(input) => {
                self.jump_input = input;
                (Effect::None, Task::none())
            }
            Message::JumpSubmitted => {
                let count = self.page_count();
                match self.jump_input.trim().parse::<usize>() {
                    Ok(page) if (1..=count).contains(&page) => {
                        self.jump_input.clear();
                        (Effect::None, self.jump_to(page - 1))
                    }
                    _ => (
                        Effect::Notify(
                            Notification::error("notification-jump-invalid")
                                .with_arg("count", count.to_string()),
                        ),
                        Task::none(),
                    ),
                }
            }
            Message::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
                self.form = None;
                (Effect::None, Task::none())
            }
            Message::BookmarkSelected(page) => {
                let index = page.saturating_sub(1) as usize;
                if index >= self.page_count() {
                    let err = Error::PageOutOfRange {
                        index,
                        count: self.page_count(),
                    };
                    return (
                        Effect::Notify(Notification::error(err.i18n_key())),
                        Task::none(),
                    );
                }
                self.drawer_open = false;
                self.form = None;
                (Effect::None, self.jump_to(index))
            }
            Message::AddBookmark => (self.add_bookmark(), Task::none()),
            Message::RemoveBookmark(page) => {
                if self.form.as_ref().is_some_and(|form| form.page == page) {
                    self.form = None;
                }
                let effect = match self.bookmarks.remove(page) {
                    Some(_) => self.persist_bookmarks(),
                    None => Effect::None,
                };
                (effect, Task::none())
            }
            Message::EditBookmark(page) => {
                self.form = self
                    .bookmarks
                    .iter()
                    .find(|bookmark| bookmark.page == page)
                    .map(|bookmark| BookmarkForm {
                        page,
                        page_input: page.to_string(),
                        title_input: bookmark.title.clone().unwrap_or_default(),
                        error: None,
                    });
                (Effect::None, Task::none())
            }
            Message::EditPageChanged(input) => {
                if let Some(form) = self.form.as_mut() {
                    form.page_input = input;
                    form.error = None;
                }
                (Effect::None, Task::none())
            }
            Message::EditTitleChanged(input) => {
                if let Some(form) = self.form.as_mut() {
                    form.title_input = input;
                }
                (Effect::None, Task::none())
            }
            Message::EditSubmitted => (self.submit_form(), Task::none()),
            Message::EditCancelled => {
                self.form = None;
                (Effect::None, Task::none())
            }
            Message::OpenSettings => (Effect::OpenSettings, Task::none()),
            Message::OpenCapture => (
                self.with_current_page(Effect::OpenCapture),
                Task::none(),
            ),
            Message::OpenEditor => (
                self.with_current_page(Effect::OpenEditor),
                Task::none(),
            ),
            Message::CloseDocument => (Effect::CloseDocument, Task::none()),
        }
    }

    /// Renders the pages on screen through the cache, at most one ring's worth.
    fn fetch_visible(&mut self) {
        let range = self
            .layout
            .visible_range(self.viewport.offset.y, self.viewport_height());
        let capacity = self.loader.capacity();
        for index in range.take(capacity) {
            if let Err(err) = self.loader.get(index) {
                log::warn!("Cannot render page {}: {}", index + 1, err);
            }
        }
    }

    /// Loads the neighbourhood of `index` and scrolls it into view.
    fn jump_to(&mut self, index: usize) -> Task<Message> {
        if let Err(err) = self.loader.load_pos(index) {
            log::warn!("Cannot load pages around {}: {}", index + 1, err);
        }
        let height = self.viewport_height();
        self.viewport
            .scroll_to(self.layout.scroll_offset(index, height));
        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: self.layout.relative_offset(index, height),
            },
        )
    }

    /// Cache slots in load order, oldest first.
    pub fn cached_indices(&self) -> Vec<usize> {
        self.loader.cached_indices()
    }

    fn with_current_page(&mut self, effect: fn(Arc<RenderedPage>) -> Effect) -> Effect {
        match self.loader.get(self.current_page()) {
            Ok(page) => effect(page),
            Err(err) => {
                log::error!("Cannot render current page: {}", err);
                Effect::Notify(Notification::error(err.i18n_key()))
            }
        }
    }

    fn add_bookmark(&mut self) -> Effect {
        let page = self.current_page() as u32 + 1;
        if !self.bookmarks.add(page, None) {
            return Effect::Notify(
                Notification::info("notification-bookmark-exists").with_arg("page", page.to_string()),
            );
        }
        match self.persist_bookmarks() {
            Effect::None => Effect::Notify(
                Notification::success("notification-bookmark-added").with_arg("page", page.to_string()),
            ),
            failure => failure,
        }
    }

    fn submit_form(&mut self) -> Effect {
        let Some(form) = self.form.as_mut() else {
            return Effect::None;
        };
        let outcome = self.bookmarks.edit(
            form.page,
            &form.page_input,
            &form.title_input,
            self.page_sizes.len(),
        );
        match outcome {
            EditOutcome::Updated => {
                self.form = None;
                self.persist_bookmarks()
            }
            EditOutcome::OutOfRange { count } => {
                form.error = Some(FormError::OutOfRange { count });
                Effect::None
            }
            EditOutcome::Duplicate => {
                form.error = Some(FormError::Duplicate);
                Effect::None
            }
            EditOutcome::NotFound => {
                self.form = None;
                Effect::None
            }
        }
    }

    fn persist_bookmarks(&self) -> Effect {
        let Some(store) = self.store.as_ref() else {
            return Effect::None;
        };
        match store.save(&self.bookmarks) {
            Ok(()) => Effect::None,
            Err(err) => {
                log::error!("Cannot save bookmarks: {}", err);
                Effect::Notify(Notification::error("notification-bookmarks-save-error"))
            }
        }
    }
}
