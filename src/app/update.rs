// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens never touch each other directly: they report events, and the
//! handlers below turn those into screen switches, persistence and
//! notifications.

use super::persisted_state::AppState;
use super::{paths, persistence, Message, Screen};
use crate::capture::Handedness;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::capture::{self, Event as CaptureEvent};
use crate::ui::design_tokens::sizing;
use crate::ui::editor::{self, Event as EditorEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::save_prompt::{self, Event as SavePromptEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::sourcing;
use crate::ui::viewer;
use iced::{Size, Task};
use std::path::{Path, PathBuf};

/// File extension accepted by the file dialog and drag and drop.
const PDF_EXTENSION: &str = "pdf";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub viewer: &'a mut Option<viewer::State>,
    pub editor: &'a mut Option<editor::State>,
    pub capture: &'a mut Option<capture::State>,
    pub settings: &'a mut settings::State,
    pub save_prompt: &'a mut Option<save_prompt::State>,
    pub window_size: &'a mut Size,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
    pub data_dir: &'a Option<PathBuf>,
    pub config_dir: &'a Option<PathBuf>,
}

impl UpdateContext<'_> {
    fn handedness(&self) -> Handedness {
        Handedness::from_left_handed(self.config.left_handed())
    }

    /// Space left for the page list below the viewer toolbar.
    fn viewer_size(&self) -> Size {
        Size::new(
            self.window_size.width,
            (self.window_size.height - sizing::TOOLBAR_HEIGHT).max(0.0),
        )
    }

    fn push_state_warning(&mut self, warning: Option<String>) {
        if let Some(key) = warning {
            self.notifications.push(Notification::warning(key));
        }
    }
}

/// Returns `true` if `path` names a PDF file.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

pub fn handle_sourcing_message(ctx: &mut UpdateContext<'_>, message: sourcing::Message) -> Task<Message> {
    match message {
        sourcing::Message::OpenFileRequested => handle_open_file_dialog(ctx.app_state.last_open_directory.clone()),
        sourcing::Message::OpenSettings => {
            *ctx.screen = Screen::Settings;
            Task::none()
        }
    }
}

/// Opens the system file dialog, filtered to PDF files.
pub fn handle_open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("PDF", &[PDF_EXTENSION]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    open_document(ctx, &path);
    Task::none()
}

/// Handles a file dropped on the window.
///
/// Drops are only accepted while no page is being edited or captured.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !matches!(*ctx.screen, Screen::Sourcing | Screen::Viewer) || ctx.save_prompt.is_some() {
        log::debug!("Ignoring drop of {} on {:?}", path.display(), ctx.screen);
        return Task::none();
    }
    if !is_pdf(&path) {
        ctx.notifications.push(Notification::warning("notification-drop-not-pdf"));
        return Task::none();
    }
    open_document(ctx, &path);
    Task::none()
}

/// Replaces the open document with `path`, or returns to the sourcing
/// screen with an error notification.
pub fn open_document(ctx: &mut UpdateContext<'_>, path: &Path) {
    let viewport = ctx.viewer_size();
    match viewer::State::open(path, ctx.config.render_scale(), ctx.data_dir.clone(), viewport) {
        Ok((state, warning)) => {
            if let Some(notification) = warning {
                ctx.notifications.push(notification);
            }
            *ctx.viewer = Some(state);
            *ctx.editor = None;
            *ctx.capture = None;
            *ctx.screen = Screen::Viewer;

            ctx.app_state.set_last_open_directory_from_file(path);
            let warning = ctx.app_state.save_to(ctx.data_dir.clone());
            ctx.push_state_warning(warning);
        }
        Err(err) => {
            log::error!("Failed to open {}: {err}", path.display());
            *ctx.viewer = None;
            *ctx.screen = Screen::Sourcing;
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
}

pub fn handle_viewer_message(ctx: &mut UpdateContext<'_>, message: viewer::Message) -> Task<Message> {
    let Some(state) = ctx.viewer.as_mut() else {
        return Task::none();
    };
    let (effect, task) = state.handle_message(message);
    handle_viewer_effect(ctx, effect);
    task.map(Message::Viewer)
}

pub fn handle_viewer_effect(ctx: &mut UpdateContext<'_>, effect: viewer::Effect) {
    match effect {
        viewer::Effect::None => {}
        viewer::Effect::OpenSettings => *ctx.screen = Screen::Settings,
        viewer::Effect::OpenEditor(page) => {
            log::info!("Editing page {}", page.index + 1);
            *ctx.editor = Some(editor::State::new(page, ctx.handedness()));
            *ctx.screen = Screen::Editor;
        }
        viewer::Effect::OpenCapture(page) => {
            log::info!("Capturing from page {}", page.index + 1);
            *ctx.capture = Some(capture::State::new(page, ctx.handedness()));
            *ctx.screen = Screen::Capture;
        }
        viewer::Effect::CloseDocument => {
            if let Some(state) = ctx.viewer.take() {
                log::info!("Closed {}", state.path().display());
            }
            *ctx.screen = Screen::Sourcing;
        }
        viewer::Effect::Notify(notification) => ctx.notifications.push(notification),
    }
}

pub fn handle_editor_message(ctx: &mut UpdateContext<'_>, message: editor::Message) -> Task<Message> {
    let Some(state) = ctx.editor.as_mut() else {
        return Task::none();
    };
    match state.update(message) {
        EditorEvent::None => {}
        EditorEvent::SaveRequested(image) => open_save_prompt(ctx, image),
        EditorEvent::ExitEditor => {
            *ctx.editor = None;
            *ctx.screen = Screen::Viewer;
        }
        EditorEvent::Notify(notification) => ctx.notifications.push(notification),
    }
    Task::none()
}

pub fn handle_capture_message(ctx: &mut UpdateContext<'_>, message: capture::Message) -> Task<Message> {
    let Some(state) = ctx.capture.as_mut() else {
        return Task::none();
    };
    match state.update(message) {
        CaptureEvent::None => {}
        CaptureEvent::SaveRequested(image) => open_save_prompt(ctx, image),
        CaptureEvent::Exit => {
            *ctx.capture = None;
            *ctx.screen = Screen::Viewer;
        }
        CaptureEvent::Notify(notification) => ctx.notifications.push(notification),
    }
    Task::none()
}

/// Shows the file name prompt for `image`, starting in the last save
/// directory if it still exists.
fn open_save_prompt(ctx: &mut UpdateContext<'_>, image: image_rs::RgbaImage) {
    let dir = ctx
        .app_state
        .last_save_directory
        .clone()
        .filter(|dir| dir.is_dir())
        .or_else(|| paths::get_export_dir(ctx.config.export.directory.clone()));
    match dir {
        Some(dir) => *ctx.save_prompt = Some(save_prompt::State::new(image, dir)),
        None => {
            log::error!("No export directory available");
            ctx.notifications.push(Notification::error("notification-export-dir-missing"));
        }
    }
}

pub fn handle_save_prompt_message(ctx: &mut UpdateContext<'_>, message: save_prompt::Message) -> Task<Message> {
    let Some(prompt) = ctx.save_prompt.as_mut() else {
        return Task::none();
    };
    match prompt.update(message) {
        SavePromptEvent::None => {}
        SavePromptEvent::Cancelled => *ctx.save_prompt = None,
        SavePromptEvent::Saved(path) => {
            *ctx.save_prompt = None;
            ctx.notifications.push(
                Notification::success("notification-image-saved")
                    .with_arg("path", path.display().to_string()),
            );
            ctx.app_state.set_last_save_directory_from_file(&path);
            let warning = ctx.app_state.save_to(ctx.data_dir.clone());
            ctx.push_state_warning(warning);
        }
        SavePromptEvent::Failed(key) => {
            *ctx.save_prompt = None;
            ctx.notifications.push(Notification::error(key));
        }
    }
    Task::none()
}

pub fn handle_settings_message(ctx: &mut UpdateContext<'_>, message: settings::Message) -> Task<Message> {
    let event = ctx.settings.update(message);
    handle_settings_event(ctx, event);
    Task::none()
}

pub fn handle_settings_event(ctx: &mut UpdateContext<'_>, event: SettingsEvent) {
    match event {
        SettingsEvent::None => {}
        SettingsEvent::BackToViewer => {
            *ctx.screen = if ctx.viewer.is_some() {
                Screen::Viewer
            } else {
                Screen::Sourcing
            };
        }
        SettingsEvent::LeftHandedChanged(left_handed) => {
            ctx.config.general.left_handed = Some(left_handed);
            log::info!("Left-handed mode {}", if left_handed { "on" } else { "off" });
            if let Some(notification) = persistence::persist_config(ctx.config, ctx.config_dir.clone()) {
                ctx.notifications.push(notification);
            }
        }
        SettingsEvent::ClearAllBookmarks => {
            let notification = persistence::clear_all_bookmarks(ctx.viewer.as_mut(), ctx.data_dir.clone());
            ctx.notifications.push(notification);
        }
        SettingsEvent::ClearCurrentBookmarks => {
            let notification = persistence::clear_current_bookmarks(ctx.viewer.as_mut());
            ctx.notifications.push(notification);
        }
        SettingsEvent::LanguageChanged(locale) => {
            if let Some(notification) =
                persistence::apply_language_change(ctx.i18n, ctx.config, ctx.config_dir.clone(), locale)
            {
                ctx.notifications.push(notification);
            }
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            ctx.config.general.theme_mode = mode;
            if let Some(notification) = persistence::persist_config(ctx.config, ctx.config_dir.clone()) {
                ctx.notifications.push(notification);
            }
        }
    }
}

/// Escape closes the topmost layer: the save prompt, then whatever the
/// current screen considers its back action.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.save_prompt.take().is_some() {
        return Task::none();
    }
    match *ctx.screen {
        Screen::Sourcing => {}
        Screen::Viewer => {
            if let Some(state) = ctx.viewer.as_mut() {
                let effect = state.handle_escape();
                handle_viewer_effect(ctx, effect);
            }
        }
        Screen::Editor => {
            *ctx.editor = None;
            *ctx.screen = Screen::Viewer;
        }
        Screen::Capture => {
            *ctx.capture = None;
            *ctx.screen = Screen::Viewer;
        }
        Screen::Settings => {
            let event = ctx.settings.handle_escape();
            handle_settings_event(ctx, event);
        }
    }
    Task::none()
}

pub fn handle_undo(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen == Screen::Editor && ctx.save_prompt.is_none() {
        if let Some(state) = ctx.editor.as_mut() {
            state.handle_undo();
        }
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    let viewport = ctx.viewer_size();
    if let Some(state) = ctx.viewer.as_mut() {
        state.set_viewport_estimate(viewport);
    }
    Task::none()
}
