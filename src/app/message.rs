// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::capture;
use crate::ui::editor;
use crate::ui::notifications;
use crate::ui::save_prompt;
use crate::ui::settings;
use crate::ui::sourcing;
use crate::ui::viewer;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sourcing(sourcing::Message),
    Viewer(viewer::Message),
    Editor(editor::Message),
    Capture(capture::Message),
    Settings(settings::Message),
    SavePrompt(save_prompt::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    EscapePressed,
    /// Ctrl+Z (Cmd+Z on macOS).
    UndoPressed,
    WindowResized(Size),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional PDF to open on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (state, bookmarks).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR`.
    pub data_dir: Option<PathBuf>,
    /// Optional config directory override (`settings.toml`).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
}
