// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct owns everything shared across screens: the open document
//! (through the viewer), the page handed to the editor or capture screen,
//! the configuration and the notification manager. Screens report events
//! and the handlers in `update` translate them into side effects.

mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::capture;
use crate::ui::editor;
use crate::ui::notifications;
use crate::ui::save_prompt;
use crate::ui::settings;
use crate::ui::viewer;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    viewer: Option<viewer::State>,
    editor: Option<editor::State>,
    capture: Option<capture::State>,
    settings: settings::State,
    save_prompt: Option<save_prompt::State>,
    window_size: Size,
    /// Persisted application state (last open and save directories).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("viewer", &self.viewer)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Sourcing,
            config: Config::default(),
            viewer: None,
            editor: None,
            capture: None,
            settings: settings::State::default(),
            save_prompt: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
            data_dir: None,
            config_dir: None,
        }
    }
}

impl App {
    /// Loads configuration and state, then opens the document passed on the
    /// command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let (app_state, state_warning) = persisted_state::AppState::load_from(flags.data_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            config,
            app_state,
            data_dir: flags.data_dir,
            config_dir: flags.config_dir,
            ..Self::default()
        };

        // Show warnings for config/state loading issues
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications.push(notifications::Notification::warning(key));
        }

        if let Some(path) = flags.file_path.map(PathBuf::from) {
            let mut ctx = app.update_context();
            update::open_document(&mut ctx, &path);
        }

        (app, Task::none())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            viewer: &mut self.viewer,
            editor: &mut self.editor,
            capture: &mut self.capture,
            settings: &mut self.settings,
            save_prompt: &mut self.save_prompt,
            window_size: &mut self.window_size,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
            data_dir: &self.data_dir,
            config_dir: &self.config_dir,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.viewer {
            Some(viewer) => format!("{} - {app_name}", viewer.file_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                return Task::none();
            }
            Message::Tick(_instant) => {
                // Tick notification manager to handle auto-dismiss
                self.notifications.tick();
                return Task::none();
            }
            _ => {}
        }

        let mut ctx = self.update_context();
        match message {
            Message::Sourcing(sourcing_message) => update::handle_sourcing_message(&mut ctx, sourcing_message),
            Message::Viewer(viewer_message) => update::handle_viewer_message(&mut ctx, viewer_message),
            Message::Editor(editor_message) => update::handle_editor_message(&mut ctx, editor_message),
            Message::Capture(capture_message) => update::handle_capture_message(&mut ctx, capture_message),
            Message::Settings(settings_message) => update::handle_settings_message(&mut ctx, settings_message),
            Message::SavePrompt(prompt_message) => update::handle_save_prompt_message(&mut ctx, prompt_message),
            Message::OpenFileDialogResult(path) => update::handle_open_file_dialog_result(&mut ctx, path),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::UndoPressed => update::handle_undo(&mut ctx),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Notification(_) | Message::Tick(_) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            viewer: self.viewer.as_ref(),
            editor: self.editor.as_ref(),
            capture: self.capture.as_ref(),
            settings: &self.settings,
            save_prompt: self.save_prompt.as_ref(),
            notifications: &self.notifications,
            theme_mode: self.config.general.theme_mode,
            left_handed: self.config.left_handed(),
            is_dark: self.config.general.theme_mode.is_dark(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::settings::Message as SettingsMessage;
    use crate::ui::sourcing;
    use tempfile::{tempdir, TempDir};

    fn isolated_app() -> (App, TempDir) {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            data_dir: Some(dir.path().join("data")),
            config_dir: Some(dir.path().join("config")),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        (app, dir)
    }

    #[test]
    fn new_starts_on_sourcing_without_document() {
        let (app, _dir) = isolated_app();
        assert_eq!(app.screen(), Screen::Sourcing);
        assert!(app.viewer.is_none());
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn missing_document_reports_error_and_stays_on_sourcing() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            file_path: Some(dir.path().join("absent.pdf").to_string_lossy().into_owned()),
            data_dir: Some(dir.path().to_path_buf()),
            config_dir: Some(dir.path().to_path_buf()),
            ..Flags::default()
        };
        let (app, _task) = App::new(flags);
        assert_eq!(app.screen(), Screen::Sourcing);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn settings_round_trip_from_sourcing() {
        let (mut app, _dir) = isolated_app();
        let _ = app.update(Message::Sourcing(sourcing::Message::OpenSettings));
        assert_eq!(app.screen(), Screen::Settings);

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen(), Screen::Sourcing);
    }

    #[test]
    fn left_handed_toggle_is_persisted() {
        let (mut app, _dir) = isolated_app();
        let _ = app.update(Message::Settings(SettingsMessage::LeftHandedToggled(true)));
        assert!(app.config.left_handed());

        let (reloaded, warning) = config::load_with_override(app.config_dir.clone());
        assert!(warning.is_none());
        assert!(reloaded.left_handed());
    }

    #[test]
    fn non_pdf_drop_is_rejected() {
        let (mut app, dir) = isolated_app();
        let _ = app.update(Message::FileDropped(dir.path().join("photo.png")));
        assert_eq!(app.screen(), Screen::Sourcing);
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn resize_is_tracked() {
        let (mut app, _dir) = isolated_app();
        let _ = app.update(Message::WindowResized(Size::new(1024.0, 768.0)));
        assert_eq!(app.window_size, Size::new(1024.0, 768.0));
    }
}
