// SPDX-License-Identifier: MPL-2.0
//! Configuration and bookmark persistence triggered from the settings screen.

use super::paths;
use crate::bookmarks;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::Notification;
use crate::ui::viewer;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Writes `config` to `settings.toml`, returning a warning on failure.
pub fn persist_config(config: &Config, config_dir: Option<PathBuf>) -> Option<Notification> {
    match config::save_with_override(config, config_dir) {
        Ok(()) => None,
        Err(err) => {
            log::error!("Failed to save config: {err}");
            Some(Notification::warning("notification-config-save-error"))
        }
    }
}

/// Applies the newly selected locale and records it in the configuration.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    config_dir: Option<PathBuf>,
    locale: LanguageIdentifier,
) -> Option<Notification> {
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    log::info!("Language set to {locale}");
    persist_config(config, config_dir)
}

/// Deletes every bookmark file, then reloads the open document's list.
pub fn clear_all_bookmarks(
    viewer: Option<&mut viewer::State>,
    data_dir: Option<PathBuf>,
) -> Notification {
    let Some(dir) = paths::get_bookmarks_dir_with_override(data_dir) else {
        return Notification::error("notification-bookmarks-clear-error");
    };
    let result = bookmarks::clear_dir(&dir);
    if let Some(viewer) = viewer {
        viewer.reload_bookmarks();
    }
    match result {
        Ok(count) => {
            Notification::success("notification-bookmarks-cleared").with_arg("count", count.to_string())
        }
        Err(err) => {
            log::error!("Failed to clear bookmarks in {}: {err}", dir.display());
            Notification::error("notification-bookmarks-clear-error")
        }
    }
}

/// Deletes the open document's bookmark file.
pub fn clear_current_bookmarks(viewer: Option<&mut viewer::State>) -> Notification {
    let Some(viewer) = viewer else {
        return Notification::info("notification-no-document");
    };
    let result = viewer.store().map(|store| store.clear_current());
    viewer.reload_bookmarks();
    match result {
        Some(Ok(())) => Notification::success("notification-bookmarks-cleared-current"),
        Some(Err(err)) => {
            log::error!("Failed to clear bookmarks of {}: {err}", viewer.path().display());
            Notification::error("notification-bookmarks-clear-error")
        }
        None => Notification::error("notification-bookmarks-clear-error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use tempfile::tempdir;

    #[test]
    fn config_is_written_to_override_dir() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.general.left_handed = Some(true);

        assert!(persist_config(&config, Some(dir.path().to_path_buf())).is_none());
        let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert!(loaded.left_handed());
    }

    #[test]
    fn language_change_is_recorded() {
        let dir = tempdir().expect("temp dir");
        let mut i18n = I18n::default();
        let mut config = Config::default();
        let fr: LanguageIdentifier = "fr".parse().expect("locale");

        apply_language_change(&mut i18n, &mut config, Some(dir.path().to_path_buf()), fr.clone());
        assert_eq!(i18n.current_locale(), &fr);
        assert_eq!(config.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn clear_all_without_document_reports_count() {
        let dir = tempdir().expect("temp dir");
        let bookmarks = dir.path().join("bookmarks");
        std::fs::create_dir_all(&bookmarks).expect("mkdir");
        std::fs::write(bookmarks.join("a.pdf.bookmarks"), "1:\n").expect("write");
        std::fs::write(bookmarks.join("b.pdf.bookmarks"), "2:\n").expect("write");

        let notification = clear_all_bookmarks(None, Some(dir.path().to_path_buf()));
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(
            notification.message_args(),
            &[("count".to_string(), "2".to_string())]
        );
        assert!(std::fs::read_dir(&bookmarks).expect("read").next().is_none());
    }

    #[test]
    fn clear_current_without_document_is_informational() {
        assert_eq!(clear_current_bookmarks(None).severity(), Severity::Info);
    }
}
