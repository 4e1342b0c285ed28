// SPDX-License-Identifier: MPL-2.0
//! A toast's content: how serious it is and which message to show.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Handle to a toast currently held by the [`Manager`](super::Manager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays on screen until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// How long a toast stays on screen once shown.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// Message to show, as an i18n key plus Fluent arguments.
///
/// Keys are resolved when the toast is drawn, so a language change also
/// applies to toasts already on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            severity,
            key: key.into(),
            args: Vec::new(),
        }
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Adds a Fluent argument, e.g. `("page", "4")`.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.args
    }
}
