// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Screens report outcomes (saved image, invalid page number, unreadable
//! file) by returning a [`Notification`]; the application pushes it into the
//! [`Manager`], which keeps at most three on screen and expires them on tick.
//! Errors stay until dismissed.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-image-saved"));
//! let overlay = Toast::view_overlay(&manager, &i18n, is_dark).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
