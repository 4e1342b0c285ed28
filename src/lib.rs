// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a PDF page viewer built with the Iced GUI framework.
//!
//! It renders pages on demand through a small page cache, keeps per-document
//! bookmarks, and lets the user annotate a page or crop a region of it into
//! a JPEG image.

pub mod annotation;
pub mod app;
pub mod bookmarks;
pub mod capture;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod i18n;
pub mod icon;
pub mod layout;
pub mod ui;
