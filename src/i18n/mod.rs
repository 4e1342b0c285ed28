// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale is resolved from the command line, then the config file, then the
//! operating system, and finally falls back to `en-US`.

pub mod fluent;
