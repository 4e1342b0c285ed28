// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`sourcing`] - Start screen for picking a PDF
//! - [`viewer`] - Scrolling page list with bookmarks and jump-to-page
//! - [`editor`] - Pen, line and highlighter annotation of one page
//! - [`capture`] - Crop a region of one page
//! - [`settings`] - Handedness, bookmarks, language and theme
//! - [`save_prompt`] - File name prompt shared by the editor and capture screens
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (viewport)
//! - [`components`] - Reusable UI components
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod capture;
pub mod components;
pub mod design_tokens;
pub mod editor;
pub mod icons;
pub mod notifications;
pub mod save_prompt;
pub mod settings;
pub mod sourcing;
pub mod state;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod viewer;
