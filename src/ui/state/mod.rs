// SPDX-License-Identifier: MPL-2.0
//! Reusable UI state.

pub mod viewport;

pub use viewport::ViewportState;
