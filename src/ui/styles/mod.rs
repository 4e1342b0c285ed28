// SPDX-License-Identifier: MPL-2.0
//! Widget styles shared across screens.

pub mod button;
pub mod container;
