//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod live_indicator;
pub mod nav_bar;
pub mod overview;
pub mod status;
pub mod tables;
pub mod tabs;
