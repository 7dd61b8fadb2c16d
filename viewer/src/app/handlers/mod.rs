//! # User Action Handlers
//!
//! State transitions triggered from the UI. Each handler takes the shared
//! state, holds the write lock only for the update, and reports whether the
//! current location changed so the caller can remount queries.

pub(crate) mod navigation;
