//! # Utility Functions
//!
//! - **[`runtime`]**: The tokio runtime that fetch and refetch tasks run on
//!
//! Display formatting lives in [`shared::utils`].

pub mod runtime;
