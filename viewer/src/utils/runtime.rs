//! Tokio runtime for async HTTP operations
//!
//! egui drives the main thread, so fetches and refetch timers run on a
//! separate multi-threaded runtime. `main` enters it before the window opens
//! so that `tokio::spawn` works from UI code.
//!
//! ```rust,ignore
//! let runtime = build_runtime()?;
//! let _enter = runtime.enter();
//! eframe::run_native(..)?;
//! ```

use tokio::runtime::{Builder, Runtime};

pub const WORKER_THREAD_NAME: &str = "viewer-io";

/// Build the runtime the query layer spawns onto.
pub fn build_runtime() -> std::io::Result<Runtime> {
    Builder::new_multi_thread()
        .thread_name(WORKER_THREAD_NAME)
        .enable_all()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_runs_spawned_tasks() {
        let runtime = build_runtime().unwrap();
        let value = runtime.block_on(async { tokio::spawn(async { 21 * 2 }).await.unwrap() });
        assert_eq!(value, 42);
    }
}
