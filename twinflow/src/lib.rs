//! # Twinflow
//!
//! One asynchronous workload, written twice.
//!
//! Twinflow hosts a small demo script that logs a startup line, schedules a
//! one-shot delayed log line, and performs a single outbound HTTP fetch whose
//! dependent stages are logged as they complete. The same script exists in
//! two notations:
//!
//! - **Classic**: the stages after the fetch are chained as dependent future
//!   combinators with one trailing failure continuation.
//! - **Sequential**: the same stages are ordinary sequential awaits inside a
//!   fallible function, with the failure handled once at the call site.
//!
//! Both notations drive the same suspend/resume contract over one cooperative
//! execution context and produce identical per-sequence log ordering. The
//! timer and the fetch are deliberately left unsynchronized so their
//! interleaving is visible when several runtimes run side by side.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use twinflow::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     // 1. Load configuration (file and environment, all fields optional).
//!     let config = DemoConfig::load()?;
//!
//!     // 2. Create a shared log sink.
//!     let sink = LogSink::new();
//!
//!     // 3. Run one script runtime to completion. It returns only once the
//!     //    fetch sequence and the scheduled timer have both finished.
//!     ScriptRuntime::new(1, &config, sink.clone()).execute().await?;
//!
//!     Ok(())
//! }
//! ```

pub const DEMO_NAME: &str = "Twinflow";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Declare all the modules in the crate.
pub mod components;
pub mod config;
pub mod runtime;
pub mod sink;

/// A prelude module for easy importing of the most common Twinflow types.
pub mod prelude {
    pub use crate::components::fetch::FetchFailure;
    pub use crate::config::{DemoConfig, Variant};
    pub use crate::runtime::ScriptRuntime;
    pub use crate::sink::LogSink;
}
