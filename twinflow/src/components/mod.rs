//! Contains the building blocks of the demo script.
//!
//! This module provides the two concurrent activities each script runtime
//! starts back to back: the scheduled log emitter (a one-shot delayed line)
//! and the network fetch sequence in its two equivalent notations. The
//! `ScriptRuntime` composes them and keeps the script alive until both have
//! finished.

pub mod fetch;
pub mod timer;
