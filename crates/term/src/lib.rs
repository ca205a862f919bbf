//! Terminal presentation module.
//!
//! This is the I/O side of the renderer: it serializes a composed frame
//! buffer into one contiguous block of terminal output and flushes it
//! atomically, and it hosts the animation runner that drives the pipeline
//! frame after frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One cursor-home-prefixed write per frame (no visible tearing)
//! - Allow headless runs through the [`DisplaySink`] trait

pub mod compositor;
pub mod renderer;
pub mod runner;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use compositor::encode_frame_into;
pub use renderer::{DisplaySink, TerminalRenderer};
pub use runner::{Animation, StopToken};
