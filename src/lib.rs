//! Terminal cube (workspace facade crate).
//!
//! This package keeps the `tui_cube::{core,term,types}` public API stable while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_cube_core as core;
pub use tui_cube_term as term;
pub use tui_cube_types as types;
