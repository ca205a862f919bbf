//! Core rendering pipeline - pure, deterministic, and testable
//!
//! This module contains the whole software rasterization pipeline for the
//! spinning cube. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same angles and config produce identical frames
//! - **Testable**: Every stage is a pure function over plain data
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//! - **Fast**: Zero-allocation hot path for per-frame rasterization
//!
//! # Module Structure
//!
//! - [`scene`]: Rotation angles advancing at fixed per-frame increments
//! - [`rotate`]: Combined three-axis rotation transform
//! - [`project`]: Perspective projection onto the terminal grid
//! - [`fb`]: Flat depth + glyph frame buffer
//! - [`raster`]: Cube-face sampling and depth-tested point plotting
//!
//! # Pipeline
//!
//! Each frame flows through the stages in order:
//!
//! 1. [`FrameBuffer::reset`](fb::FrameBuffer::reset) clears depth and glyphs
//! 2. [`rasterize_into`](raster::rasterize_into) samples all six faces,
//!    rotating and projecting every point and keeping the closest survivor
//!    per cell
//! 3. The terminal layer serializes the glyph rows into one output block
//! 4. [`Scene::advance`](scene::Scene::advance) steps the rotation angles
//!
//! # Example
//!
//! ```
//! use tui_cube_core::{rasterize_into, FrameBuffer, Scene};
//! use tui_cube_types::RenderConfig;
//!
//! let config = RenderConfig::default();
//! let mut scene = Scene::new();
//! let mut fb = FrameBuffer::new(config.width, config.height);
//!
//! fb.reset();
//! rasterize_into(&scene.rotation(), &config, &mut fb);
//! scene.advance(config.angle_step_a, config.angle_step_b, config.angle_step_c);
//!
//! // Something landed on screen.
//! assert!(fb.glyphs().iter().any(|&g| g != ' '));
//! ```

pub mod fb;
pub mod project;
pub mod raster;
pub mod rotate;
pub mod scene;

pub use tui_cube_types as types;

// Re-export commonly used items for convenience
pub use fb::FrameBuffer;
pub use project::{project, ScreenPoint};
pub use raster::{draw_point, face_point, rasterize_into};
pub use rotate::Rotation;
pub use scene::Scene;
