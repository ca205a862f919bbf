//! Animation runner: drives the render pipeline frame after frame.
//!
//! Per iteration: reset the frame buffer, rasterize, compose, present,
//! advance the angles, then sleep the fixed frame delay. Pacing is "sleep
//! after work", so the actual period is the delay plus render time and the
//! frame rate drifts under load.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::compositor::encode_frame_into;
use crate::core::{rasterize_into, FrameBuffer, Scene};
use crate::renderer::DisplaySink;
use crate::types::RenderConfig;

/// Cooperative cancellation flag, checked once per frame.
///
/// The animation has no terminal state of its own; in the binary the token
/// is never tripped and the process runs until externally interrupted.
/// Tests trip it (or call [`Animation::render_frame`] directly) to run a
/// bounded number of frames.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    inner: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// The animation loop state: scene angles plus reusable buffers.
///
/// Both the frame buffer and the outgoing byte buffer are allocated once
/// here and reused, keeping steady-state memory flat across an unbounded
/// run.
pub struct Animation {
    config: RenderConfig,
    scene: Scene,
    fb: FrameBuffer,
    frame: Vec<u8>,
}

impl Animation {
    pub fn new(config: RenderConfig) -> Self {
        let fb = FrameBuffer::new(config.width, config.height);
        // Cells plus one newline per row plus the cursor-home prefix.
        let frame = Vec::with_capacity(fb.len() + config.height as usize + 16);
        Self {
            config,
            scene: Scene::new(),
            fb,
            frame,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Render and present one frame at the current angles.
    ///
    /// This is the loop body without pacing or angle advance, so tests and
    /// benches can drive an exact number of frames.
    pub fn render_frame(&mut self, sink: &mut impl DisplaySink) -> Result<()> {
        self.fb.reset();
        rasterize_into(&self.scene.rotation(), &self.config, &mut self.fb);

        self.frame.clear();
        encode_frame_into(&self.fb, &mut self.frame)?;
        sink.present(&self.frame)?;
        Ok(())
    }

    /// Step the rotation angles by the configured per-frame increments.
    pub fn advance(&mut self) {
        self.scene.advance(
            self.config.angle_step_a,
            self.config.angle_step_b,
            self.config.angle_step_c,
        );
    }

    /// Run until the stop token trips.
    ///
    /// Display failures propagate out; everything else is an infinite
    /// render-advance-sleep cycle.
    pub fn run(&mut self, sink: &mut impl DisplaySink, stop: &StopToken) -> Result<()> {
        let delay = Duration::from_millis(self.config.frame_delay_ms);

        while !stop.is_stopped() {
            self.render_frame(sink)?;
            self.advance();
            thread::sleep(delay);
        }

        Ok(())
    }
}
