//! Scene module - rotation angle state
//!
//! The only mutable state the animation carries between frames. Angles are
//! normalized modulo a full turn after every advance; the rendered frame is
//! identical to unbounded accumulation within the first revolution, and the
//! angles stay in `[0, 2π)` forever after, so precision never degrades over
//! a long run.

use std::f32::consts::TAU;

use crate::rotate::Rotation;

/// Rotation angles in radians, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scene {
    a: f32,
    b: f32,
    c: f32,
}

impl Scene {
    /// Start head-on: all angles zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current angles `(a, b, c)`.
    pub fn angles(&self) -> (f32, f32, f32) {
        (self.a, self.b, self.c)
    }

    /// The combined rotation for the current angles.
    pub fn rotation(&self) -> Rotation {
        Rotation::from_angles(self.a, self.b, self.c)
    }

    /// Step each angle by its per-frame increment, wrapping into `[0, 2π)`.
    pub fn advance(&mut self, step_a: f32, step_b: f32, step_c: f32) {
        self.a = (self.a + step_a).rem_euclid(TAU);
        self.b = (self.b + step_b).rem_euclid(TAU);
        self.c = (self.c + step_c).rem_euclid(TAU);
    }
}
