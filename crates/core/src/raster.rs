//! Rasterizer module - cube-face sampling with depth-tested plotting
//!
//! Each face is a dense grid of sample points over `[-half, +half)` on two
//! axes with the third pinned to the face plane. Every sample is rotated,
//! projected, bounds-checked and depth-tested; the closest sample per cell
//! wins the frame.

use crate::fb::FrameBuffer;
use crate::project::project;
use crate::rotate::Rotation;
use crate::types::{Face, RenderConfig, Vec3};

/// Map a face-grid parameter pair `(u, v)` onto the cube surface.
///
/// The mappings orient every face outward; `half` is the cube half extent.
pub fn face_point(face: Face, u: f32, v: f32, half: f32) -> Vec3 {
    match face {
        Face::Front => Vec3::new(u, v, -half),
        Face::Right => Vec3::new(half, v, u),
        Face::Left => Vec3::new(-half, v, -u),
        Face::Back => Vec3::new(-u, v, half),
        Face::Bottom => Vec3::new(u, -half, -v),
        Face::Top => Vec3::new(u, half, v),
    }
}

/// Rotate, project and depth-test one sample point.
///
/// Samples behind the camera or outside the viewport are skipped silently.
/// The depth test is strict: a sample only wins a cell when it is closer
/// than what the cell already holds, so re-plotting an identical sample is
/// a no-op and ties keep the incumbent.
pub fn draw_point(
    fb: &mut FrameBuffer,
    config: &RenderConfig,
    rotation: &Rotation,
    p: Vec3,
    glyph: char,
) {
    let rotated = rotation.apply(p);

    let Some(sp) = project(rotated, config) else {
        return;
    };
    let Some(index) = fb.index(sp.x, sp.y) else {
        return;
    };

    if sp.inv_z > fb.depth_at(index) {
        fb.set(index, sp.inv_z, glyph);
    }
}

/// Rasterize all six cube faces into the frame buffer.
///
/// Faces are walked in the fixed order of [`Face::ALL`], each as a nested
/// u-outer, v-inner grid at the configured step. Iteration order is for
/// reproducibility only; the image is fully determined by the depth test.
pub fn rasterize_into(rotation: &Rotation, config: &RenderConfig, fb: &mut FrameBuffer) {
    let half = config.half_extent;
    let step = config.sample_step;

    for face in Face::ALL {
        let glyph = face.glyph();
        let mut u = -half;
        while u < half {
            let mut v = -half;
            while v < half {
                draw_point(fb, config, rotation, face_point(face, u, v, half), glyph);
                v += step;
            }
            u += step;
        }
    }
}
