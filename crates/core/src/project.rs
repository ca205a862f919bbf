//! Projection module - perspective division onto the terminal grid
//!
//! Terminal character cells are roughly twice as tall as they are wide, so
//! the horizontal axis is doubled to keep the cube visually square.

use crate::types::{RenderConfig, Vec3};

/// A projected sample: integer screen cell plus its depth-test key.
///
/// `inv_z` is the reciprocal of the camera-shifted z; larger means closer.
/// Coordinates may lie outside the viewport - bounds are the rasterizer's
/// concern, not the projector's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    pub inv_z: f32,
}

/// Project a rotated point onto the screen.
///
/// Returns `None` when the camera-shifted z is not positive (the point sits
/// behind the camera). That is normal control flow, not an error; callers
/// skip such samples.
pub fn project(p: Vec3, config: &RenderConfig) -> Option<ScreenPoint> {
    let shifted_z = p.z + config.camera_distance;
    if shifted_z <= 0.0 {
        return None;
    }

    let inv_z = 1.0 / shifted_z;

    // Integer halving: odd viewports center on the left-of-middle cell.
    let center_x = (config.width / 2) as f32;
    let center_y = (config.height / 2) as f32;

    let screen_x = center_x + config.zoom * inv_z * p.x * 2.0;
    let screen_y = center_y + config.zoom * inv_z * p.y;

    Some(ScreenPoint {
        x: screen_x as i32,
        y: screen_y as i32,
        inv_z,
    })
}
