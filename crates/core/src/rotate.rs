//! Rotation module - combined three-axis rotation transform
//!
//! The cube spins about all three axes at once. Rather than applying three
//! matrices per point, the closed-form product R = Rz(c) * Ry(b) * Rx(a) is
//! precomputed once per frame and applied to every sample point.

use crate::types::Vec3;

/// A fixed rotation, stored as the rows of the combined matrix.
///
/// Pure value type: building one has no side effects and applying it cannot
/// fail. Rotations are orthogonal, so `apply` preserves vector length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    row_x: [f32; 3],
    row_y: [f32; 3],
    row_z: [f32; 3],
}

impl Rotation {
    /// Build the combined rotation for angles `(a, b, c)` in radians.
    ///
    /// `a` rotates about x, `b` about y, `c` about z, composed in that
    /// order: R = Rz(c) * Ry(b) * Rx(a).
    pub fn from_angles(a: f32, b: f32, c: f32) -> Self {
        let (sin_a, cos_a) = a.sin_cos();
        let (sin_b, cos_b) = b.sin_cos();
        let (sin_c, cos_c) = c.sin_cos();

        Self {
            row_x: [
                cos_c * cos_b,
                cos_c * sin_b * sin_a - sin_c * cos_a,
                cos_c * sin_b * cos_a + sin_c * sin_a,
            ],
            row_y: [
                sin_c * cos_b,
                sin_c * sin_b * sin_a + cos_c * cos_a,
                sin_c * sin_b * cos_a - cos_c * sin_a,
            ],
            row_z: [-sin_b, cos_b * sin_a, cos_b * cos_a],
        }
    }

    /// Rotate a point.
    pub fn apply(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.row_x[0] * p.x + self.row_x[1] * p.y + self.row_x[2] * p.z,
            self.row_y[0] * p.x + self.row_y[1] * p.y + self.row_y[2] * p.z,
            self.row_z[0] * p.x + self.row_z[1] * p.y + self.row_z[2] * p.z,
        )
    }
}
