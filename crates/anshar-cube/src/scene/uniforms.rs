//! CPU-side uniform records, split by update cadence the way the shader
//! consumes them: the camera pair (view rarely changes, projection follows the
//! window aspect) and one model record per draw that needs its own
//! world/color data.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

/// Camera view matrix (group 0, binding 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ViewUniform {
    pub view: [[f32; 4]; 4],
}

impl ViewUniform {
    pub fn new(view: Mat4) -> Self {
        Self {
            view: view.to_cols_array_2d(),
        }
    }
}

/// Camera projection matrix (group 0, binding 1).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ProjectionUniform {
    pub projection: [[f32; 4]; 4],
}

impl ProjectionUniform {
    pub fn new(projection: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
        }
    }
}

/// Per-draw world transform + color (group 1, binding 0).
///
/// The same record feeds both shader stages: the vertex path reads the world
/// matrix, the fragment path reads the color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ModelUniform {
    pub world: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl ModelUniform {
    pub fn new(world: Mat4, color: Vec4) -> Self {
        Self {
            world: world.to_cols_array_2d(),
            color: color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Uniform blocks must match their WGSL declarations: a mat4x4<f32> is 64
    // bytes and binding sizes stay 16-byte multiples.

    #[test]
    fn view_uniform_is_one_matrix() {
        assert_eq!(std::mem::size_of::<ViewUniform>(), 64);
    }

    #[test]
    fn projection_uniform_is_one_matrix() {
        assert_eq!(std::mem::size_of::<ProjectionUniform>(), 64);
    }

    #[test]
    fn model_uniform_is_matrix_plus_color() {
        assert_eq!(std::mem::size_of::<ModelUniform>(), 80);
        assert_eq!(std::mem::size_of::<ModelUniform>() % 16, 0);
    }

    #[test]
    fn matrix_round_trips_through_the_record() {
        let m = Mat4::from_rotation_y(0.7);
        let u = ViewUniform::new(m);
        assert_eq!(Mat4::from_cols_array_2d(&u.view), m);
    }
}
