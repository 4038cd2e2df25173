//! Pure scene math: camera, per-mesh world transforms, the animated cube
//! color, and the point-light planar-shadow projection.
//!
//! Everything here is a function of time (or constant) with no GPU coupling,
//! which keeps the frame loop trivial and the math testable.

use std::f32::consts::FRAC_PI_4;

use glam::{Mat4, Vec3, Vec4};

/// Point light the shadow is cast from.
pub const LIGHT_POS: Vec3 = Vec3::new(2.0, 4.0, -2.0);

/// Height of the ground plane the shadow lands on.
pub const PLANE_HEIGHT: f32 = -5.0;

/// The cube floats this far above the origin.
pub const CUBE_HEIGHT: f32 = 2.0;

pub const PLANE_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const SHADOW_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.5);

/// Fixed look-at camera: eye (0,3,-6) toward (0,1,0).
pub fn view_matrix() -> Mat4 {
    Mat4::look_at_lh(
        Vec3::new(0.0, 3.0, -6.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::Y,
    )
}

/// Perspective projection for the current aspect ratio (fovy π/4, 0.01..100).
pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_lh(FRAC_PI_4, aspect, 0.01, 100.0)
}

/// Cube world transform at scene time `t`: scale, then spin about Y, then
/// lift to `CUBE_HEIGHT`.
pub fn cube_world(t: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, CUBE_HEIGHT, 0.0))
        * Mat4::from_rotation_y(t)
        * Mat4::from_scale(Vec3::ONE)
}

/// Ground plane world transform: constant drop to `PLANE_HEIGHT`.
pub fn plane_world() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, PLANE_HEIGHT, 0.0))
}

/// Cube tint cycling through three phase-shifted sinusoids; each component
/// stays in [0, 1].
pub fn animated_color(t: f32) -> Vec4 {
    Vec4::new(
        (t.sin() + 1.0) * 0.5,
        ((3.0 * t).cos() + 1.0) * 0.5,
        ((5.0 * t).sin() + 1.0) * 0.5,
        1.0,
    )
}

/// Projection onto the horizontal plane `y = plane_y` along rays from the
/// point light at `light`.
///
/// This is the classic planar-shadow construction `d·I − L⊗(n,d)` for the
/// plane with normal +Y: points already on the plane are fixed points, and
/// any point between light and plane lands where the light ray through it
/// pierces the plane. Combine with a mesh world matrix (shadow = projection ·
/// world) to flatten that mesh into its shadow.
pub fn shadow_matrix(light: Vec3, plane_y: f32) -> Mat4 {
    // Plane as (n, d): n·p + d = 0 for points p on the plane.
    let n = Vec4::new(0.0, 1.0, 0.0, -plane_y);
    let l = Vec4::new(light.x, light.y, light.z, 1.0);
    let dot = n.dot(l);

    // Column j of (dot·I − L⊗n) is dot·e_j − n_j·L.
    Mat4::from_cols(
        Vec4::X * dot - l * n.x,
        Vec4::Y * dot - l * n.y,
        Vec4::Z * dot - l * n.z,
        Vec4::W * dot - l * n.w,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < 1e-4,
            "expected {b:?}, got {a:?}"
        );
    }

    fn project(m: Mat4, p: Vec3) -> Vec3 {
        let q = m * Vec4::new(p.x, p.y, p.z, 1.0);
        Vec3::new(q.x / q.w, q.y / q.w, q.z / q.w)
    }

    // ── cube world ────────────────────────────────────────────────────────

    #[test]
    fn cube_world_is_translate_rotate_scale() {
        let t = 1.3;
        let expected = Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0))
            * Mat4::from_rotation_y(t)
            * Mat4::from_scale(Vec3::ONE);
        assert!(cube_world(t).abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn cube_world_applies_scale_before_rotation_before_translation() {
        // A quarter turn about +Y sends +X to -Z, then the cube height lifts
        // the point by 2.
        let m = cube_world(std::f32::consts::FRAC_PI_2);
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert_vec3_eq(p, Vec3::new(0.0, 2.0, -1.0));
    }

    #[test]
    fn cube_world_at_time_zero_is_pure_translation() {
        let m = cube_world(0.0);
        assert!(m.abs_diff_eq(Mat4::from_translation(Vec3::new(0.0, 2.0, 0.0)), 1e-6));
    }

    // ── plane world ───────────────────────────────────────────────────────

    #[test]
    fn plane_world_is_constant_translation() {
        let expected = Mat4::from_translation(Vec3::new(0.0, -5.0, 0.0));
        assert!(plane_world().abs_diff_eq(expected, 1e-6));
    }

    // ── animated color ────────────────────────────────────────────────────

    #[test]
    fn animated_color_components_stay_normalized() {
        let mut t = 0.0f32;
        while t < 20.0 {
            let c = animated_color(t);
            for component in [c.x, c.y, c.z, c.w] {
                assert!((0.0..=1.0).contains(&component), "t={t}: {c:?}");
            }
            t += 0.037;
        }
    }

    #[test]
    fn animated_color_follows_the_phase_shifted_sinusoids() {
        let t = 2.1f32;
        let c = animated_color(t);
        assert!((c.x - (t.sin() + 1.0) * 0.5).abs() < 1e-6);
        assert!((c.y - ((3.0 * t).cos() + 1.0) * 0.5).abs() < 1e-6);
        assert!((c.z - ((5.0 * t).sin() + 1.0) * 0.5).abs() < 1e-6);
    }

    #[test]
    fn animated_color_at_time_zero() {
        let c = animated_color(0.0);
        assert!((c.x - 0.5).abs() < 1e-6);
        assert!((c.y - 1.0).abs() < 1e-6);
        assert!((c.z - 0.5).abs() < 1e-6);
        assert_eq!(c.w, 1.0);
    }

    // ── shadow projection ─────────────────────────────────────────────────

    #[test]
    fn shadow_fixes_points_on_the_plane() {
        let m = shadow_matrix(LIGHT_POS, PLANE_HEIGHT);
        for p in [
            Vec3::new(0.0, PLANE_HEIGHT, 0.0),
            Vec3::new(3.0, PLANE_HEIGHT, -7.5),
            Vec3::new(-12.0, PLANE_HEIGHT, 4.25),
        ] {
            assert_vec3_eq(project(m, p), p);
        }
    }

    #[test]
    fn shadow_lands_projected_points_on_the_plane() {
        let m = shadow_matrix(LIGHT_POS, PLANE_HEIGHT);
        for p in [
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 3.0, -1.0),
        ] {
            let q = project(m, p);
            assert!((q.y - PLANE_HEIGHT).abs() < 1e-4, "{p:?} -> {q:?}");
        }
    }

    #[test]
    fn shadow_projects_along_the_light_ray() {
        // L + s·(P − L) with s chosen so the y component hits the plane.
        let m = shadow_matrix(LIGHT_POS, PLANE_HEIGHT);
        let p = Vec3::new(0.0, 2.0, 0.0);
        let s = (PLANE_HEIGHT - LIGHT_POS.y) / (p.y - LIGHT_POS.y);
        let expected = LIGHT_POS + (p - LIGHT_POS) * s;
        assert_vec3_eq(project(m, p), expected);
        assert_vec3_eq(project(m, p), Vec3::new(-7.0, -5.0, 7.0));
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn view_matrix_maps_the_look_target_onto_the_view_axis() {
        let target = view_matrix().transform_point3(Vec3::new(0.0, 1.0, 0.0));
        assert!(target.x.abs() < 1e-5);
        assert!(target.y.abs() < 1e-5);
        assert!(target.z > 0.0);
    }
}
