//! Rotation and perspective projection of world-space vectors.

use glam::{Mat3, Vec3};

/// Field of view used by every cell projection
pub const FIELD_OF_VIEW: f32 = 256.0;

/// Distance between the viewer and the world origin
pub const VIEWER_DISTANCE: f32 = 4.0;

/// Points closer to the viewer plane than this, or behind it, are not projected
const MIN_DEPTH: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Size of the render target in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Rotate `vector` about `axis` by `degrees` (right-handed).
pub fn rotate(vector: Vec3, axis: Axis, degrees: f32) -> Vec3 {
    let radians = degrees.to_radians();
    let matrix = match axis {
        Axis::X => Mat3::from_rotation_x(radians),
        Axis::Y => Mat3::from_rotation_y(radians),
        Axis::Z => Mat3::from_rotation_z(radians),
    };
    matrix * vector
}

/// Project a 3D point onto the screen.
///
/// The returned vector carries the screen position in `x`/`y` and the
/// untouched world `z` for depth sorting. Returns `None` when the point sits
/// on or behind the viewer plane (`viewer_distance + z <= 0`).
pub fn project(vector: Vec3, fov: f32, viewer_distance: f32, viewport: Viewport) -> Option<Vec3> {
    let depth = viewer_distance + vector.z;
    if depth < MIN_DEPTH {
        return None;
    }

    let factor = fov / depth;
    let x = vector.x * factor + viewport.width / 2.0;
    let y = -vector.y * factor + viewport.height / 2.0;
    Some(Vec3::new(x, y, vector.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;
    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, EPS), "expected {b:?}, got {a:?}");
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        assert_close(rotate(Vec3::Y, Axis::X, 90.0), Vec3::Z);
        assert_close(rotate(Vec3::Z, Axis::X, 90.0), -Vec3::Y);
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        assert_close(rotate(Vec3::X, Axis::Y, 90.0), -Vec3::Z);
        assert_close(rotate(Vec3::Z, Axis::Y, 90.0), Vec3::X);
    }

    #[test]
    fn test_rotate_z_quarter_turn() {
        assert_close(rotate(Vec3::X, Axis::Z, 90.0), Vec3::Y);
        assert_close(rotate(Vec3::Y, Axis::Z, 90.0), -Vec3::X);
    }

    #[test]
    fn test_negative_x_tilt_lays_plane_flat() {
        // -90 degrees about x maps y onto z and z onto -y
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_close(rotate(v, Axis::X, -90.0), Vec3::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(0.3, -1.2, 2.5);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let r = rotate(v, axis, 37.0);
            assert!((r.length() - v.length()).abs() < EPS);
        }
    }

    #[test]
    fn test_project_origin_hits_screen_center() {
        let p = project(Vec3::ZERO, FIELD_OF_VIEW, VIEWER_DISTANCE, VIEWPORT).unwrap();
        assert_close(p, Vec3::new(640.0, 400.0, 0.0));
    }

    #[test]
    fn test_project_scales_and_flips_y() {
        let v = Vec3::new(1.0, 1.0, 4.0);
        let p = project(v, FIELD_OF_VIEW, VIEWER_DISTANCE, VIEWPORT).unwrap();

        // factor = 256 / 8 = 32
        assert_close(p, Vec3::new(640.0 + 32.0, 400.0 - 32.0, 4.0));
    }

    #[test]
    fn test_zero_rotation_then_project_is_plain_projection() {
        let samples = [
            Vec3::new(0.5, -0.25, 1.0),
            Vec3::new(-2.0, 3.0, -1.5),
            Vec3::new(10.0, 0.0, 0.0),
        ];
        for v in samples {
            let direct = project(v, FIELD_OF_VIEW, VIEWER_DISTANCE, VIEWPORT).unwrap();
            let rotated = project(rotate(v, Axis::Y, 0.0), FIELD_OF_VIEW, VIEWER_DISTANCE, VIEWPORT).unwrap();
            assert!((direct.x - rotated.x).abs() < EPS);
            assert!((direct.y - rotated.y).abs() < EPS);
        }
    }

    #[test]
    fn test_degenerate_projection_is_reported() {
        let v = Vec3::new(1.0, 1.0, -VIEWER_DISTANCE);
        assert_eq!(project(v, FIELD_OF_VIEW, VIEWER_DISTANCE, VIEWPORT), None);
    }

    #[test]
    fn test_point_behind_viewer_is_not_projected() {
        let behind = Vec3::new(1.0, 1.0, -VIEWER_DISTANCE - 2.0);
        assert_eq!(project(behind, FIELD_OF_VIEW, VIEWER_DISTANCE, VIEWPORT), None);

        let just_in_front = Vec3::new(1.0, 1.0, -VIEWER_DISTANCE + 0.5);
        assert!(project(just_in_front, FIELD_OF_VIEW, VIEWER_DISTANCE, VIEWPORT).is_some());
    }
}
