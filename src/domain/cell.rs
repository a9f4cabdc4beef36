use glam::{Vec2, Vec3};

use super::geometry::{self, Axis, Viewport, FIELD_OF_VIEW, VIEWER_DISTANCE};

/// Corner indices of the six cube faces, in drawing winding order
pub const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [1, 5, 6, 2],
    [5, 4, 7, 6],
    [4, 0, 3, 7],
    [0, 4, 5, 1],
    [3, 2, 6, 7],
];

/// Fixed per-axis camera rotation in degrees, applied once per cell.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CameraAngle {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl CameraAngle {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate about x, then y, then z
    pub fn apply(&self, vector: Vec3) -> Vec3 {
        [(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)]
            .into_iter()
            .filter(|&(_, degrees)| degrees != 0.0)
            .fold(vector, |v, (axis, degrees)| geometry::rotate(v, axis, degrees))
    }
}

/// One projected cube face: a closed outline plus its average depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    /// Four corners followed by the first corner again
    pub points: [Vec2; 5],
    pub depth: f32,
}

/// A live lattice position rendered as a cube.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    corners: [Vec3; 8],
}

impl Cell {
    /// Build a cell from its world-space corners, oriented by `camera`
    pub fn new(corners: [Vec3; 8], camera: CameraAngle) -> Self {
        Self {
            corners: corners.map(|corner| camera.apply(corner)),
        }
    }

    /// Corners after the initial camera rotation
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Spin every corner about y by `angle` degrees and project it.
    ///
    /// Returns `None` if any corner lands on the viewer plane.
    pub fn transform(&self, angle: f32, viewport: Viewport) -> Option<Transformed> {
        let mut vectors = [Vec3::ZERO; 8];
        for (slot, corner) in vectors.iter_mut().zip(self.corners) {
            let rotated = geometry::rotate(corner, Axis::Y, angle);
            *slot = geometry::project(rotated, FIELD_OF_VIEW, VIEWER_DISTANCE, viewport)?;
        }
        Some(Transformed { vectors })
    }

    /// Full per-frame pipeline: transform, average face depth, polygons
    pub fn render(&self, angle: f32, viewport: Viewport) -> Option<[Polygon; 6]> {
        self.transform(angle, viewport).map(|t| t.polygons())
    }
}

/// Projected corners of a cell for one frame.
///
/// Only obtainable through [`Cell::transform`], so depths and polygons are
/// always computed from the current frame's projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformed {
    vectors: [Vec3; 8],
}

impl Transformed {
    pub fn vectors(&self) -> &[Vec3; 8] {
        &self.vectors
    }

    /// Mean z of the four corners of each face
    pub fn average_face_depths(&self) -> [f32; 6] {
        FACES.map(|face| face.iter().map(|&i| self.vectors[i].z).sum::<f32>() / 4.0)
    }

    pub fn polygons(&self) -> [Polygon; 6] {
        let depths = self.average_face_depths();
        let mut polygons = [Polygon {
            points: [Vec2::ZERO; 5],
            depth: 0.0,
        }; 6];

        for ((polygon, face), depth) in polygons.iter_mut().zip(FACES).zip(depths) {
            let corner = |i: usize| self.vectors[face[i]].truncate();
            polygon.points = [corner(0), corner(1), corner(2), corner(3), corner(0)];
            polygon.depth = depth;
        }
        polygons
    }
}
