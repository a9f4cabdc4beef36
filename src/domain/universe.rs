//! Universe variants: the lattice, its rules and the cells it renders.

use glam::Vec3;
use rand::Rng;

use super::cell::{CameraAngle, Cell, Polygon};
use super::geometry::Viewport;
use super::{Coord, Dimension, Lattice, Pattern, RuleSet};

/// Lattices at least this large are stepped with rayon
const PARALLEL_THRESHOLD: usize = 4096;

/// The two supported simulations. Everything that differs between them is
/// data: dimension, cell size, camera tilt and default rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    TwoD,
    ThreeD,
}

impl Variant {
    pub const fn dimension(self) -> Dimension {
        match self {
            Variant::TwoD => Dimension::Two,
            Variant::ThreeD => Dimension::Three,
        }
    }

    /// Edge length of one rendered cube in world units
    pub const fn cell_size(self) -> f32 {
        match self {
            Variant::TwoD => 0.5,
            Variant::ThreeD => 0.3,
        }
    }

    /// 2D tilts the board by -90 degrees about x so it reads as a floor
    pub const fn camera_angle(self) -> CameraAngle {
        match self {
            Variant::TwoD => CameraAngle::new(-90.0, 0.0, 0.0),
            Variant::ThreeD => CameraAngle::new(0.0, 0.0, 0.0),
        }
    }

    pub const fn default_rules(self) -> RuleSet {
        match self {
            Variant::TwoD => RuleSet::CONWAY,
            Variant::ThreeD => RuleSet::LIFE_5766,
        }
    }

    /// Only the 3D board spins between generations
    pub const fn rotates(self) -> bool {
        matches!(self, Variant::ThreeD)
    }

    /// Generations per second; 3D populations die off fast so they run quicker
    pub const fn default_tick_rate(self) -> f32 {
        match self {
            Variant::TwoD => 10.0,
            Variant::ThreeD => 100.0,
        }
    }

    /// World-space corners of the cube for `coord`, with the whole lattice
    /// centered on the origin.
    pub fn corners(self, coord: Coord, field_dim: usize) -> [Vec3; 8] {
        let size = self.cell_size();
        let origin = -(field_dim as f32 / 2.0) * size;

        let row = match self {
            Variant::TwoD => coord.y + 1,
            Variant::ThreeD => coord.y,
        };

        let x_left = origin + coord.x as f32 * size;
        let x_right = x_left + size;
        let y_down = origin + coord.z as f32 * size;
        let y_up = y_down + size;
        let z_back = origin + row as f32 * size;
        let z_front = z_back + size;

        [
            Vec3::new(x_left, y_up, z_back),
            Vec3::new(x_right, y_up, z_back),
            Vec3::new(x_right, y_down, z_back),
            Vec3::new(x_left, y_down, z_back),
            Vec3::new(x_left, y_up, z_front),
            Vec3::new(x_right, y_up, z_front),
            Vec3::new(x_right, y_down, z_front),
            Vec3::new(x_left, y_down, z_front),
        ]
    }

    pub fn cell_for(self, coord: Coord, field_dim: usize) -> Cell {
        Cell::new(self.corners(coord, field_dim), self.camera_angle())
    }
}

/// A running universe: the current generation plus the cubes built from it.
pub struct Universe {
    variant: Variant,
    lattice: Lattice,
    rules: RuleSet,
    viewport: Viewport,
    generation: u64,
    cells: Vec<Cell>,
}

impl Universe {
    /// Create a universe with every cell dead
    pub fn new(variant: Variant, field_dim: usize, rules: RuleSet, viewport: Viewport) -> Self {
        Self {
            variant,
            lattice: Lattice::new(variant.dimension(), field_dim),
            rules,
            viewport,
            generation: 0,
            cells: Vec::new(),
        }
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    pub const fn rules(&self) -> RuleSet {
        self.rules
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Number of alive cells in the current generation
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Randomly seed `population` percent of the lattice.
    /// Returns the number of alive cells.
    pub fn initialize<R: Rng + ?Sized>(&mut self, population: u8, rng: &mut R) -> usize {
        let alive = self.lattice.populate(population, rng);
        self.generation = 0;
        self.rebuild_cells();
        tracing::debug!(alive, total = self.lattice.len(), "universe initialized");
        alive
    }

    /// Replace the lattice contents with a single centered pattern
    pub fn seed_pattern(&mut self, pattern: &Pattern) {
        self.lattice.clear();
        pattern.place_centered(&mut self.lattice);
        self.generation = 0;
        self.rebuild_cells();
        tracing::debug!(
            pattern = pattern.name,
            description = pattern.description,
            "universe seeded from pattern"
        );
    }

    /// Advance one generation
    pub fn step(&mut self) {
        self.lattice = if self.lattice.len() >= PARALLEL_THRESHOLD {
            self.lattice.evolve_parallel(&self.rules)
        } else {
            self.lattice.evolve(&self.rules)
        };
        self.generation += 1;
        self.rebuild_cells();

        tracing::debug!(
            generation = self.generation,
            alive = self.cells.len(),
            "generation advanced"
        );
    }

    pub fn alive_coordinates(&self) -> Vec<Coord> {
        self.lattice.alive_coords()
    }

    /// Cubes for the current generation
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every face of every cell at `angle`, farthest first.
    ///
    /// Cells with a corner on or behind the viewer plane are skipped for this frame.
    pub fn polygons(&self, angle: f32) -> Vec<Polygon> {
        let mut polygons: Vec<Polygon> = Vec::with_capacity(self.cells.len() * 6);
        for cell in &self.cells {
            match cell.render(angle, self.viewport) {
                Some(faces) => polygons.extend(faces),
                None => tracing::debug!(corners = ?cell.corners(), "skipping cell at or behind viewer plane"),
            }
        }
        sort_back_to_front(&mut polygons);
        polygons
    }

    fn rebuild_cells(&mut self) {
        let field_dim = self.lattice.side();
        self.cells = self
            .lattice
            .alive_coords()
            .into_iter()
            .map(|coord| self.variant.cell_for(coord, field_dim))
            .collect();
    }
}

/// Stable sort by decreasing depth
pub fn sort_back_to_front(polygons: &mut [Polygon]) {
    polygons.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
