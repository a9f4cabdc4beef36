//! Dense N-dimensional lattice of cell states.
//!
//! Every position of a `side`^n hyper-cube is stored in one flat vector,
//! indexed by the linearized coordinate. Boundaries are hard edges:
//! neighbors outside the lattice simply do not contribute.

use rand::Rng;
use rand::seq::SliceRandom;
use rayon::prelude::*;

use super::{CellState, Rule};

/// Integer lattice position. 2D lattices keep `z` at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn planar(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    pub const fn offset(self, by: Coord) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.z + by.z)
    }
}

/// Number of spatial axes of a lattice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    pub const fn rank(self) -> u32 {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    /// Moore neighborhood offsets: 8 in 2D, 26 in 3D
    pub fn neighbor_offsets(self) -> Vec<Coord> {
        let depth = match self {
            Dimension::Two => 0..=0,
            Dimension::Three => -1..=1,
        };

        depth
            .flat_map(|dz| (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| Coord::new(dx, dy, dz))))
            .filter(|&c| c != Coord::default())
            .collect()
    }
}

impl Default for Coord {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Fixed-shape lattice of `side`^rank cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    dimension: Dimension,
    side: usize,
    cells: Vec<CellState>,
    offsets: Vec<Coord>,
}

impl Lattice {
    /// Create a lattice with every cell dead
    pub fn new(dimension: Dimension, side: usize) -> Self {
        let len = side.pow(dimension.rank());
        Self {
            dimension,
            side,
            cells: vec![CellState::Dead; len],
            offsets: dimension.neighbor_offsets(),
        }
    }

    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Side length along every axis
    pub const fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear index of `coord`, or `None` outside the lattice
    pub fn index(&self, coord: Coord) -> Option<usize> {
        let side = self.side as i64;
        let in_range = |v: i32| (0..side).contains(&(v as i64));

        let z_ok = match self.dimension {
            Dimension::Two => coord.z == 0,
            Dimension::Three => in_range(coord.z),
        };
        if !(in_range(coord.x) && in_range(coord.y) && z_ok) {
            return None;
        }

        let (x, y, z) = (coord.x as usize, coord.y as usize, coord.z as usize);
        Some((z * self.side + y) * self.side + x)
    }

    /// Coordinate stored at linear `index`
    pub fn coord(&self, index: usize) -> Coord {
        debug_assert!(index < self.cells.len());
        let x = index % self.side;
        let y = (index / self.side) % self.side;
        let z = index / (self.side * self.side);
        Coord::new(x as i32, y as i32, z as i32)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Set cell at position; positions outside the lattice are ignored
    pub fn set(&mut self, coord: Coord, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
    }

    /// Count alive neighbors that exist inside the lattice
    pub fn count_live_neighbors(&self, coord: Coord) -> u8 {
        self.offsets
            .iter()
            .filter_map(|&offset| self.get(coord.offset(offset)))
            .filter(|state| state.is_alive())
            .count() as u8
    }

    /// Count neighbors that exist inside the lattice, alive or not
    pub fn count_neighbors_in_bounds(&self, coord: Coord) -> usize {
        self.offsets
            .iter()
            .filter(|&&offset| self.index(coord.offset(offset)).is_some())
            .count()
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// All alive coordinates in index order
    pub fn alive_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(|(i, _)| self.coord(i))
            .collect()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = CellState::Dead);
    }

    /// Seed exactly `floor(len * percent / 100)` alive cells at random.
    ///
    /// The alive count is fixed first and then shuffled into position, so the
    /// density does not depend on the generator. Returns the alive count.
    pub fn populate<R: Rng + ?Sized>(&mut self, percent: u8, rng: &mut R) -> usize {
        let percent = usize::from(percent.min(100));
        let alive = self.cells.len() * percent / 100;

        let mut decisions: Vec<CellState> = (0..self.cells.len())
            .map(|i| CellState::from(i < alive))
            .collect();
        decisions.shuffle(rng);

        self.cells = decisions;
        alive
    }

    fn next_state(&self, index: usize, rule: &dyn Rule) -> CellState {
        let neighbors = self.count_live_neighbors(self.coord(index));
        rule.evolve(self.cells[index], neighbors)
    }

    /// Pure evolution - returns the next generation (serial)
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.cells.len()).map(|i| self.next_state(i, rule)).collect();
        self.with_cells(cells)
    }

    /// Parallel evolution using rayon; identical output to [`Lattice::evolve`]
    pub fn evolve_parallel(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|i| self.next_state(i, rule))
            .collect();
        self.with_cells(cells)
    }

    fn with_cells(&self, cells: Vec<CellState>) -> Self {
        Self {
            dimension: self.dimension,
            side: self.side,
            cells,
            offsets: self.offsets.clone(),
        }
    }
}
