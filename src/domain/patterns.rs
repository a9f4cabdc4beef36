use super::{CellState, Coord, Lattice};

/// Represents a planar pattern that can be placed on a lattice
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }

    /// Alive coordinates of the pattern shifted to `origin`
    pub fn coords_at(&self, origin: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| origin.offset(Coord::planar(dx as i32, dy as i32)))
    }

    /// Place pattern on the lattice at `origin`; cells falling outside are dropped
    pub fn place_on(&self, lattice: &mut Lattice, origin: Coord) {
        for coord in self.coords_at(origin) {
            lattice.set(coord, CellState::Alive);
        }
    }

    /// Place pattern in the middle of the lattice's z = 0 plane
    pub fn place_centered(&self, lattice: &mut Lattice) {
        let side = lattice.side() as i32;
        let x = (side - self.width as i32) / 2;
        let y = (side - self.height as i32) / 2;
        self.place_on(lattice, Coord::planar(x.max(0), y.max(0)));
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(0, 1), (1, 1), (2, 1)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "lwss",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), toad(), beacon(), block(), lwss(), r_pentomino()]
    }

    /// One "name - description" line per preset
    pub fn catalog() -> String {
        all_patterns()
            .iter()
            .map(|p| format!("{} - {}", p.name, p.description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Look up a preset by name
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
