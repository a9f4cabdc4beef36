mod state;
mod rules;
mod lattice;
mod patterns;
pub mod geometry;
pub mod cell;
pub mod universe;

pub use state::CellState;
pub use rules::{Rule, RuleError, RuleSet};
pub use lattice::{Coord, Dimension, Lattice};
pub use patterns::{Pattern, presets};
pub use geometry::{Axis, Viewport};
pub use cell::{CameraAngle, Cell, Polygon};
pub use universe::{Universe, Variant};
