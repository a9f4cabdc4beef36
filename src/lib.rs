// Domain layer - automaton engine, geometry and cells
pub mod domain;

// Application layer - frame orchestration
pub mod application;

// Infrastructure layer - configuration, rendering, input
pub mod config;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coord, Lattice, Polygon, RuleSet, Universe, Variant, presets};
pub use application::Simulation;
pub use config::{Cli, ConfigError, Settings};
