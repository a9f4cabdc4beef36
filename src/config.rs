//! Command line options and the validated settings built from them.

use std::fmt;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::domain::{Pattern, RuleError, RuleSet, Variant, Viewport, presets};

/// Upper bound on lattice cells accepted from the command line
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("window size must look like WIDTHxHEIGHT (e.g. 1280x800), got {0:?}")]
    WindowSize(String),
    #[error("invalid ruleset: {0}")]
    Rules(#[from] RuleError),
    #[error("population must be between 0 and 100 percent, got {0}")]
    Population(u8),
    #[error("field dimension must be at least 1")]
    FieldDimension,
    #[error("field dimension {0} is too large (at most {max} cells per lattice)", max = MAX_CELLS)]
    FieldTooLarge(usize),
    #[error("tick rate must be a positive number of generations per second, got {0}")]
    TickRate(f32),
    #[error("unknown pattern {0:?}, available patterns:\n{patterns}", patterns = presets::catalog())]
    UnknownPattern(String),
    #[error("patterns can only seed the 2D simulation")]
    PatternNeeds2d,
}

/// Render target size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for WindowSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::WindowSize(s.to_string());

        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SimulationKind {
    #[value(name = "2D", alias = "2d")]
    TwoD,
    #[value(name = "3D", alias = "3d")]
    ThreeD,
}

impl From<SimulationKind> for Variant {
    fn from(kind: SimulationKind) -> Self {
        match kind {
            SimulationKind::TwoD => Variant::TwoD,
            SimulationKind::ThreeD => Variant::ThreeD,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "game_of_life_3d")]
#[command(about = "Conway's Game of Life in 2D and 3D")]
#[command(version)]
pub struct Cli {
    /// Window size
    #[arg(short = 'w', long, default_value = "1280x800")]
    pub win_size: String,

    /// Simulation type
    #[arg(short, long, value_enum, default_value = "2D")]
    pub simulation: SimulationKind,

    /// Field dimensions
    #[arg(short, long, default_value_t = 10)]
    pub dim: usize,

    /// Initial population in percent
    #[arg(short, long, default_value_t = 50)]
    pub population: u8,

    /// Ruleset deciding a cell's fate; defaults to 2333 for 2D and 5766 for 3D
    #[arg(short, long)]
    pub rules: Option<String>,

    /// Seed for the initial population
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generations per second (defaults to 10 for 2D, 100 for 3D)
    #[arg(long)]
    pub tick_rate: Option<f32>,

    /// Seed the 2D board with a named pattern instead of random cells
    #[arg(long)]
    pub pattern: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve defaults and validate everything before any window exists
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let variant = Variant::from(self.simulation);
        let window = self.win_size.parse()?;
        let rules = match self.rules.as_deref() {
            Some(digits) => digits.parse()?,
            None => variant.default_rules(),
        };
        let pattern = self
            .pattern
            .map(|name| presets::by_name(&name).ok_or(ConfigError::UnknownPattern(name)))
            .transpose()?;

        let settings = Settings {
            window,
            variant,
            field_dim: self.dim,
            population: self.population,
            rules,
            seed: self.seed,
            tick_rate: self.tick_rate.unwrap_or(variant.default_tick_rate()),
            pattern,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Fully resolved simulation settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub window: WindowSize,
    pub variant: Variant,
    pub field_dim: usize,
    pub population: u8,
    pub rules: RuleSet,
    pub seed: Option<u64>,
    pub tick_rate: f32,
    pub pattern: Option<Pattern>,
}

impl Default for Settings {
    fn default() -> Self {
        let variant = Variant::TwoD;
        Self {
            window: WindowSize {
                width: 1280,
                height: 800,
            },
            variant,
            field_dim: 10,
            population: 50,
            rules: variant.default_rules(),
            seed: None,
            tick_rate: variant.default_tick_rate(),
            pattern: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population > 100 {
            return Err(ConfigError::Population(self.population));
        }
        if self.field_dim == 0 {
            return Err(ConfigError::FieldDimension);
        }
        let cells = self.field_dim.checked_pow(self.variant.dimension().rank());
        if self.field_dim > i32::MAX as usize || cells.is_none_or(|n| n > MAX_CELLS) {
            return Err(ConfigError::FieldTooLarge(self.field_dim));
        }
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::TickRate(self.tick_rate));
        }
        if self.pattern.is_some() && self.variant != Variant::TwoD {
            return Err(ConfigError::PatternNeeds2d);
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.width as f32, self.window.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Settings, ConfigError> {
        let argv = std::iter::once("game_of_life_3d").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("clap accepts arguments").into_settings()
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&[]).unwrap();

        assert_eq!(settings.window, WindowSize { width: 1280, height: 800 });
        assert_eq!(settings.variant, Variant::TwoD);
        assert_eq!(settings.field_dim, 10);
        assert_eq!(settings.population, 50);
        assert_eq!(settings.rules, RuleSet::CONWAY);
        assert_eq!(settings.tick_rate, 10.0);
        assert!(settings.pattern.is_none());
    }

    #[test]
    fn test_3d_defaults() {
        let settings = parse(&["-s", "3D"]).unwrap();

        assert_eq!(settings.variant, Variant::ThreeD);
        assert_eq!(settings.rules, RuleSet::LIFE_5766);
        assert_eq!(settings.tick_rate, 100.0);
    }

    #[test]
    fn test_explicit_options() {
        let settings = parse(&[
            "--win-size", "640x480", "-s", "3d", "-d", "20", "-p", "15", "-r", "3444", "--seed", "42",
        ])
        .unwrap();

        assert_eq!(settings.window, WindowSize { width: 640, height: 480 });
        assert_eq!(settings.field_dim, 20);
        assert_eq!(settings.population, 15);
        assert_eq!(settings.rules, RuleSet::LIFE_3444);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.viewport(), Viewport::new(640.0, 480.0));
    }

    #[test]
    fn test_window_size_parsing() {
        assert_eq!("800x600".parse(), Ok(WindowSize { width: 800, height: 600 }));
        assert_eq!(WindowSize { width: 3, height: 4 }.to_string(), "3x4");

        for bad in ["800", "800x", "x600", "axb", "0x600", "800x600x2", "-1x5"] {
            assert_eq!(
                bad.parse::<WindowSize>(),
                Err(ConfigError::WindowSize(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_bad_rules() {
        assert_eq!(parse(&["-r", "233"]).unwrap_err(), ConfigError::Rules(RuleError::Length(3)));
        assert_eq!(
            parse(&["-r", "23x3"]).unwrap_err(),
            ConfigError::Rules(RuleError::NonDigit('x'))
        );
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert_eq!(parse(&["-p", "101"]).unwrap_err(), ConfigError::Population(101));
        assert_eq!(parse(&["-d", "0"]).unwrap_err(), ConfigError::FieldDimension);
        assert_eq!(
            parse(&["-s", "3D", "-d", "3000000"]).unwrap_err(),
            ConfigError::FieldTooLarge(3_000_000)
        );
        assert_eq!(parse(&["-d", "5000"]).unwrap_err(), ConfigError::FieldTooLarge(5000));
        assert!(parse(&["-d", "4096"]).is_ok());
        assert!(parse(&["-s", "3D", "-d", "256"]).is_ok());
        assert_eq!(
            parse(&["-s", "3D", "-d", "257"]).unwrap_err(),
            ConfigError::FieldTooLarge(257)
        );
        assert_eq!(parse(&["--tick-rate", "0"]).unwrap_err(), ConfigError::TickRate(0.0));
        assert_eq!(
            parse(&["-w", "big"]).unwrap_err(),
            ConfigError::WindowSize("big".to_string())
        );
    }

    #[test]
    fn test_pattern_option() {
        let settings = parse(&["--pattern", "glider"]).unwrap();
        assert_eq!(settings.pattern.map(|p| p.name), Some("glider"));

        assert_eq!(
            parse(&["--pattern", "spaceship"]).unwrap_err(),
            ConfigError::UnknownPattern("spaceship".to_string())
        );
        let message = ConfigError::UnknownPattern("spaceship".to_string()).to_string();
        assert!(message.contains("lwss - Lightweight Spaceship (period 4)"), "{message}");
        assert_eq!(
            parse(&["-s", "3D", "--pattern", "glider"]).unwrap_err(),
            ConfigError::PatternNeeds2d
        );
    }
}
