use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::CellState;

/// Trait for cellular automaton rules
/// Lets the lattice evolve under any birth/survival scheme
pub trait Rule: Send + Sync {
    /// Short name of the rule
    fn name(&self) -> String;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: CellState, neighbors: u8) -> CellState;
}

/// Errors produced while parsing a rule string such as `2333`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("ruleset must have exactly 4 digits (e.g. 2333, 5766), got {0} characters")]
    Length(usize),
    #[error("ruleset can only contain digits, found {0:?}")]
    NonDigit(char),
}

/// Four-digit survival/birth thresholds.
///
/// The digits `abcd` read as: a live cell survives with `a..=b` live
/// neighbors, a dead cell is born with `c..=d` live neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    pub survive_min: u8,
    pub survive_max: u8,
    pub birth_min: u8,
    pub birth_max: u8,
}

impl RuleSet {
    /// Conway's Life (B3/S23)
    pub const CONWAY: RuleSet = RuleSet::new(2, 3, 3, 3);

    /// 3D Life 5766, the default for three dimensions
    pub const LIFE_5766: RuleSet = RuleSet::new(5, 7, 6, 6);

    /// 3D Life 3444: born with exactly 4, survives with 3 or 4
    pub const LIFE_3444: RuleSet = RuleSet::new(3, 4, 4, 4);

    pub const fn new(survive_min: u8, survive_max: u8, birth_min: u8, birth_max: u8) -> Self {
        Self {
            survive_min,
            survive_max,
            birth_min,
            birth_max,
        }
    }

    /// Digits in the order they are written on the command line
    pub const fn digits(&self) -> [u8; 4] {
        [self.survive_min, self.survive_max, self.birth_min, self.birth_max]
    }

    pub const fn survives(&self, neighbors: u8) -> bool {
        neighbors >= self.survive_min && neighbors <= self.survive_max
    }

    pub const fn is_born(&self, neighbors: u8) -> bool {
        neighbors >= self.birth_min && neighbors <= self.birth_max
    }
}

impl Rule for RuleSet {
    fn name(&self) -> String {
        self.to_string()
    }

    fn evolve(&self, current: CellState, neighbors: u8) -> CellState {
        match current {
            CellState::Alive if self.survives(neighbors) => CellState::Alive,
            CellState::Dead if self.is_born(neighbors) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(RuleError::Length(chars.len()));
        }

        let mut digits = [0u8; 4];
        for (slot, ch) in digits.iter_mut().zip(chars) {
            *slot = ch.to_digit(10).ok_or(RuleError::NonDigit(ch))? as u8;
        }

        let [a, b, c, d] = digits;
        Ok(RuleSet::new(a, b, c, d))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.digits();
        write!(f, "{a}{b}{c}{d}")
    }
}
