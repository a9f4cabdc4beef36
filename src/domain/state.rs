/// Status of a single lattice position.
/// Each position can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Check if the position is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(CellState::default(), CellState::Dead);
        assert!(!CellState::default().is_alive());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(CellState::from(true), CellState::Alive);
        assert_eq!(CellState::from(false), CellState::Dead);
    }
}
