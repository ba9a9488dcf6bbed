use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// Unrevealed cells stay `Hidden` even after the round ends; the board never
/// uncovers the remaining bombs on a loss.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Safe,
    Bomb,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Safe | Self::Bomb)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}
