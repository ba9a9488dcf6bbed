use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Reveal-state tracking on top of a fixed [`BombLayout`].
///
/// Reveals are monotonic: a cell transitions hidden to revealed exactly once
/// and is never un-revealed. Each reveal affects exactly one cell; there is no
/// flood fill and no adjacency counting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: BombLayout,
    revealed: Array2<bool>,
    revealed_count: Saturating<CellCount>,
}

impl Board {
    pub fn new(layout: BombLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            revealed: Array2::default(size.to_nd_index()),
            revealed_count: Saturating(0),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.layout.bomb_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn has_bomb_at(&self, coords: Coord2) -> bool {
        self.layout.contains_bomb(coords)
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        if !self.is_revealed(coords) {
            CellState::Hidden
        } else if self.has_bomb_at(coords) {
            CellState::Bomb
        } else {
            CellState::Safe
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.layout.validate_coords(coords)?;

        if self.revealed[coords.to_nd_index()] {
            return Ok(AlreadyRevealed);
        }

        self.revealed[coords.to_nd_index()] = true;
        self.revealed_count += 1;

        Ok(if self.layout.contains_bomb(coords) {
            Bomb
        } else {
            Safe
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: Coord2, bombs: &[Coord2]) -> BombLayout {
        BombLayout::from_bomb_coords(size, bombs).unwrap()
    }

    #[test]
    fn reveal_reports_bomb_or_safe() {
        let mut board = Board::new(layout((2, 2), &[(0, 0)]));

        assert_eq!(board.reveal((1, 1)).unwrap(), RevealOutcome::Safe);
        assert_eq!(board.cell_at((1, 1)), CellState::Safe);

        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::Bomb);
        assert_eq!(board.cell_at((0, 0)), CellState::Bomb);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut board = Board::new(layout((2, 2), &[(0, 0)]));

        assert_eq!(board.reveal((1, 0)).unwrap(), RevealOutcome::Safe);
        assert_eq!(board.revealed_count(), 1);

        assert_eq!(board.reveal((1, 0)).unwrap(), RevealOutcome::AlreadyRevealed);
        assert_eq!(board.revealed_count(), 1);
        assert_eq!(board.cell_at((1, 0)), CellState::Safe);
    }

    #[test]
    fn reveal_rejects_out_of_range_coords() {
        let mut board = Board::new(layout((2, 2), &[(0, 0)]));

        assert_eq!(board.reveal((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn unrevealed_cells_stay_hidden() {
        let board = Board::new(layout((2, 2), &[(0, 0)]));

        assert_eq!(board.cell_at((0, 0)), CellState::Hidden);
        assert_eq!(board.cell_at((1, 1)), CellState::Hidden);
    }
}
