use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use coins::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod coins;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub bombs: CellCount,
    /// Payout applied to the original bet on every safe reveal, in whole
    /// percent (150 = 1.5x).
    pub payout_percent: u16,
    pub initial_balance: Coins,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, bombs: CellCount) -> Self {
        Self {
            size,
            bombs,
            payout_percent: 150,
            initial_balance: Coins::from_whole(100),
        }
    }

    pub fn new((size_x, size_y): Coord2, bombs: CellCount) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let max_bombs = mult(size_x, size_y).saturating_sub(1).max(1);
        let bombs = bombs.clamp(1, max_bombs);
        Self::new_unchecked((size_x, size_y), bombs)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((5, 5), 5)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BombLayout {
    bomb_mask: Array2<bool>,
    bomb_count: CellCount,
}

impl BombLayout {
    pub fn from_bomb_mask(bomb_mask: Array2<bool>) -> Result<Self> {
        let bomb_count: CellCount = bomb_mask
            .iter()
            .filter(|&&is_bomb| is_bomb)
            .count()
            .try_into()
            .map_err(|_| GameError::TooManyBombs)?;

        let layout = Self {
            bomb_mask,
            bomb_count,
        };
        if layout.bomb_count >= layout.total_cells() {
            return Err(GameError::TooManyBombs);
        }
        Ok(layout)
    }

    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        let mut bomb_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in bomb_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            bomb_mask[coords.to_nd_index()] = true;
        }

        Self::from_bomb_mask(bomb_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.bomb_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.bomb_mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.bomb_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.bomb_mask.len().try_into().unwrap()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn contains_bomb(&self, coords: Coord2) -> bool {
        self[coords]
    }
}

impl Index<Coord2> for BombLayout {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.bomb_mask[(x as usize, y as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    AlreadyRevealed,
    Safe,
    Bomb,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            AlreadyRevealed => false,
            Safe => true,
            Bomb => true,
        }
    }
}
