use super::*;
use ndarray::Array2;

/// Seeded uniform placement: `config.bombs` distinct cells are drawn without
/// replacement from the flat cell index space. Runs once per board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> BombLayout {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let bombs = if config.bombs >= total_cells {
            log::warn!(
                "Requested {} bombs but the board only fits {}, clamping",
                config.bombs,
                total_cells
            );
            total_cells.saturating_sub(1)
        } else {
            config.bombs
        };

        let mut bomb_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        {
            let cells = bomb_mask.as_slice_mut().expect("layout should be standard");
            let mut rng = SmallRng::seed_from_u64(self.seed);
            for index in rand::seq::index::sample(&mut rng, cells.len(), bombs as usize) {
                cells[index] = true;
            }
        }

        BombLayout {
            bomb_mask,
            bomb_count: bombs,
        }
    }
}
