use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

/// Generation strategy that scrambles a won board with random presses, so the
/// result always has a solution. `config.lit_chance` is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct SolvableBoardGenerator {
    seed: u64,
    presses: CellCount,
}

impl SolvableBoardGenerator {
    pub fn new(seed: u64, presses: CellCount) -> Self {
        Self { seed, presses }
    }

    /// Same as [`BoardGenerator::generate`], also returning the presses that
    /// were applied. Replaying them on the board turns it back off.
    pub fn generate_with_presses(self, config: GameConfig) -> Result<(Board, Vec<Coord2>)> {
        config.validate()?;
        let (rows, cols) = config.size;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut board = Board::unlit(config.size)?;
        let mut presses = Vec::with_capacity(self.presses.into());

        for _ in 0..self.presses {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            board = board.flip(coords)?;
            presses.push(coords);
        }

        if self.presses > 0 && board.has_won() {
            log::warn!(
                "Scrambling with {} presses cancelled out, board starts already won",
                self.presses
            );
        }
        Ok((board, presses))
    }
}

impl BoardGenerator for SolvableBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        self.generate_with_presses(config).map(|(board, _)| board)
    }
}
