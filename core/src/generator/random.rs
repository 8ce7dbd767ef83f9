use ndarray::Array2;
use rand::prelude::*;

use super::*;

impl Board {
    /// Lights each cell independently with probability `config.lit_chance`,
    /// drawing from the caller's random source.
    pub fn random<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let cells = Array2::from_shape_fn(config.size.to_nd_index(), |_| {
            rng.random_bool(config.lit_chance)
        });
        Self::from_mask(cells)
    }
}

/// Creates a `rows` x `cols` board where each cell is lit with probability `lit_chance`.
///
/// Fails with [`GameError::InvalidDimension`] when either dimension is zero or
/// does not fit in a [`Coord`], and with [`GameError::InvalidProbability`] when
/// `lit_chance` is not within `[0, 1]`.
pub fn create_board<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    lit_chance: f64,
    rng: &mut R,
) -> Result<Board> {
    let rows: Coord = rows.try_into().map_err(|_| GameError::InvalidDimension)?;
    let cols: Coord = cols.try_into().map_err(|_| GameError::InvalidDimension)?;
    let config = GameConfig::new((rows, cols), lit_chance)?;
    Board::random(config, rng)
}

/// Purely random boards. On some sizes these may have no solution.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let board = Board::random(config, &mut rng)?;
        log::debug!(
            "Generated random {}x{} board, {} of {} cells lit",
            config.size.0,
            config.size.1,
            board.lit_count(),
            board.total_cells()
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_chance_is_all_unlit() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = create_board(4, 6, 0.0, &mut rng).unwrap();
        assert!(board.has_won());
        assert_eq!(board.size(), (4, 6));
    }

    #[test]
    fn full_chance_is_all_lit() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = create_board(5, 3, 1.0, &mut rng).unwrap();
        assert_eq!(board.lit_count(), board.total_cells());
    }

    #[test]
    fn invalid_inputs() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            create_board(0, 3, 0.5, &mut rng),
            Err(GameError::InvalidDimension)
        );
        assert_eq!(
            create_board(3, 256, 0.5, &mut rng),
            Err(GameError::InvalidDimension)
        );
        assert_eq!(
            create_board(3, 3, 1.5, &mut rng),
            Err(GameError::InvalidProbability)
        );
        assert_eq!(
            create_board(3, 3, f64::NAN, &mut rng),
            Err(GameError::InvalidProbability)
        );
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::new((8, 8), 0.5).unwrap();
        let a = RandomBoardGenerator::new(42).generate(config).unwrap();
        let b = RandomBoardGenerator::new(42).generate(config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unchecked_config_is_still_validated() {
        let config = GameConfig::new_unchecked((0, 3), 0.5);
        assert_eq!(
            RandomBoardGenerator::new(1).generate(config),
            Err(GameError::InvalidDimension)
        );
    }
}
