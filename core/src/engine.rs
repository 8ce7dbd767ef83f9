use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// Outcome of an accepted flip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Flipped,
    Won,
}

/// A game in progress: holds the current board snapshot and stops accepting
/// flips once it is won.
///
/// On deserialization the state is derived from the board, any stored state
/// is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedGame")]
pub struct PlayEngine {
    board: Board,
    state: EngineState,
    moves: u32,
}

#[derive(Deserialize)]
struct SavedGame {
    board: Board,
    moves: u32,
}

impl From<SavedGame> for PlayEngine {
    fn from(saved: SavedGame) -> Self {
        Self {
            moves: saved.moves,
            ..Self::new(saved.board)
        }
    }
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        let state = if board.has_won() {
            EngineState::Won
        } else {
            EngineState::Active
        };
        Self {
            board,
            state,
            moves: 0,
        }
    }

    /// Starts a fresh game from `generator`, discarding the current one.
    pub fn reset<G: BoardGenerator>(&mut self, generator: G, config: GameConfig) -> Result<()> {
        *self = Self::new(generator.generate(config)?);
        log::debug!("Game reset to a {}x{} board", config.size.0, config.size.1);
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn flip(&mut self, coords: Coord2) -> Result<FlipOutcome> {
        self.check_active()?;
        self.board = self.board.flip(coords)?;
        self.moves = self.moves.saturating_add(1);

        if self.board.has_won() {
            self.state = EngineState::Won;
            log::info!("Board cleared in {} moves", self.moves);
            Ok(FlipOutcome::Won)
        } else {
            Ok(FlipOutcome::Flipped)
        }
    }

    /// Flips the cell named by a `row-col` key, as handed over by a renderer.
    pub fn flip_key(&mut self, key: &str) -> Result<FlipOutcome> {
        let coords = parse_coord_key(key)?;
        self.flip(coords)
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
