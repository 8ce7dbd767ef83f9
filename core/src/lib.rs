#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    /// Chance for each cell to start lit, within `[0, 1]`.
    pub lit_chance: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, lit_chance: f64) -> Self {
        Self { size, lit_chance }
    }

    pub fn new(size: Coord2, lit_chance: f64) -> Result<Self> {
        let config = Self::new_unchecked(size, lit_chance);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidDimension);
        }
        // also rejects NaN
        if !(0.0..=1.0).contains(&self.lit_chance) {
            return Err(GameError::InvalidProbability);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((3, 3), 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.total_cells(), 9);
    }

    #[test]
    fn config_bounds() {
        assert!(GameConfig::new((1, 1), 0.0).is_ok());
        assert!(GameConfig::new((255, 255), 1.0).is_ok());
        assert_eq!(
            GameConfig::new((0, 1), 0.5),
            Err(GameError::InvalidDimension)
        );
        assert_eq!(
            GameConfig::new((2, 2), -0.1),
            Err(GameError::InvalidProbability)
        );
    }

    #[test]
    fn config_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"size":[5,7],"lit_chance":0.25}"#).unwrap();
        assert_eq!(config, GameConfig::new((5, 7), 0.25).unwrap());
    }
}
