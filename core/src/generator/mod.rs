use crate::*;
pub use random::*;
pub use solvable::*;

mod random;
mod solvable;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}
