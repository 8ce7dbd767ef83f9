use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable snapshot of a Lights Out grid, `true` is lit.
///
/// Dimensions never change once a board exists. Every move goes through
/// [`Board::flip`], which hands back a fresh snapshot and leaves `self` as it
/// was, so earlier states stay valid for undo or comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// Board with every cell unlit, which is already won.
    pub fn unlit(size: Coord2) -> Result<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            cells: Array2::from_elem(size.to_nd_index(), false),
        })
    }

    /// Board with every cell lit.
    pub fn lit(size: Coord2) -> Result<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            cells: Array2::from_elem(size.to_nd_index(), true),
        })
    }

    pub fn from_mask(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 || rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self { cells })
    }

    /// Builds a board from row slices, which must be non-empty and of equal length.
    pub fn from_rows(rows: &[&[bool]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }
        let flat: Vec<bool> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let cells = Array2::from_shape_vec((rows.len(), cols), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_mask(cells)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions are checked against `Coord::MAX` on construction
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn lit_count(&self) -> CellCount {
        // bounded by total_cells, which fits
        self.cells.iter().filter(|&&lit| lit).count() as CellCount
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn is_lit(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Every cell the flip rule touches for `coords`: the target first, then its
    /// in-bounds orthogonal neighbors.
    pub fn iter_flip_targets(&self, coords: Coord2) -> Result<impl Iterator<Item = Coord2>> {
        let coords = self.validate_coords(coords)?;
        Ok(core::iter::once(coords).chain(orthogonal_neighbors(coords, self.size())))
    }

    /// Applies the flip rule at `coords` and returns the resulting board.
    ///
    /// The target and each orthogonal neighbor that lies on the board are
    /// inverted; neighbors past the edge are skipped. Fails with
    /// [`GameError::OutOfBounds`] when the target itself is off the board.
    pub fn flip(&self, coords: Coord2) -> Result<Self> {
        let mut next = self.clone();
        for pos in self.iter_flip_targets(coords)? {
            let cell = &mut next.cells[pos.to_nd_index()];
            *cell = !*cell;
        }
        log::trace!("flipped around {:?}, {} lit", coords, next.lit_count());
        Ok(next)
    }

    /// Whether every cell is unlit.
    pub fn has_won(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        Self::from_mask(cells)
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

fn validate_size(size: Coord2) -> Result<Coord2> {
    if size.0 == 0 || size.1 == 0 {
        Err(GameError::InvalidDimension)
    } else {
        Ok(size)
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

const LIT_CHAR: char = 'O';
const UNLIT_CHAR: char = '.';

/// One line per row, `O` for lit and `.` for unlit.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.rows().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &lit in row {
                write!(f, "{}", if lit { LIT_CHAR } else { UNLIT_CHAR })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        LIT_CHAR => Ok(true),
                        UNLIT_CHAR => Ok(false),
                        _ => Err(GameError::InvalidBoardShape),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        let rows: Vec<&[bool]> = rows.iter().map(Vec::as_slice).collect();
        Self::from_rows(&rows)
    }
}
