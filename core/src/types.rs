use alloc::format;
use alloc::string::String;

use crate::{GameError, Result};

/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Formats coordinates as a `row-col` key, e.g. `(1, 2)` becomes `"1-2"`.
pub fn coord_key((row, col): Coord2) -> String {
    format!("{row}-{col}")
}

/// Parses a `row-col` key back into coordinates. Bounds are not checked here.
pub fn parse_coord_key(key: &str) -> Result<Coord2> {
    let (row, col) = key
        .trim()
        .split_once('-')
        .ok_or(GameError::InvalidCoordKey)?;
    let row = row.parse().map_err(|_| GameError::InvalidCoordKey)?;
    let col = col.parse().map_err(|_| GameError::InvalidCoordKey)?;
    Ok((row, col))
}

/// In-bounds orthogonal neighbors of `center` on a `size` board: up, down,
/// left, right. No wraparound.
pub fn orthogonal_neighbors(center: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    const DELTAS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    let (row, col) = center;
    DELTAS.into_iter().filter_map(move |(drow, dcol)| {
        let next = (row.checked_add_signed(drow)?, col.checked_add_signed(dcol)?);
        (next.0 < size.0 && next.1 < size.1).then_some(next)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_two_neighbors() {
        let neighbors: Vec<_> = orthogonal_neighbors((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1)]);
    }

    #[test]
    fn center_has_four_neighbors_in_fixed_order() {
        let neighbors: Vec<_> = orthogonal_neighbors((1, 1), (3, 3)).collect();
        assert_eq!(neighbors, [(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert_eq!(orthogonal_neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn coord_keys() {
        assert_eq!(coord_key((1, 2)), "1-2");
        assert_eq!(parse_coord_key("1-2"), Ok((1, 2)));
        assert_eq!(parse_coord_key(" 10-0 "), Ok((10, 0)));
        assert_eq!(parse_coord_key("12"), Err(GameError::InvalidCoordKey));
        assert_eq!(parse_coord_key("a-1"), Err(GameError::InvalidCoordKey));
        assert_eq!(parse_coord_key("1--1"), Err(GameError::InvalidCoordKey));
        assert_eq!(parse_coord_key("300-1"), Err(GameError::InvalidCoordKey));
    }
}
