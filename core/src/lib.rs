#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use types::NeighborIterExt;

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod render;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn square(side: Coord, mines: CellCount) -> Self {
        Self::new((side, side), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// At least one safe cell has to remain, otherwise nothing could ever be won.
    pub const fn validate(&self) -> Result<Self> {
        let cells = self.total_cells();
        if self.mines >= cells {
            Err(GameError::TooManyMines {
                mines: self.mines,
                cells,
            })
        } else {
            Ok(*self)
        }
    }
}

impl Default for GameConfig {
    /// 8×8 with 10 mines.
    fn default() -> Self {
        Self::square(8, 10)
    }
}

/// Immutable mine placement with the adjacency count of every cell cached next to it.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    adjacency: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size = (
            Coord::try_from(rows).map_err(|_| GameError::InvalidCoords)?,
            Coord::try_from(cols).map_err(|_| GameError::InvalidCoords)?,
        );
        // bounded by `mult`, so never truncates
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        GameConfig::new(size, mine_count).validate()?;

        let adjacency = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            mine_mask
                .iter_neighbors((row as Coord, col as Coord))
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count() as u8
        });

        Ok(Self {
            mine_mask,
            adjacency,
            mine_count,
        })
    }

    /// Duplicate coordinates collapse onto the same mine.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.size(), self.mine_count)
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
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size().0, self.size().1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Meaningless for a mine cell, but still the count of its mined neighbors.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.adjacency[coords.to_nd_index()]
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// What a single reveal did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    pub hit_mine: bool,
    pub newly_revealed: Vec<Coord2>,
}

impl RevealOutcome {
    pub const fn no_change() -> Self {
        Self {
            hit_mine: false,
            newly_revealed: Vec::new(),
        }
    }

    pub const fn mine() -> Self {
        Self {
            hit_mine: true,
            newly_revealed: Vec::new(),
        }
    }
}
