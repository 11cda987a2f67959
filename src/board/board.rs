//! Board structure: occupancy for both sides

use super::bitboard::Bitboard;
use super::{CellState, Pos, Side};
use crate::error::GameError;

/// Game board, one bitboard per side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Human stones bitboard
    human: Bitboard,
    /// Computer stones bitboard
    computer: Bitboard,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            human: Bitboard::new(size * size),
            computer: Bitboard::new(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get occupancy at position
    #[inline]
    pub fn get(&self, pos: Pos) -> CellState {
        let idx = pos.to_index(self.size);
        if self.human.get(idx) {
            CellState::Occupied(Side::Human)
        } else if self.computer.get(idx) {
            CellState::Occupied(Side::Computer)
        } else {
            CellState::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == CellState::Empty
    }

    /// Put a stone on an empty cell
    pub fn place(&mut self, pos: Pos, side: Side) -> Result<(), GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let idx = pos.to_index(self.size);
        match side {
            Side::Human => self.human.set(idx),
            Side::Computer => self.computer.set(idx),
        }
        Ok(())
    }

    /// Bitboard for a side
    #[inline]
    pub fn bitboard(&self, side: Side) -> &Bitboard {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Positions held by a side, row-major
    pub fn stones(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.bitboard(side)
            .iter_ones()
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        (self.human.count() + self.computer.count()) as usize
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.size * self.size
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size * size)
            .filter(move |&idx| !self.human.get(idx) && !self.computer.get(idx))
            .map(move |idx| Pos::from_index(idx, size))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::BOARD_SIZE)
    }
}
