//! Catalog of every winning line on the board
//!
//! A line is `run_length` consecutive cells in one of four orientations.
//! The catalog enumerates them once and keeps, for every cell, the ids of
//! the lines passing through it, so a move only has to touch those lines.

use crate::board::{Pos, BOARD_SIZE, MAX_BOARD_SIZE, RUN_LENGTH};
use crate::error::GeometryError;

/// Direction a line runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Down a column
    Vertical,
    /// Along a row
    Horizontal,
    /// Down and to the right
    DiagonalDown,
    /// Down and to the left
    DiagonalUp,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Vertical,
        Orientation::Horizontal,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// (row, col) step between consecutive cells
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (1, -1),
        }
    }
}

/// Index of a line in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u32);

impl LineId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One way to win: a fixed run of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    orientation: Orientation,
    cells: Vec<Pos>,
}

impl Line {
    fn new(start: Pos, orientation: Orientation, run_length: usize) -> Self {
        let (dr, dc) = orientation.step();
        let cells = (0..run_length as i32)
            .map(|k| {
                Pos::new(
                    (start.row as i32 + dr * k) as u8,
                    (start.col as i32 + dc * k) as u8,
                )
            })
            .collect();
        Self { orientation, cells }
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells in order from the start of the line
    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Number of lines a `size` board with runs of `run_length` holds:
/// two axis families of `size * m` and two diagonal families of `m * m`,
/// where `m = size - run_length + 1`.
pub fn line_count(size: usize, run_length: usize) -> usize {
    let m = size + 1 - run_length;
    2 * size * m + 2 * m * m
}

/// Reject geometries no catalog can be built for.
pub fn check_geometry(size: usize, run_length: usize) -> Result<(), GeometryError> {
    if run_length < 2 {
        return Err(GeometryError::RunTooShort { run_length });
    }
    if size < run_length {
        return Err(GeometryError::BoardTooSmall { size, run_length });
    }
    if size > MAX_BOARD_SIZE {
        return Err(GeometryError::BoardTooLarge {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

/// All winning lines plus the per-cell reverse index
#[derive(Debug, Clone)]
pub struct Catalog {
    size: usize,
    run_length: usize,
    lines: Vec<Line>,
    by_cell: Vec<Vec<LineId>>,
}

impl Catalog {
    /// Build the catalog for an arbitrary geometry
    pub fn new(size: usize, run_length: usize) -> Result<Self, GeometryError> {
        check_geometry(size, run_length)?;
        Ok(Self::build(size, run_length))
    }

    /// Catalog for the standard 15x15 board, five in a row
    pub fn standard() -> Self {
        Self::build(BOARD_SIZE, RUN_LENGTH)
    }

    fn build(size: usize, run_length: usize) -> Self {
        let starts = size + 1 - run_length;
        let mut lines = Vec::with_capacity(line_count(size, run_length));
        let mut push = |row: usize, col: usize, orientation: Orientation| {
            lines.push(Line::new(
                Pos::new(row as u8, col as u8),
                orientation,
                run_length,
            ));
        };

        for col in 0..size {
            for row in 0..starts {
                push(row, col, Orientation::Vertical);
            }
        }
        for row in 0..size {
            for col in 0..starts {
                push(row, col, Orientation::Horizontal);
            }
        }
        for col in 0..starts {
            for row in 0..starts {
                push(row, col, Orientation::DiagonalDown);
            }
        }
        // Anti-diagonals start on the far column edge and walk back towards column 0
        for col in (run_length - 1..size).rev() {
            for row in 0..starts {
                push(row, col, Orientation::DiagonalUp);
            }
        }

        let mut by_cell = vec![Vec::new(); size * size];
        for (idx, line) in lines.iter().enumerate() {
            for pos in line.cells() {
                by_cell[pos.to_index(size)].push(LineId(idx as u32));
            }
        }

        Self {
            size,
            run_length,
            lines,
            by_cell,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Total number of lines
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    /// Lines with their ids, in id order
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (LineId(idx as u32), line))
    }

    /// Ids of the lines passing through a cell, ascending
    #[inline]
    pub fn lines_through(&self, pos: Pos) -> &[LineId] {
        &self.by_cell[pos.to_index(self.size)]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_line_count() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 572);
        assert_eq!(line_count(15, 5), 572);
    }

    #[test]
    fn test_orientation_families() {
        let catalog = Catalog::standard();
        let count = |o| catalog.lines().filter(|(_, l)| l.orientation() == o).count();
        assert_eq!(count(Orientation::Vertical), 15 * 11);
        assert_eq!(count(Orientation::Horizontal), 15 * 11);
        assert_eq!(count(Orientation::DiagonalDown), 11 * 11);
        assert_eq!(count(Orientation::DiagonalUp), 11 * 11);
    }

    #[test]
    fn test_lines_are_in_bounds_and_collinear() {
        for (size, run) in [(15, 5), (7, 3), (5, 5), (9, 4)] {
            let catalog = Catalog::new(size, run).unwrap();
            assert_eq!(catalog.len(), line_count(size, run));

            for (_, line) in catalog.lines() {
                let cells = line.cells();
                assert_eq!(cells.len(), run);
                let (dr, dc) = line.orientation().step();
                for pair in cells.windows(2) {
                    assert_eq!(pair[1].row as i32 - pair[0].row as i32, dr);
                    assert_eq!(pair[1].col as i32 - pair[0].col as i32, dc);
                }
                for pos in cells {
                    assert!(Pos::is_valid(pos.row as i32, pos.col as i32, size));
                }
            }
        }
    }

    #[test]
    fn test_lines_are_distinct() {
        let catalog = Catalog::standard();
        let mut seen = std::collections::HashSet::new();
        for (_, line) in catalog.lines() {
            let mut cells = line.cells().to_vec();
            cells.sort();
            assert!(seen.insert(cells), "duplicate line {:?}", line);
        }
    }

    #[test]
    fn test_reverse_index_matches_membership() {
        let catalog = Catalog::standard();
        for row in 0..15u8 {
            for col in 0..15u8 {
                let pos = Pos::new(row, col);
                let through = catalog.lines_through(pos);
                assert!(through.windows(2).all(|w| w[0] < w[1]));

                let expected: Vec<LineId> = catalog
                    .lines()
                    .filter(|(_, line)| line.contains(pos))
                    .map(|(id, _)| id)
                    .collect();
                assert_eq!(through, expected.as_slice());
            }
        }
    }

    #[test]
    fn test_lines_per_cell() {
        let catalog = Catalog::standard();
        // Center: 4 orientations x 5 offsets
        assert_eq!(catalog.lines_through(Pos::new(7, 7)).len(), 20);
        // Corner: one line per orientation except the one pointing off-board
        assert_eq!(catalog.lines_through(Pos::new(0, 0)).len(), 3);
        assert_eq!(catalog.lines_through(Pos::new(0, 14)).len(), 3);
        let max = (0..225)
            .map(|i| catalog.lines_through(Pos::from_index(i, 15)).len())
            .max();
        assert_eq!(max, Some(20));
    }

    #[test]
    fn test_enumeration_order() {
        let catalog = Catalog::standard();
        let first = catalog.line(LineId(0));
        assert_eq!(first.orientation(), Orientation::Vertical);
        assert_eq!(first.cells()[0], Pos::new(0, 0));
        assert_eq!(first.cells()[4], Pos::new(4, 0));

        // First anti-diagonal starts on the last column
        let (_, anti) = catalog
            .lines()
            .find(|(_, l)| l.orientation() == Orientation::DiagonalUp)
            .unwrap();
        assert_eq!(anti.cells()[0], Pos::new(0, 14));
        assert_eq!(anti.cells()[4], Pos::new(4, 10));
    }

    #[test]
    fn test_invalid_geometry() {
        assert_eq!(
            Catalog::new(15, 1).unwrap_err(),
            GeometryError::RunTooShort { run_length: 1 }
        );
        assert_eq!(
            Catalog::new(4, 5).unwrap_err(),
            GeometryError::BoardTooSmall {
                size: 4,
                run_length: 5
            }
        );
        assert!(matches!(
            Catalog::new(65, 5),
            Err(GeometryError::BoardTooLarge { size: 65, .. })
        ));
    }
}
