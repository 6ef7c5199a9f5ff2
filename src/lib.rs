//! Generate a perfect maze and find the shortest way through it
//!
//! Mazes are built with a randomized Kruskal spanning tree over the
//! chambers of a rectangular grid, and solved with A* using the Manhattan
//! distance heuristic.
//!
//! # Examples
//! ## Generate and solve a seeded maze
//! ```
//! use maze_astar::{maze_generator::MazeGenerator, solver, Position};
//!
//! let mut gen = MazeGenerator::new(Some(7));
//! let grid = gen.generate_maze(5, 8).unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (11, 17));
//!
//! let start = Position::chamber(0, 0);
//! let end = Position::chamber(4, 7);
//! let solution = solver::solve(&grid, start, end).unwrap();
//! let path = solution.path().unwrap();
//! assert_eq!(path.start(), start);
//! assert_eq!(path.end(), end);
//! ```
//!
//! ## Solve a hand-drawn grid
//! ```
//! use maze_astar::{solver, Grid, Position};
//!
//! let markers = "
//! 🟫🟫🟫🟫🟫🟫🟫
//! 🟫🟩🟩🟩🟫🟩🟫
//! 🟫🟫🟫🟩🟫🟩🟫
//! 🟫🟩🟩🟩🟩🟩🟫
//! 🟫🟫🟫🟫🟫🟫🟫";
//! let grid = Grid::parse_markers(markers.trim()).unwrap();
//! let solution = solver::solve(&grid, Position::new(1, 1), Position::new(1, 5)).unwrap();
//! solution.print_report();
//! assert_eq!(solution.path().unwrap().step_count(), 8);
//! ```

pub mod forest;
pub mod maze_generator;
pub mod positions;
pub mod solver;

#[cfg(test)]
mod test_helpers;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::solver::Path;

/// Errors raised by maze construction, parsing and solving
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Requested maze is smaller than 3x3 chambers
    #[error("mazes cannot be smaller than 3x3, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
    /// Position is outside the grid or points at a wall
    #[error("position {0} is outside the grid or not a passage")]
    InvalidPosition(Position),
    /// Position text is not of the form `ROW,COL`
    #[error("expected position as `ROW,COL`, got `{0}`")]
    MalformedPosition(String),
    #[error("unexpected marker `{marker}` at row={row}, col={col}")]
    UnexpectedMarker { marker: char, row: usize, col: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid has no cells")]
    EmptyGrid,
    /// Random position requested from a grid without passages
    #[error("grid has no passages to pick a position from")]
    NoPassages,
}

/// Location in the grid, in grid coordinates
///
/// Chambers sit at odd/odd coordinates, see [Position::chamber].
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Grid position of the chamber at logical index (`row`, `col`)
    pub const fn chamber(row: usize, col: usize) -> Self {
        Self {
            row: 2 * row + 1,
            col: 2 * col + 1,
        }
    }

    /// Manhattan distance to `other`
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Offset by (`d_row`, `d_col`), if the result stays non-negative
    fn offset(&self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    /// Parse `ROW,COL`, whitespace around either number is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MazeError::MalformedPosition(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(malformed)?;
        Ok(Position {
            row: row.trim().parse().map_err(|_| malformed())?,
            col: col.trim().parse().map_err(|_| malformed())?,
        })
    }
}

/// Content of a single grid square
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    Wall,
    Passage,
}

/// Rectangular maze layout, stored row-major
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    const S_WALL: char = '🟫';
    const S_PASSAGE: char = '🟩';
    const S_PATH: char = '🟨';
    const S_START: char = '🏃';
    const S_GOAL: char = '❎';

    /// Neighbour offsets, in the order the solver expands them
    const MOVES: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

    /// Grid of `rows` x `cols` squares, all set to `cell`
    pub fn filled(rows: usize, cols: usize, cell: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![cell; rows * cols],
        }
    }

    /// Parse grid from its marker representation
    ///
    /// - `markers`: One line per row, `🟫` for walls and `🟩` for passages.
    ///
    /// Returns error, if the text contains unknown characters, rows of
    /// unequal length, or no cells at all.
    pub fn parse_markers(markers: &str) -> Result<Self, MazeError> {
        let squares: Vec<Vec<char>> = markers
            .lines()
            .map(|row| row.trim_end().chars().collect())
            .collect();

        let cols = squares.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(squares.len() * cols);
        for (row, line) in squares.iter().enumerate() {
            if line.len() != cols {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, marker) in line.iter().enumerate() {
                cells.push(match *marker {
                    Self::S_WALL => Cell::Wall,
                    Self::S_PASSAGE => Cell::Passage,
                    marker => return Err(MazeError::UnexpectedMarker { marker, row, col }),
                });
            }
        }

        Ok(Self {
            rows: squares.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `pos`, or `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    pub fn is_passage(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Passage)
    }

    /// Overwrite a single cell, e.g. to reinstate a wall
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), MazeError> {
        let idx = self.index_of(pos).ok_or(MazeError::InvalidPosition(pos))?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// All passage positions, row by row
    pub fn passages(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Passage)
            .map(|(idx, _)| self.position_of(idx))
    }

    /// Grid positions of all chambers, row by row
    pub fn chambers(&self) -> impl Iterator<Item = Position> {
        let (rows, cols) = (self.rows, self.cols);
        (1..rows.saturating_sub(1))
            .step_by(2)
            .cartesian_product((1..cols.saturating_sub(1)).step_by(2))
            .map(|(row, col)| Position::new(row, col))
    }

    /// Number of open squares between two chambers
    pub fn carved_connectors(&self) -> usize {
        (1..self.rows.saturating_sub(1))
            .cartesian_product(1..self.cols.saturating_sub(1))
            .map(|(row, col)| Position::new(row, col))
            .filter(|pos| (pos.row % 2 == 0) != (pos.col % 2 == 0))
            .filter(|pos| self.is_passage(*pos))
            .count()
    }

    /// Orthogonal passage neighbours of `pos`
    ///
    /// Order is fixed: right, left, down, up.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Self::MOVES
            .into_iter()
            .filter_map(move |(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|next| self.is_passage(*next))
    }

    /// Numeric form of the grid, `1` for walls and `0` for passages
    pub fn to_markers(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|cell| (*cell == Cell::Wall) as u8).collect())
            .collect()
    }

    /// Marker representation with `path` drawn over the passages
    pub fn render_path(&self, path: Option<&Path>) -> String {
        let mut squares: Vec<Vec<char>> = self
            .cells
            .chunks(self.cols.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Wall => Self::S_WALL,
                        Cell::Passage => Self::S_PASSAGE,
                    })
                    .collect()
            })
            .collect();

        if let Some(path) = path {
            // Positions outside this grid are skipped
            let mut mark = |pos: Position, marker: char| {
                if let Some(square) = squares.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
                    *square = marker;
                }
            };
            for pos in path {
                mark(*pos, Self::S_PATH);
            }
            mark(path.start(), Self::S_START);
            mark(path.end(), Self::S_GOAL);
        }

        squares.iter().map(|row| row.iter().join("")).join("\n")
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    fn position_of(&self, idx: usize) -> Position {
        Position::new(idx / self.cols, idx % self.cols)
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    /// Panics if `pos` is out of bounds, use [Grid::get] otherwise
    fn index(&self, pos: Position) -> &Self::Output {
        let idx = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("Position out of bounds: {}", pos));
        &self.cells[idx]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_path(None))
    }
}
