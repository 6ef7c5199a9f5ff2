//! Maze generation

use itertools::Itertools;
use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{forest::DisjointForest, positions, Cell, Grid, MazeError, Position};

/// Wall square sitting between exactly two chambers
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct EdgeCandidate(Position);

impl EdgeCandidate {
    pub fn position(&self) -> Position {
        self.0
    }

    /// Grid positions of the two chambers this wall separates
    ///
    /// Walls on even rows separate the chambers above and below, walls on
    /// odd rows the chambers to the left and right.
    pub fn chambers(&self) -> (Position, Position) {
        let Position { row, col } = self.0;
        if row % 2 == 0 {
            (Position::new(row - 1, col), Position::new(row + 1, col))
        } else {
            (Position::new(row, col - 1), Position::new(row, col + 1))
        }
    }
}

/// All walls between chambers of a `height` x `width` maze
///
/// Walls between vertical neighbours come first, then walls between
/// horizontal neighbours.
pub fn edge_candidates(height: usize, width: usize) -> Vec<EdgeCandidate> {
    let (rows, cols) = (2 * height + 1, 2 * width + 1);
    let vertical = (2..rows - 1)
        .step_by(2)
        .cartesian_product((1..cols - 1).step_by(2));
    let horizontal = (1..rows - 1)
        .step_by(2)
        .cartesian_product((2..cols - 1).step_by(2));

    vertical
        .chain(horizontal)
        .map(|(row, col)| EdgeCandidate(Position::new(row, col)))
        .collect()
}

/// Generate a perfect maze with randomized Kruskal's algorithm
///
/// - `height`: Number of chamber rows, at least 3.
/// - `width`: Number of chamber columns, at least 3.
/// - `rng`: Random source for shuffling the walls.
///
/// The returned grid has `2 * height + 1` rows and `2 * width + 1` columns.
/// Every pair of chambers is connected by exactly one simple path.
pub fn generate<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    if height < 3 || width < 3 {
        return Err(MazeError::InvalidDimensions { height, width });
    }

    let mut grid = Grid::filled(2 * height + 1, 2 * width + 1, Cell::Wall);
    let chambers: Vec<Position> = grid.chambers().collect();
    for chamber in chambers {
        grid.set(chamber, Cell::Passage)?;
    }

    let mut edges = edge_candidates(height, width);
    let candidate_count = edges.len();
    edges.shuffle(rng);

    let mut forest = DisjointForest::new(height * width);
    let chamber_index = |pos: Position| (pos.row / 2) * width + pos.col / 2;

    while forest.tree_count() > 1 {
        let Some(edge) = edges.pop() else {
            break;
        };
        let (a, b) = edge.chambers();
        if forest.union(chamber_index(a), chamber_index(b)) {
            trace!("Joined {} and {} through {}", a, b, edge.position());
            grid.set(edge.position(), Cell::Passage)?;
        }
    }

    debug!(
        "Generated {}x{} maze, carved {} of {} candidate walls",
        height,
        width,
        height * width - forest.tree_count(),
        candidate_count
    );
    Ok(grid)
}

/// Maze generator, owning the random source of a whole run
///
/// The same seed reproduces both the maze and any randomly picked
/// start and end positions.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Seeded generator, or seeded from entropy when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn from_rng(random: R) -> Self {
        Self { random }
    }

    /// Generate a perfect maze of `height` x `width` chambers, see [generate]
    pub fn generate_maze(&mut self, height: usize, width: usize) -> Result<Grid, MazeError> {
        generate(height, width, &mut self.random)
    }

    /// Choose start and end positions, see [positions::pick]
    pub fn pick_positions(
        &mut self,
        grid: &Grid,
        start: Option<Position>,
        end: Option<Position>,
    ) -> Result<(Position, Position), MazeError> {
        positions::pick(grid, start, end, &mut self.random)
    }
}
