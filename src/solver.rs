//! Shortest path search with A*

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use crate::{Grid, MazeError, Position};

/// Route through the maze, from start to end inclusive
///
/// Never empty; consecutive positions are one orthogonal step apart.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Path(Vec<Position>);

impl Path {
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.0
    }

    pub fn start(&self) -> Position {
        self.0[0]
    }

    pub fn end(&self) -> Position {
        self.0[self.0.len() - 1]
    }

    /// Number of moves taken, one less than the number of positions
    pub fn step_count(&self) -> usize {
        self.0.len() - 1
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of a search
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Solution {
    /// Shortest path from start to end
    Found(Path),
    /// End cannot be reached from start
    NotFound,
}

impl Solution {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Solution::Found(path) => Some(path),
            Solution::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Solution::Found(path) => Some(path),
            Solution::NotFound => None,
        }
    }

    /// Print report
    pub fn print_report(&self) {
        match self {
            Solution::Found(path) => {
                println!("The shortest path is {} steps.", path.step_count())
            }
            Solution::NotFound => println!("No path found!"),
        }
    }
}

/// How the search first got to a square
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Visit {
    Unvisited,
    Start,
    ReachedFrom(Position),
}

/// Per-square bookkeeping of one search
struct SearchState {
    cols: usize,
    came_from: Vec<Visit>,
    /// Only meaningful where `came_from` is not [Visit::Unvisited]
    cost_so_far: Vec<usize>,
}

impl SearchState {
    fn new(grid: &Grid) -> Self {
        let len = grid.rows() * grid.cols();
        Self {
            cols: grid.cols(),
            came_from: vec![Visit::Unvisited; len],
            cost_so_far: vec![0; len],
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    fn visit(&self, pos: Position) -> Visit {
        self.came_from[self.index(pos)]
    }

    /// Best known cost from start, `None` if never reached
    fn cost(&self, pos: Position) -> Option<usize> {
        let idx = self.index(pos);
        match self.came_from[idx] {
            Visit::Unvisited => None,
            _ => Some(self.cost_so_far[idx]),
        }
    }

    fn record(&mut self, pos: Position, cost: usize, visit: Visit) {
        let idx = self.index(pos);
        self.came_from[idx] = visit;
        self.cost_so_far[idx] = cost;
    }

    /// Follow predecessors back from `end`
    fn reconstruct(&self, end: Position) -> Path {
        let mut positions = vec![end];
        let mut current = end;
        while let Visit::ReachedFrom(prev) = self.visit(current) {
            positions.push(prev);
            current = prev;
        }
        positions.reverse();
        Path(positions)
    }
}

/// Manhattan distance, admissible and consistent for unit orthogonal moves
pub fn heuristic(pos: &Position, goal: &Position) -> usize {
    pos.manhattan(goal)
}

/// Find the shortest path from `start` to `end`
///
/// Moves are orthogonal and cost one step each. Among several shortest
/// paths the same one is returned for the same input.
///
/// Returns error, if `start` or `end` is out of bounds or not a passage.
/// An unreachable `end` is not an error but [Solution::NotFound].
pub fn solve(grid: &Grid, start: Position, end: Position) -> Result<Solution, MazeError> {
    for pos in [start, end] {
        if !grid.is_passage(pos) {
            return Err(MazeError::InvalidPosition(pos));
        }
    }

    let mut state = SearchState::new(grid);
    state.record(start, 0, Visit::Start);

    // Min-heap on (priority, position); position breaks ties
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0, start)));

    let mut expanded = 0;
    let mut reached = false;
    while let Some(Reverse((priority, current))) = frontier.pop() {
        if current == end {
            reached = true;
            break;
        }

        let Some(cost) = state.cost(current) else {
            continue;
        };
        // Stale entry, a cheaper route was recorded after it was pushed
        if priority > cost + heuristic(&current, &end) {
            continue;
        }
        expanded += 1;

        let new_cost = cost + 1;
        for next in grid.neighbors(current) {
            if state.cost(next).map_or(true, |known| new_cost < known) {
                state.record(next, new_cost, Visit::ReachedFrom(current));
                frontier.push(Reverse((new_cost + heuristic(&next, &end), next)));
            }
        }
    }

    if reached {
        let path = state.reconstruct(end);
        debug!(
            "Found {} step path from {} to {}, expanded {} squares",
            path.step_count(),
            start,
            end,
            expanded
        );
        Ok(Solution::Found(path))
    } else {
        debug!(
            "No path from {} to {}, expanded {} squares",
            start, end, expanded
        );
        Ok(Solution::NotFound)
    }
}
