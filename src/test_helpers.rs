//! Brute-force reference checks shared by the unit tests

use std::collections::{HashMap, VecDeque};

use crate::{solver::Path, Grid, Position};

/// Breadth-first distances from `start` to every reachable passage
pub fn bfs_distances(grid: &Grid, start: Position) -> HashMap<Position, usize> {
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for next in grid.neighbors(current) {
            distances.entry(next).or_insert_with(|| {
                queue.push_back(next);
                next_distance
            });
        }
    }
    distances
}

pub fn bfs_distance(grid: &Grid, start: Position, end: Position) -> Option<usize> {
    bfs_distances(grid, start).get(&end).copied()
}

/// Check that `path` walks from `start` to `end` over passages, one step at a time
pub fn assert_valid_path(grid: &Grid, path: &Path, start: Position, end: Position) {
    let positions = path.positions();
    assert_eq!(positions.first(), Some(&start));
    assert_eq!(positions.last(), Some(&end));
    assert!(positions.iter().all(|pos| grid.is_passage(*pos)));
    for step in positions.windows(2) {
        assert_eq!(step[0].manhattan(&step[1]), 1, "{} -> {}", step[0], step[1]);
    }
}
