//! Start and end selection

use rand::{seq::SliceRandom, Rng};

use crate::{Grid, MazeError, Position};

/// Choose start and end positions for a search
///
/// Supplied positions are returned as given; checking them against the
/// grid is left to [crate::solver::solve]. Missing positions are drawn
/// uniformly and independently from all passages of `grid`, start first,
/// so start and end may coincide.
///
/// Returns error, if a position has to be drawn but `grid` has no passages.
pub fn pick<R: Rng + ?Sized>(
    grid: &Grid,
    start: Option<Position>,
    end: Option<Position>,
    rng: &mut R,
) -> Result<(Position, Position), MazeError> {
    let free: Vec<Position> = if start.is_none() || end.is_none() {
        grid.passages().collect()
    } else {
        Vec::new()
    };
    let mut draw = || free.choose(rng).copied().ok_or(MazeError::NoPassages);

    let start = match start {
        Some(pos) => pos,
        None => draw()?,
    };
    let end = match end {
        Some(pos) => pos,
        None => draw()?,
    };
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::pick;
    use crate::maze_generator::MazeGenerator;
    use crate::{Cell, Grid, MazeError, Position};

    #[test]
    fn supplied_positions_are_kept() {
        let grid = Grid::filled(3, 3, Cell::Wall);
        let mut rng = StdRng::seed_from_u64(0);

        // Not validated here, even walls and out-of-bounds squares pass through
        let start = Position::new(0, 0);
        let end = Position::new(10, 10);
        assert_eq!(pick(&grid, Some(start), Some(end), &mut rng), Ok((start, end)));
    }

    #[test]
    fn random_positions_are_passages() {
        let mut gen = MazeGenerator::new(Some(3));
        let grid = gen.generate_maze(6, 6).unwrap();
        for _ in 0..50 {
            let (start, end) = gen.pick_positions(&grid, None, None).unwrap();
            assert!(grid.is_passage(start));
            assert!(grid.is_passage(end));
        }
    }

    #[test]
    fn fill_in_missing_position() {
        let mut gen = MazeGenerator::new(Some(4));
        let grid = gen.generate_maze(4, 4).unwrap();
        let fixed = Position::chamber(1, 2);

        let (start, end) = gen.pick_positions(&grid, Some(fixed), None).unwrap();
        assert_eq!(start, fixed);
        assert!(grid.is_passage(end));

        let (start, end) = gen.pick_positions(&grid, None, Some(fixed)).unwrap();
        assert!(grid.is_passage(start));
        assert_eq!(end, fixed);
    }

    #[test]
    fn same_seed_same_positions() {
        let grid = MazeGenerator::new(Some(0)).generate_maze(8, 8).unwrap();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| pick(&grid, None, None, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(11), picks(11));
    }

    #[test]
    fn single_passage_gives_same_start_and_end() {
        let mut grid = Grid::filled(3, 3, Cell::Wall);
        grid.set(Position::new(1, 1), Cell::Passage).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            pick(&grid, None, None, &mut rng),
            Ok((Position::new(1, 1), Position::new(1, 1)))
        );
    }

    #[test]
    fn no_passages_to_draw_from() {
        let grid = Grid::filled(3, 3, Cell::Wall);
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(
            pick(&grid, Some(Position::new(1, 1)), None, &mut rng),
            Err(MazeError::NoPassages)
        );
    }
}
