//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::warn;
use maze_astar::{maze_generator::MazeGenerator, solver, Grid, Position};

/// The shortest way through a randomly generated perfect maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in chambers
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Maze width in chambers
    #[arg(long, default_value_t = 20)]
    width: usize,

    /// Random seed for the maze and for random start and end
    #[arg(long)]
    seed: Option<u64>,

    /// Start position as `ROW,COL` in grid coordinates, random if omitted
    #[arg(long)]
    start: Option<Position>,

    /// End position as `ROW,COL` in grid coordinates, random if omitted
    #[arg(long)]
    end: Option<Position>,

    /// Print the maze with the path drawn over it
    #[arg(short, long)]
    show: bool,

    /// File, where to read the maze instead of generating one. Use `-` for stdin.
    file: Option<PathBuf>,
}

/// Read maze markers from file or stdin
fn read_grid(file: &Path) -> anyhow::Result<Grid> {
    let markers = if file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(file).with_context(|| format!("Cannot read {}", file.display()))?
    };
    Ok(Grid::parse_markers(markers.trim())?)
}

/// Generate or read a maze, solve it, print output
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = match &args.file {
        Some(file) => read_grid(file)?,
        None => gen.generate_maze(args.height, args.width)?,
    };

    let (start, end) = gen.pick_positions(&grid, args.start, args.end)?;
    println!("Start: {}", start);
    println!("End: {}", end);

    let solution = solver::solve(&grid, start, end)
        .with_context(|| format!("Cannot search from {} to {}", start, end))?;
    match solution.path() {
        Some(path) => println!("Path: {}", path.into_iter().join(" -> ")),
        None => warn!("{} is not reachable from {}", end, start),
    }
    solution.print_report();

    if args.show {
        println!("{}", grid.render_path(solution.path()));
    }
    Ok(())
}
