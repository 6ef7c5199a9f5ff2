//! CLI for maze generation

use clap::Parser;
use maze_astar::maze_generator::MazeGenerator;

/// Perfect maze generator, output can be fed to `solve-maze`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in chambers
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Maze width in chambers
    #[arg(long, default_value_t = 20)]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print markers
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen.generate_maze(args.height, args.width)?;
    println!("{}", grid);
    Ok(())
}
