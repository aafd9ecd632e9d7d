use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use rusty_micromouse::{
    codec, format_cells, random_maze, render_maze, render_maze_with_path, Maze, MazeError, Result,
};

/// Micromouse maze tools
#[derive(Parser)]
#[command(name = "rusty-micromouse")]
#[command(about = "Build, inspect and persist micromouse mazes")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Small demonstration on a 3x3 maze
    Demo,
    /// Generate a random maze and save it in the binary format
    Generate {
        #[arg(long, default_value_t = 16)]
        width: usize,
        #[arg(long, default_value_t = 16)]
        height: usize,
        /// Probability for each inner passage to be walled
        #[arg(long, default_value_t = 0.35)]
        wall_density: f64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print a saved maze as ASCII
    Show { file: PathBuf },
    /// Print a JSON summary of a saved maze
    Info { file: PathBuf },
    /// Smooth a path through a saved maze, e.g. --path "0,0 1,0 1,1"
    Smooth {
        file: PathBuf,
        #[arg(long)]
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(cli.command) {
        error!("❌ Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Demo => demo(),
        Command::Generate {
            width,
            height,
            wall_density,
            seed,
            output,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let maze = random_maze(width, height, wall_density, &mut rng)?;
            codec::save(&maze, &output)?;
            info!("saved {width}x{height} maze to {}", output.display());
            print!("{}", render_maze(&maze));
            Ok(())
        }
        Command::Show { file } => {
            let maze = codec::load(&file)?;
            print!("{}", render_maze(&maze));
            Ok(())
        }
        Command::Info { file } => {
            let maze = codec::load(&file)?;
            let summary = json!({
                "width": maze.width(),
                "height": maze.height(),
                "walls": count_inner_walls(&maze),
                "bytes": codec::to_bytes(&maze).len()
            });
            println!("{summary}");
            Ok(())
        }
        Command::Smooth { file, path } => {
            let maze = codec::load(&file)?;
            let path = parse_path(&path)?;
            let smoothed = maze.optimize(&path)?;
            print!("{}", render_maze_with_path(&maze, &path));
            println!("{}", smoothed.to_json());
            Ok(())
        }
    }
}

/// Même scénario que la démo d'origine : voisins de (0,0) avant/après `clear`.
fn demo() -> Result<()> {
    let mut maze = Maze::new(3, 3)?;

    maze.clear_walls();
    println!("{}", format_cells(&maze.neighbors(0, 0)?));

    maze.clear();
    println!("{}", format_cells(&maze.neighbors(0, 0)?));

    println!("{}", format_cells(&maze.adjacent_cells(0, 0)?));
    Ok(())
}

/// Murs intérieurs, chacun compté une fois.
fn count_inner_walls(maze: &Maze) -> usize {
    maze.iter()
        .map(|cell| {
            let (row, column) = cell.position();
            [(row + 1, column), (row, column + 1)]
                .into_iter()
                .filter(|&other| !maze.out_of_bounds(other.0, other.1))
                .filter(|&other| maze.wall_between((row, column), other))
                .count()
        })
        .sum()
}

/// "0,0 1,0 1,1" -> [(0,0), (1,0), (1,1)]
fn parse_path(text: &str) -> Result<Vec<(i32, i32)>> {
    text.split_whitespace().map(parse_position).collect()
}

fn parse_position(pair: &str) -> Result<(i32, i32)> {
    let invalid = || MazeError::InvalidPath(pair.to_string());
    let (row, column) = pair.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
    let column = column.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok((row, column))
}
