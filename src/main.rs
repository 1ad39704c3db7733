//! Solves a maze and prints it before and after the path is drawn in.
//!
//! # Usage
//!
//! ```bash
//! # Solve the built-in sample maze
//! maze_astar
//!
//! # Solve a maze file, starting from row 2, column 3
//! maze_astar --maze maze.txt --start 2,3
//! ```

use std::env;
use std::path::{Path, PathBuf};

use log::info;
use maze_astar::{format_path, mark_path, Config, Maze, MazeError, Pathfinder, Result};

const SEPARATOR_WIDTH: usize = 100;

#[derive(Debug, Default)]
struct Args {
    maze_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    start: Option<[i32; 2]>,
    sentinel: Option<i32>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --maze <FILE>       Maze file: whitespace separated integers, one row per line");
    eprintln!("  --config <FILE>     TOML configuration file");
    eprintln!("  --start <ROW,COL>   Start cell (default: 0,0)");
    eprintln!("  --sentinel <N>      Cell value marking the exit (default: 1)");
    eprintln!("  --help              Show this help");
}

fn parse_start(value: &str) -> std::result::Result<[i32; 2], String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", value))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid start {:?}: {}", value, e))
    };
    Ok([parse(row)?, parse(col)?])
}

fn parse_args(args: &[String]) -> std::result::Result<Option<Args>, String> {
    let mut result = Args::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", arg))
        };
        match arg.as_str() {
            "--maze" => result.maze_path = Some(PathBuf::from(value()?)),
            "--config" => result.config_path = Some(PathBuf::from(value()?)),
            "--start" => result.start = Some(parse_start(&value()?)?),
            "--sentinel" => {
                let v = value()?;
                result.sentinel = Some(
                    v.parse()
                        .map_err(|e| format!("invalid sentinel {:?}: {}", v, e))?,
                );
            }
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(Some(result))
}

fn load_maze(path: Option<&Path>) -> Result<Maze> {
    match path {
        Some(path) => {
            info!("Loading maze from {:?}", path);
            std::fs::read_to_string(path)?.parse()
        }
        None => {
            info!("Using the built-in sample maze");
            Ok(Maze::sample())
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config_path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };
    if let Some(start) = args.start {
        config.start = start;
    }
    if let Some(sentinel) = args.sentinel {
        config.target_sentinel = sentinel;
    }

    let maze = load_maze(args.maze_path.as_deref())?;
    let mut pathfinder = Pathfinder::new(maze);
    let solution = pathfinder.solve(&config)?;
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let path = solution.path.unwrap_or_default();

    if path.is_empty() {
        println!("No path found");
    } else {
        println!("{}", format_path(&path));
    }
    println!("{}", separator);
    print!("{}", mark_path(&pathfinder.maze, &[]).render(&config.symbols));
    println!("{}", separator);
    print!("{}", mark_path(&pathfinder.maze, &path).render(&config.symbols));
    info!("Search statistics: {:?}", pathfinder.stats());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("maze_astar");
    let parsed = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage(program);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(parsed) {
        match e {
            MazeError::TargetNotFound { .. } => eprintln!("Error: {} (is the exit marked?)", e),
            e => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
