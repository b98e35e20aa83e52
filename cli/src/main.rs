//! `gridstar`: search an ASCII or randomly generated map and print the route.
//!
//! ```text
//! gridstar --map level.txt
//! gridstar --random 40x20 --density 0.3 --seed 7 --heuristic octile
//! gridstar --map level.txt --from 0,0 --to 12,4 --json --trace
//! ```

mod error;
mod map;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use gridstar_core::{Grid, Occupancy, Point};
use gridstar_paths::{
    DiagonalPolicy, HeapOpenSet, Heuristic, OpenSet, SearchConfig, SearchEngine, SearchEvent,
    SearchTrace, SortedOpenSet,
};
use log::{LevelFilter, debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::{CliError, CliResult};
use crate::map::{AsciiMap, render};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "gridstar")]
#[command(about = "A* pathfinding over tile grids")]
#[command(version)]
struct Args {
    /// ASCII map file: `.` free, `#` blocked, `S` start, `T` target
    #[arg(long, conflicts_with = "random", required_unless_present = "random")]
    map: Option<PathBuf>,

    /// Generate a random map of the given size instead of reading one
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    random: Option<(i32, i32)>,

    /// Fraction of blocked cells in a random map
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// Seed for random map generation
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell, overriding any `S` in the map
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    from: Option<Point>,

    /// Target cell, overriding any `T` in the map
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    to: Option<Point>,

    /// Stop once within this Euclidean distance of the target
    #[arg(long, default_value_t = 0.0)]
    radius: f64,

    /// Heuristic (overrides the config file)
    #[arg(long, value_enum)]
    heuristic: Option<HeuristicArg>,

    /// Allow diagonal moves past blocked corners
    #[arg(long)]
    corner_cutting: bool,

    /// JSON search configuration (costs, heuristic, diagonals)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the indexed binary heap open set
    #[arg(long)]
    heap: bool,

    /// Include the search event trace in JSON output
    #[arg(long)]
    trace: bool,

    /// Print a JSON report instead of the drawn map
    #[arg(long)]
    json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HeuristicArg {
    Squared,
    Octile,
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Squared => Heuristic::SquaredEuclidean,
            HeuristicArg::Octile => Heuristic::Octile,
        }
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let side = |v: &str| match v.trim().parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(n) => Err(format!("size must be positive, got {n}")),
        Err(e) => Err(format!("bad size {v:?}: {e}")),
    };
    Ok((side(w)?, side(h)?))
}

/// JSON output.
#[derive(Debug, Serialize)]
struct Report {
    found: bool,
    start: Point,
    target: Point,
    moves: Option<usize>,
    cost: Option<f64>,
    expanded: usize,
    path: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<SearchEvent>>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_logging(args.verbose);

    exit_code(run(&args))
}

/// 0 when a path was found, 2 when the target is unreachable, 1 on error.
fn exit_code(result: CliResult<bool>) -> ExitCode {
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn initialize_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> CliResult<bool> {
    let map = load_map(args)?;
    let start = args
        .from
        .or(map.start)
        .ok_or(CliError::MissingEndpoint("start", "from"))?;
    let target = args
        .to
        .or(map.target)
        .ok_or(CliError::MissingEndpoint("target", "to"))?;
    let config = search_config(args)?;
    info!(
        "{}x{} map, {} blocked, {start} -> {target}",
        map.width,
        map.height,
        map.occupancy.blocked_len()
    );

    let grid = map.into_grid()?;
    let report = if args.heap {
        search::<_, HeapOpenSet>(&grid, config, start, target, args)?
    } else {
        search::<_, SortedOpenSet>(&grid, config, start, target, args)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&grid, &report.path, start, target));
        match (report.moves, report.cost) {
            (Some(moves), Some(cost)) => {
                println!("path: {moves} moves, cost {cost:.1}, {} expanded", report.expanded)
            }
            _ => println!("no path, {} expanded", report.expanded),
        }
    }
    Ok(report.found)
}

fn load_map(args: &Args) -> CliResult<AsciiMap> {
    match (args.random, &args.map) {
        (Some((w, h)), _) => {
            let seed = args.seed.unwrap_or_else(rand::random);
            debug!("random map seed {seed}");
            let mut rng = StdRng::seed_from_u64(seed);
            Ok(AsciiMap::random(w, h, args.density, &mut rng)?)
        }
        (None, Some(path)) => {
            let text = read(path)?;
            Ok(AsciiMap::parse(&text)?)
        }
        (None, None) => Err(CliError::NoMap),
    }
}

fn read(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn search_config(args: &Args) -> CliResult<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = read(path)?;
            serde_json::from_str(&text).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => SearchConfig::default(),
    };
    if let Some(h) = args.heuristic {
        config = config.with_heuristic(h.into());
    }
    if args.corner_cutting {
        config = config.with_diagonals(DiagonalPolicy::AllowCornerCutting);
    }
    Ok(config)
}

fn search<O: Occupancy, S: OpenSet + Default>(
    grid: &Grid<O>,
    config: SearchConfig,
    start: Point,
    target: Point,
    args: &Args,
) -> CliResult<Report> {
    let mut engine = SearchEngine::<O, S>::with_open_set(grid, config)?;
    let mut trace = SearchTrace::new();
    let outcome = if args.trace {
        engine.find_path_observed(start, target, args.radius, &mut trace)?
    } else {
        engine.find_path(start, target, args.radius)?
    };

    let cost = outcome
        .path()
        .and_then(|p| p.last())
        .and_then(|&end| engine.node_at(end))
        .map(|n| n.path_cost);
    Ok(Report {
        found: outcome.is_found(),
        start,
        target,
        moves: outcome.moves(),
        cost,
        expanded: engine.expanded(),
        trace: args.trace.then(|| trace.into_events()),
        path: outcome.into_path().unwrap_or_default(),
    })
}
