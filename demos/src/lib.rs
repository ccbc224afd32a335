//! Shared logic for the `gridpath` command-line demo: argument parsing,
//! board loading (from a layout file or randomly generated) and reporting.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use gridpath_board::{Board, Search};
use gridpath_core::{BoardConfig, Status};
use log::{LevelFilter, info};
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "gridpath")]
#[command(version, about = "Shortest 4-connected path on a grid")]
#[command(long_about = "Shortest 4-connected path on a grid.\n\n\
    Layouts use one line per row: `.` open, `#` wall, `S` start, `E` end.\n\n\
    Examples:\n  \
    gridpath maze.txt                  Solve a layout file\n  \
    gridpath --random 0.3 --seed 7     Solve a random 18x10 board")]
pub struct Cli {
    /// Layout file to solve
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    pub layout: Option<PathBuf>,

    /// Generate a random board with this wall density (0.0 - 1.0)
    #[arg(long, value_name = "DENSITY")]
    pub random: Option<f64>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Columns for --random
    #[arg(long, default_value_t = BoardConfig::default().columns)]
    pub columns: usize,

    /// Rows for --random
    #[arg(long, default_value_t = BoardConfig::default().rows)]
    pub rows: usize,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level selected by `-v`.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Load or generate the board, search it, and print the outcome to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Search, Box<dyn Error>> {
    let mut board = match (&cli.layout, cli.random) {
        (Some(path), _) => {
            info!("loading layout {}", path.display());
            std::fs::read_to_string(path)?.parse::<Board>()?
        }
        (None, Some(density)) => {
            let config = BoardConfig::new(cli.columns, cli.rows);
            match cli.seed {
                Some(seed) => {
                    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
                    random_board(config, density, &mut rng)?
                }
                None => random_board(config, density, &mut rand::rng())?,
            }
        }
        (None, None) => return Err("no layout given".into()),
    };

    let search = board.find_path()?;
    if cli.json {
        writeln!(out, "{}", serde_json::to_string(&search)?)?;
    } else {
        if cli.random.is_some() {
            writeln!(out, "{}\n", board.layout())?;
        }
        report(&board, &search, out)?;
    }
    Ok(search)
}

/// Build a board with random walls, a random start and a random end.
///
/// Each cell other than the endpoints becomes a wall with probability
/// `density`. Boards with a single cell have no end.
pub fn random_board(
    config: BoardConfig,
    density: f64,
    rng: &mut impl Rng,
) -> Result<Board, Box<dyn Error>> {
    if !(0.0..=1.0).contains(&density) {
        return Err(format!("wall density {density} is not between 0 and 1").into());
    }
    let mut board = Board::new(config)?;
    let len = board.dims().len();

    board.arm_start();
    board.click(rng.random_range(0..len))?;
    if len > 1 {
        let end = loop {
            let i = rng.random_range(0..len);
            if board.status(i)? == Status::Open {
                break i;
            }
        };
        board.arm_end();
        board.click(end)?;
    }

    for i in 0..len {
        if board.status(i)? == Status::Open && rng.random_bool(density) {
            board.click(i)?;
        }
    }
    Ok(board)
}

/// Write a human-readable report of `search` on `board`.
pub fn report(board: &Board, search: &Search, out: &mut impl Write) -> std::io::Result<()> {
    let dims = board.dims();
    match search {
        Search::Skipped => writeln!(out, "layout needs both a start (S) and an end (E)"),
        Search::NoPath => writeln!(out, "no path"),
        Search::Found(path) => {
            writeln!(out, "path: {} steps", path.len())?;
            for &i in path {
                writeln!(out, "  {i:>5} {}", dims.point(i))?;
            }
            Ok(())
        }
    }
}
