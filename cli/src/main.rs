use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use parlor_cli::{Console, Game, Minesweeper};
use parlor_core::{CellCount, Coord, GameConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Console minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Rows and columns of the square board
    #[arg(short, long, default_value_t = 8)]
    size: Coord,

    /// Number of mines to place
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::square(args.size, args.mines);
    let mut game = match args.seed {
        Some(seed) => Minesweeper::seeded(config, seed),
        None => Minesweeper::new(config),
    }
    .context("invalid board configuration")?;
    log::debug!("starting {} with {:?}", game.name(), game.config());

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut console = Console::new(&mut input, &mut output);

    match game.play(&mut console)? {
        Some(score) => writeln!(console, "Score: {score}")?,
        None => writeln!(console, "No score (quit)")?,
    }
    Ok(())
}
