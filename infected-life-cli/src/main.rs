#![deny(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use infected_life::{Game, GameConfig, parse_seed};
use log::info;
use std::io::{self, Write};

/// Runs the Game of Life, then the Infection rules, printing every generation as one
/// line of 1s and 0s.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The width of the world
    #[arg(long, default_value_t = 3)]
    width: u32,

    /// The height of the world
    #[arg(long, default_value_t = 3)]
    height: u32,

    /// The number of generations after which the infection stage will start
    #[arg(long, default_value_t = 1)]
    infect_after: u32,

    /// The maximum number of generations, including all phases of the game
    #[arg(long, default_value_t = 1)]
    max_generations: u32,

    /// The initial state of the world: space-separated cells, 1 for alive
    #[arg(long, default_value = "")]
    seed: String,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            infect_after: self.infect_after,
            max_generations: self.max_generations,
        }
    }

    fn new_game(&self) -> infected_life::Result<Game> {
        let config = self.config();
        config.validate()?;
        let grid = parse_seed(config.width, config.height, &self.seed)?;
        let mut game = Game::from_config(&config);
        game.seed(grid);
        Ok(game)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut game = args.new_game().unwrap_or_else(|err| {
        let kind = match err {
            infected_life::Error::MissingSeed => ErrorKind::MissingRequiredArgument,
            _ => ErrorKind::ValueValidation,
        };
        Args::command().error(kind, err).exit()
    });
    info!("running {:?}", args.config());
    run(&mut game, &mut io::stdout().lock())
}

fn run(game: &mut Game, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", game.grid()).context("printing seed")?;
    while !game.is_over() {
        game.step()?;
        writeln!(out, "{}", game.grid())
            .with_context(|| format!("printing generation {}", game.generation()))?;
    }
    Ok(())
}
