#![deny(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Result, bail};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use infected_life::{Game, GameConfig, Grid, parse_seed};
use log::info;
use pixels_main_support::{AnimationSettings, animate};
use std::time::Duration;
use world_grid::Random;

/// Animates the Game of Life followed by the Infection rules in a window.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The width of the world
    #[arg(long, default_value_t = 80)]
    width: u32,

    /// The height of the world
    #[arg(long, default_value_t = 60)]
    height: u32,

    /// The number of generations after which the infection stage will start
    #[arg(long, default_value_t = 50)]
    infect_after: u32,

    /// The maximum number of generations, including all phases of the game
    #[arg(long, default_value_t = 100)]
    max_generations: u32,

    /// The initial state of the world; random life when omitted
    #[arg(long)]
    seed: Option<String>,

    /// Chance of each cell starting alive when the seed is random
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 400)]
    time_step_millis: u64,

    /// Screen pixels per cell
    #[arg(long, default_value_t = 8)]
    cell_pixels: u32,
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

    fn settings(&self) -> AnimationSettings {
        AnimationSettings {
            title: "Infected Life",
            time_step: Duration::from_millis(self.time_step_millis),
            cell_pixel_width: self.cell_pixels.max(1),
        }
    }

    fn new_game(&self, rand: &mut Random) -> Result<Game> {
        let config = self.config();
        config.validate()?;
        let grid = match &self.seed {
            Some(seed) => parse_seed(config.width, config.height, seed)?,
            None => {
                if !(0.0..=1.0).contains(&self.density) {
                    bail!("density must be between 0 and 1, got {}", self.density);
                }
                random_grid(config.width, config.height, self.density, rand)
            }
        };
        let mut game = Game::from_config(&config);
        game.seed(grid);
        Ok(game)
    }
}

fn random_grid(width: u32, height: u32, density: f64, rand: &mut Random) -> Grid {
    let mut grid = Grid::new(width, height);
    for loc in grid.locs() {
        if rand.next_bool(density) {
            grid.set(loc, true);
        }
    }
    grid
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let game = args
        .new_game(&mut Random::new())
        .unwrap_or_else(|err| Args::command().error(ErrorKind::ValueValidation, err).exit());
    info!("animating {:?}", args.config());
    animate(game, args.settings())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_is_used() {
        let args = Args::try_parse_from([
            "infected-life-pixels",
            "--width",
            "3",
            "--height",
            "3",
            "--seed",
            "0 0 0 0 1 0 0 0 0",
        ])
        .unwrap();
        let game = args.new_game(&mut Random::from_seed(1)).unwrap();
        assert_eq!(game.grid().render(), "000010000");
        assert_eq!(game.max_generations(), 100);
    }

    #[test]
    fn random_seed_respects_density_extremes() {
        let mut rand = Random::from_seed(3);
        assert!(random_grid(4, 4, 1.0, &mut rand).cells_iter().all(|&alive| alive));
        assert!(random_grid(4, 4, 0.0, &mut rand).cells_iter().all(|&alive| !alive));
    }

    #[test]
    fn out_of_range_density_is_rejected() {
        let args = Args::try_parse_from(["infected-life-pixels", "--density", "1.5"]).unwrap();
        assert!(args.new_game(&mut Random::from_seed(1)).is_err());
    }

    #[test]
    fn zero_generations_are_rejected() {
        let args =
            Args::try_parse_from(["infected-life-pixels", "--max-generations", "0"]).unwrap();
        let err = args.new_game(&mut Random::from_seed(1)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<infected_life::Error>(),
            Some(&infected_life::Error::InvalidConfig {
                name: "max-generations",
                value: 0
            })
        );
    }

    #[test]
    fn cell_pixels_never_collapse_to_zero() {
        let args = Args::try_parse_from(["infected-life-pixels", "--cell-pixels", "0"]).unwrap();
        assert_eq!(args.settings().cell_pixel_width, 1);
    }
}
