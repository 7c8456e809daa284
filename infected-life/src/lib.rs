#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life followed by an "Infection" phase.
//!
//! A [`Game`] runs the classic Life rules for the first `infect_after` generations
//! (inclusive), switches to the [`Rule::Infection`] rules after that, and is over once
//! `max_generations` steps have been taken.

mod config;
mod error;

pub use config::{GameConfig, parse_seed};
pub use error::{Error, Result};
pub use world_grid::{Grid, Loc};

use log::{debug, info, warn};
use world_grid::World;

/// How the next state of a single cell is derived from the current grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Birth on 3 live neighbours, survival on 2 or 3.
    Life,
    /// A dead cell with exactly one live neighbour is infected; a live cell survives
    /// only while it has at least one orthogonal live neighbour.
    Infection,
}

impl Rule {
    pub fn apply(self, grid: &Grid, loc: Loc) -> bool {
        match self {
            Rule::Life => {
                let live_neighbours = grid.live_neighbours(loc);
                live_neighbours == 3 || (live_neighbours == 2 && grid.alive(loc))
            }
            Rule::Infection => {
                let alive = grid.alive(loc);
                let orthogonal = grid.orthogonal_live_neighbours(loc);
                let diagonal = grid.diagonal_live_neighbours(loc);
                if !alive && orthogonal + diagonal == 1 {
                    true
                } else {
                    alive && orthogonal > 0
                }
            }
        }
    }

    /// Evaluates every cell of `grid` into a fresh grid of the same size.
    pub fn next_generation(self, grid: &Grid) -> Grid {
        let mut next = Grid::new(grid.width(), grid.height());
        for loc in grid.locs() {
            next.set(loc, self.apply(grid, loc));
        }
        next
    }
}

#[derive(Debug)]
pub struct Game {
    grid: Grid,
    infect_after: u32,
    max_generations: u32,
    generation: u32,
}

impl Game {
    pub fn new(width: u32, height: u32, infect_after: u32, max_generations: u32) -> Self {
        Self {
            grid: Grid::new(width, height),
            infect_after,
            max_generations,
            generation: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.width,
            config.height,
            config.infect_after,
            config.max_generations,
        )
    }

    /// Replaces the whole grid. The new grid may have any dimensions.
    pub fn seed(&mut self, grid: Grid) {
        self.grid = grid;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn max_generations(&self) -> u32 {
        self.max_generations
    }

    pub fn is_over(&self) -> bool {
        self.generation >= self.max_generations
    }

    pub fn rule(&self) -> Rule {
        if self.generation <= self.infect_after {
            Rule::Life
        } else {
            Rule::Infection
        }
    }

    /// Advances one generation. Fails without touching the grid once the game is over.
    pub fn step(&mut self) -> Result<()> {
        if self.is_over() {
            warn!("step requested at generation {} after the game ended", self.generation);
            return Err(Error::GameOver {
                generation: self.generation,
            });
        }

        let rule = self.rule();
        if rule == Rule::Infection && self.generation == self.infect_after + 1 {
            info!("infection phase starts at generation {}", self.generation);
        }
        debug!("generation {} using {:?} rules", self.generation, rule);

        self.grid = rule.next_generation(&self.grid);
        self.generation += 1;
        Ok(())
    }
}

impl World for Game {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn num_cells(&self) -> usize {
        self.grid.num_cells()
    }

    fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &bool> + Clone {
        self.grid.cells_iter()
    }

    fn update(&mut self) {
        if self.step().is_ok() {
            debug!("showing generation {}", self.generation);
        }
    }

    fn is_over(&self) -> bool {
        Game::is_over(self)
    }
}
