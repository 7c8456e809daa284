#![deny(clippy::all)]
#![forbid(unsafe_code)]

use rand::SeedableRng;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::fmt;
use std::ops::{Index, IndexMut};

pub trait World {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn num_cells(&self) -> usize;
    fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &bool> + Clone;
    fn update(&mut self);
    fn is_over(&self) -> bool {
        false
    }
}

/// A fixed-size field of live/dead cells, stored row-major.
///
/// Reads outside the grid are legal and always see a dead cell, so the edge of the
/// grid behaves like a wall of dead cells rather than wrapping around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        assert!(i32::try_from(width).is_ok() && i32::try_from(height).is_ok());
        Self {
            cells: vec![false; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &bool> + Clone {
        self.cells.iter()
    }

    /// Every location in the grid, row by row.
    pub fn locs(&self) -> impl Iterator<Item = Loc> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Loc::new(x, y)))
    }

    pub fn set(&mut self, loc: Loc, alive: bool) {
        self[loc] = alive;
    }

    pub fn alive(&self, loc: Loc) -> bool {
        loc.grid_index(self.width, self.height)
            .is_some_and(|index| self.cells[index])
    }

    pub fn diagonal_live_neighbours(&self, loc: Loc) -> u32 {
        Neighborhood::new(self, loc).count_live(&Neighborhood::DIAGONAL)
    }

    pub fn orthogonal_live_neighbours(&self, loc: Loc) -> u32 {
        Neighborhood::new(self, loc).count_live(&Neighborhood::ORTHOGONAL)
    }

    pub fn live_neighbours(&self, loc: Loc) -> u32 {
        self.diagonal_live_neighbours(loc) + self.orthogonal_live_neighbours(loc)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &alive in &self.cells {
            f.write_str(if alive { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Index<Loc> for Grid {
    type Output = bool;

    fn index(&self, loc: Loc) -> &Self::Output {
        loc.grid_index(self.width, self.height)
            .map(|index| &self.cells[index])
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.x, loc.y))
    }
}

impl IndexMut<Loc> for Grid {
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        loc.grid_index(self.width, self.height)
            .map(|index| &mut self.cells[index])
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.x, loc.y))
    }
}

/// The eight cells around a center cell, split into the diagonal and orthogonal rings.
struct Neighborhood<'a> {
    grid: &'a Grid,
    center: Loc,
}

impl<'a> Neighborhood<'a> {
    const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];
    const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    fn new(grid: &'a Grid, center: Loc) -> Self {
        Self { grid, center }
    }

    fn count_live(&self, offsets: &[(i32, i32)]) -> u32 {
        let mut result = 0;
        for &offset in offsets {
            self.for_cell(offset, &mut |alive| {
                if alive {
                    result += 1;
                }
            });
        }
        result
    }

    fn for_cell<F>(&self, (dx, dy): (i32, i32), f: &mut F)
    where
        F: FnMut(bool),
    {
        f(self.grid.alive(self.center.offset(dx, dy)));
    }
}

/// A cell position: `x` is the column, `y` the row. Either may be negative or past the
/// far edge when probing neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub x: i32,
    pub y: i32,
}

impl Loc {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    pub fn grid_index(&self, width: u32, height: u32) -> Option<usize> {
        let x = u32::try_from(self.x).ok()?;
        let y = u32::try_from(self.y).ok()?;
        if y < height && x < width {
            Some(y as usize * width as usize + x as usize)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
