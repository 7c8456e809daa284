use crate::error::{Error, Result};
use world_grid::{Grid, Loc};

/// Dimensions and phase lengths of a game. Every field must be at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub infect_after: u32,
    pub max_generations: u32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("infect-after", self.infect_after),
            ("max-generations", self.max_generations),
        ];
        match fields.into_iter().find(|&(_, value)| value < 1) {
            Some((name, value)) => Err(Error::InvalidConfig { name, value }),
            None => Ok(()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            infect_after: 1,
            max_generations: 1,
        }
    }
}

/// Decodes a space-separated seed into a grid. A `1` token is a live cell and any
/// other token, including the empty one between two adjacent spaces, a dead one; token
/// `i` lands at column `i % width`, row `i / width`. Cells past the last token stay dead.
pub fn parse_seed(width: u32, height: u32, seed: &str) -> Result<Grid> {
    if seed.trim().is_empty() {
        return Err(Error::MissingSeed);
    }
    let tokens: Vec<&str> = seed.split(' ').collect();

    let mut grid = Grid::new(width, height);
    if tokens.len() > grid.num_cells() {
        return Err(Error::SeedTooLong {
            tokens: tokens.len(),
            cells: grid.num_cells(),
        });
    }

    for (i, token) in tokens.into_iter().enumerate() {
        let loc = Loc::new((i % width as usize) as i32, (i / width as usize) as i32);
        grid.set(loc, token == "1");
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_fields_are_rejected_by_name() {
        let base = GameConfig::default();
        let cases = [
            (GameConfig { width: 0, ..base }, "width"),
            (GameConfig { height: 0, ..base }, "height"),
            (GameConfig { infect_after: 0, ..base }, "infect-after"),
            (GameConfig { max_generations: 0, ..base }, "max-generations"),
        ];
        for (config, expected) in cases {
            assert_eq!(
                config.validate(),
                Err(Error::InvalidConfig {
                    name: expected,
                    value: 0
                })
            );
        }
    }

    #[test]
    fn seed_tokens_fill_row_major() {
        let grid = parse_seed(3, 2, "1 0 0 0 1 1").unwrap();
        assert!(grid.alive(Loc::new(0, 0)));
        assert!(!grid.alive(Loc::new(1, 0)));
        assert!(grid.alive(Loc::new(1, 1)));
        assert!(grid.alive(Loc::new(2, 1)));
        assert_eq!(grid.render(), "100011");
    }

    #[test]
    fn non_one_tokens_are_dead() {
        let grid = parse_seed(2, 2, "x 1 true 11").unwrap();
        assert_eq!(grid.render(), "0100");
    }

    #[test]
    fn empty_token_between_spaces_is_a_dead_cell() {
        let grid = parse_seed(3, 1, "1  1").unwrap();
        assert_eq!(grid.render(), "101");
    }

    #[test]
    fn leading_space_shifts_cells_right() {
        let grid = parse_seed(3, 1, " 1 1").unwrap();
        assert_eq!(grid.render(), "011");
    }

    #[test]
    fn short_seed_leaves_remaining_cells_dead() {
        let grid = parse_seed(3, 3, "1 1").unwrap();
        assert_eq!(grid.render(), "110000000");
    }

    #[test]
    fn empty_seed_is_missing() {
        assert_eq!(parse_seed(3, 3, ""), Err(Error::MissingSeed));
        assert_eq!(parse_seed(3, 3, "   "), Err(Error::MissingSeed));
    }

    #[test]
    fn long_seed_is_rejected() {
        assert_eq!(
            parse_seed(2, 1, "1 0 1"),
            Err(Error::SeedTooLong {
                tokens: 3,
                cells: 2
            })
        );
    }
}
