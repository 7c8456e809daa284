use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{name} must be at least 1, got {value}")]
    InvalidConfig { name: &'static str, value: u32 },

    #[error("seed must be provided")]
    MissingSeed,

    #[error("seed has {tokens} cells but the grid only holds {cells}")]
    SeedTooLong { tokens: usize, cells: usize },

    #[error("game is already over at generation {generation}")]
    GameOver { generation: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
