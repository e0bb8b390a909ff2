pub mod config;
pub mod game;
pub mod players;

pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS, REQUIRED_DICE};
pub use game::{Game, GameError, GameSummary, Standing, StopCondition};
pub use players::{PlayerState, PlayerStatus, STARTING_MONEY, TurnOutcome};
