#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod board;
pub mod cli;
pub mod dice;
pub mod game;
pub mod scoreboard;
pub mod types;

pub use board::{Board, Field, FieldKind};
pub use dice::{Die, LoadedDie, RandomDie};
pub use game::{Game, GameConfig, GameError, PlayerState, StopCondition};
pub use scoreboard::{NullScoreBoard, RecordingScoreBoard, ScoreBoard, TextScoreBoard};
pub use types::{BoardLayout, MatchKind};
