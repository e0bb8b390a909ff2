pub mod players;
pub mod stats;

pub use players::{DEFAULT_ROSTER, RosterError, default_roster, parse_roster};
pub use stats::GameStats;
