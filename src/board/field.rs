use std::fmt;

use crate::game::PlayerState;
use crate::types::MatchKind;

pub const SEASON_START_BONUS: u32 = 50;
pub const BOOKMAKER_CYCLE: u32 = 3;

/// Behaviour of a field, together with whatever state it accumulates over a game.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    SeasonStart {
        bonus: u32,
    },
    Reward {
        amount: u32,
    },
    PenaltyKick {
        amount: u32,
    },
    YellowCard {
        rounds: u32,
    },
    Bookmaker {
        wager: u32,
        visits: u32,
    },
    Match {
        opponent: String,
        fee: u32,
        coefficient: f64,
        pool: u32,
    },
    DayOff,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn season_start() -> Self {
        Self::new(
            "Season start",
            FieldKind::SeasonStart {
                bonus: SEASON_START_BONUS,
            },
        )
    }

    pub fn goal(amount: u32) -> Self {
        Self::new("Goal", FieldKind::Reward { amount })
    }

    pub fn penalty_kick(amount: u32) -> Self {
        Self::new("Penalty kick", FieldKind::PenaltyKick { amount })
    }

    pub fn yellow_card(rounds: u32) -> Self {
        Self::new("Yellow card", FieldKind::YellowCard { rounds })
    }

    pub fn bookmaker(wager: u32) -> Self {
        Self::new("Bookmaker", FieldKind::Bookmaker { wager, visits: 0 })
    }

    pub fn day_off() -> Self {
        Self::new("Day off", FieldKind::DayOff)
    }

    pub fn match_against(opponent: &str, fee: u32, kind: MatchKind) -> Self {
        Self::match_with_coefficient(opponent, fee, kind.coefficient())
    }

    pub fn match_with_coefficient(opponent: &str, fee: u32, coefficient: f64) -> Self {
        debug_assert!(coefficient >= 0.0, "match coefficient must not be negative");
        Self::new(
            format!("Match vs {opponent}"),
            FieldKind::Match {
                opponent: opponent.to_string(),
                fee,
                coefficient,
                pool: 0,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Fees collected so far. Zero for anything but a match.
    pub fn pool(&self) -> u32 {
        match &self.kind {
            FieldKind::Match { pool, .. } => *pool,
            _ => 0,
        }
    }

    /// Whether the next bookmaker visitor opens a new cycle of three.
    pub fn is_lucky_visit(&self) -> bool {
        matches!(self.kind, FieldKind::Bookmaker { visits: 0, .. })
    }

    /// The player's move ends on this field.
    pub fn on_land(&mut self, player: &mut PlayerState) {
        match &mut self.kind {
            FieldKind::SeasonStart { bonus } => player.earn(*bonus),
            FieldKind::Reward { amount } => player.earn(*amount),
            FieldKind::PenaltyKick { amount } => {
                player.pay(*amount);
            }
            FieldKind::YellowCard { rounds } => player.suspend(*rounds),
            FieldKind::Bookmaker { wager, visits } => {
                let lucky = *visits == 0;
                *visits = (*visits + 1) % BOOKMAKER_CYCLE;
                log::debug!("{} bets at the bookmaker (lucky: {lucky})", player.name());
                player.earn(*wager);
            }
            FieldKind::Match {
                coefficient, pool, ..
            } => {
                let payout = (f64::from(*pool) * *coefficient).floor() as u32;
                *pool = 0;
                if payout > 0 {
                    log::debug!("{} collects {payout} at {}", player.name(), self.name);
                }
                player.earn(payout);
            }
            FieldKind::DayOff => {}
        }
    }

    /// The player moves through this field without stopping.
    pub fn on_pass(&mut self, player: &mut PlayerState) {
        if matches!(self.kind, FieldKind::SeasonStart { .. }) {
            return self.on_land(player);
        }
        match &mut self.kind {
            FieldKind::Match { fee, pool, .. } => {
                let paid = player.pay(*fee);
                *pool = pool.saturating_add(paid);
            }
            FieldKind::SeasonStart { .. }
            | FieldKind::Reward { .. }
            | FieldKind::PenaltyKick { .. }
            | FieldKind::YellowCard { .. }
            | FieldKind::Bookmaker { .. }
            | FieldKind::DayOff => {}
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
