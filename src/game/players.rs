use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::board::Board;
use crate::dice::Die;

pub const STARTING_MONEY: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Active,
    Suspended(u32),
    Bankrupt,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerStatus::Active => write!(f, "in play"),
            PlayerStatus::Suspended(rounds) => write!(f, "*** waiting: {rounds} ***"),
            PlayerStatus::Bankrupt => write!(f, "*** bankrupt ***"),
        }
    }
}

/// What happened during a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Bankrupt,
    Waited { remaining: u32 },
    Moved { rolls: SmallVec<[u32; 2]>, from: u64, to: u64 },
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    name: String,
    money: u32,
    position: u64,
    suspended_rounds: u32,
    bankrupt: bool,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, money: u32) -> Self {
        Self {
            name: name.into(),
            money,
            position: 0,
            suspended_rounds: 0,
            bankrupt: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    /// Absolute number of fields walked since the start of the game.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn suspended_rounds(&self) -> u32 {
        self.suspended_rounds
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended_rounds > 0
    }

    pub fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    pub fn status(&self) -> PlayerStatus {
        if self.bankrupt {
            PlayerStatus::Bankrupt
        } else if self.suspended_rounds > 0 {
            PlayerStatus::Suspended(self.suspended_rounds)
        } else {
            PlayerStatus::Active
        }
    }

    pub fn earn(&mut self, amount: u32) {
        if self.bankrupt {
            return;
        }
        self.money = self.money.saturating_add(amount);
    }

    /// Charges `amount` and returns what was actually paid. A player who cannot cover
    /// the charge hands over everything and goes bankrupt.
    pub fn pay(&mut self, amount: u32) -> u32 {
        if self.money >= amount {
            self.money -= amount;
            return amount;
        }
        let paid = self.money;
        self.money = 0;
        self.bankrupt = true;
        log::info!("{} went bankrupt (owed {amount}, had {paid})", self.name);
        paid
    }

    pub fn suspend(&mut self, rounds: u32) {
        if self.bankrupt {
            return;
        }
        self.suspended_rounds = rounds;
    }

    /// Plays one turn: a bankrupt player does nothing, a suspended one waits a round,
    /// anyone else rolls every die and walks the board.
    pub fn take_turn(&mut self, board: &mut Board, dice: &[Rc<dyn Die>]) -> TurnOutcome {
        if self.bankrupt {
            return TurnOutcome::Bankrupt;
        }
        if self.suspended_rounds > 0 {
            self.suspended_rounds -= 1;
            return TurnOutcome::Waited {
                remaining: self.suspended_rounds,
            };
        }

        let rolls: SmallVec<[u32; 2]> = dice.iter().map(|die| die.roll()).collect();
        let steps = total_steps(&rolls);
        let from = self.position;
        if steps == 0 {
            log::warn!("{} rolled a total of zero, staying at {from}", self.name);
            return TurnOutcome::Moved { rolls, from, to: from };
        }

        for step in board.resolve_path(from, steps) {
            self.position = step.position;
            let field = board.field_mut(step.index);
            if step.is_final {
                field.on_land(self);
            } else {
                field.on_pass(self);
            }
            // A bankrupt player stops on the field that ruined them.
            if self.bankrupt {
                break;
            }
        }

        TurnOutcome::Moved {
            rolls,
            from,
            to: self.position,
        }
    }
}

fn total_steps(rolls: &[u32]) -> u32 {
    rolls
        .iter()
        .fold(0u32, |total, &face| total.saturating_add(face))
}
