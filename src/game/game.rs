use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::board::Board;
use crate::dice::Die;
use crate::game::config::{GameConfig, REQUIRED_DICE};
use crate::game::players::{PlayerState, PlayerStatus, TurnOutcome};
use crate::scoreboard::{NullScoreBoard, ScoreBoard};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("too many dice: {count} registered, exactly {required} required")]
    TooManyDice { count: usize, required: usize },
    #[error("too few dice: {count} registered, exactly {required} required")]
    TooFewDice { count: usize, required: usize },
    #[error("too many players: {count} registered, at most {max} allowed")]
    TooManyPlayers { count: usize, max: usize },
    #[error("too few players: {count} registered, at least {min} required")]
    TooFewPlayers { count: usize, min: usize },
}

impl GameError {
    pub fn is_dice_count(&self) -> bool {
        matches!(
            self,
            GameError::TooManyDice { .. } | GameError::TooFewDice { .. }
        )
    }

    pub fn is_player_count(&self) -> bool {
        matches!(
            self,
            GameError::TooManyPlayers { .. } | GameError::TooFewPlayers { .. }
        )
    }
}

/// Decides, before each round, whether the game is over.
#[derive(Default)]
pub enum StopCondition {
    #[default]
    Never,
    LastPlayerStanding,
    Custom(Box<dyn Fn(&[PlayerState]) -> bool>),
}

impl StopCondition {
    pub fn custom(predicate: impl Fn(&[PlayerState]) -> bool + 'static) -> Self {
        StopCondition::Custom(Box::new(predicate))
    }

    pub fn should_stop(&self, players: &[PlayerState]) -> bool {
        match self {
            StopCondition::Never => false,
            StopCondition::LastPlayerStanding => {
                players.iter().filter(|p| !p.is_bankrupt()).count() <= 1
            }
            StopCondition::Custom(predicate) => predicate(players),
        }
    }
}

impl fmt::Debug for StopCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopCondition::Never => write!(f, "Never"),
            StopCondition::LastPlayerStanding => write!(f, "LastPlayerStanding"),
            StopCondition::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub money: u32,
    pub position: u64,
    pub status: PlayerStatus,
}

#[derive(Debug, Clone)]
pub struct GameSummary {
    pub id: Uuid,
    pub rounds_played: u32,
    pub standings: Vec<Standing>,
}

impl GameSummary {
    pub fn survivors(&self) -> impl Iterator<Item = &Standing> + '_ {
        self.standings
            .iter()
            .filter(|s| s.status != PlayerStatus::Bankrupt)
    }
}

/// One game session: the board, the players in turn order, the dice and the scoreboard.
pub struct Game {
    pub id: Uuid,
    config: GameConfig,
    board: Board,
    players: Vec<PlayerState>,
    dice: Vec<Rc<dyn Die>>,
    scoreboard: Rc<dyn ScoreBoard>,
    stop: StopCondition,
    round: u32,
    current_player: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            board: Board::from_layout(config.layout),
            config,
            players: Vec::new(),
            dice: Vec::new(),
            scoreboard: Rc::new(NullScoreBoard),
            stop: StopCondition::default(),
            round: 0,
            current_player: 0,
        }
    }

    /// Registers a die. `None` is ignored.
    pub fn add_die(&mut self, die: Option<Rc<dyn Die>>) {
        if let Some(die) = die {
            self.dice.push(die);
        }
    }

    pub fn add_player(&mut self, name: impl Into<String>) {
        self.players
            .push(PlayerState::new(name, self.config.starting_money));
    }

    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn set_scoreboard(&mut self, scoreboard: Rc<dyn ScoreBoard>) {
        self.scoreboard = scoreboard;
    }

    pub fn set_stop_condition(&mut self, stop: StopCondition) {
        self.stop = stop;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let dice = self.dice.len();
        if dice > REQUIRED_DICE {
            return Err(GameError::TooManyDice {
                count: dice,
                required: REQUIRED_DICE,
            });
        }
        if dice < REQUIRED_DICE {
            return Err(GameError::TooFewDice {
                count: dice,
                required: REQUIRED_DICE,
            });
        }

        let players = self.players.len();
        if players > self.config.max_players {
            return Err(GameError::TooManyPlayers {
                count: players,
                max: self.config.max_players,
            });
        }
        if players < self.config.min_players {
            return Err(GameError::TooFewPlayers {
                count: players,
                min: self.config.min_players,
            });
        }
        Ok(())
    }

    /// Plays at most `rounds` more rounds. Every player moves once per round in the
    /// order they were added. Round numbers continue across calls.
    pub fn play(&mut self, rounds: u32) -> Result<GameSummary, GameError> {
        self.validate()?;
        log::info!(
            "game {} starts: {} players, {} fields, up to {rounds} rounds",
            self.id,
            self.players.len(),
            self.board.len()
        );

        let mut rounds_played = 0;
        for _ in 0..rounds {
            if self.stop.should_stop(&self.players) {
                log::info!("game {} stopped after round {}", self.id, self.round);
                break;
            }
            self.round += 1;
            self.scoreboard.on_round(self.round);
            for idx in 0..self.players.len() {
                self.current_player = idx;
                self.play_turn(idx);
            }
            rounds_played += 1;
        }

        Ok(self.summary(rounds_played))
    }

    fn play_turn(&mut self, idx: usize) {
        let player = &mut self.players[idx];
        let outcome = player.take_turn(&mut self.board, &self.dice);
        if let TurnOutcome::Moved { rolls, from, to } = &outcome {
            log::debug!(
                "round {}: {} rolled {:?}, {from} -> {to}",
                self.round,
                player.name(),
                rolls.as_slice()
            );
        }

        let field = self.board.field_at(player.position());
        self.scoreboard.on_turn(
            player.name(),
            &player.status().to_string(),
            field.name(),
            player.money(),
        );
    }

    fn summary(&self, rounds_played: u32) -> GameSummary {
        GameSummary {
            id: self.id,
            rounds_played,
            standings: self
                .players
                .iter()
                .map(|p| Standing {
                    name: p.name().to_string(),
                    money: p.money(),
                    position: p.position(),
                    status: p.status(),
                })
                .collect(),
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("board", &self.board)
            .field("players", &self.players)
            .field("dice", &self.dice.len())
            .field("stop", &self.stop)
            .field("round", &self.round)
            .field("current_player", &self.current_player)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::LoadedDie;

    fn with_dice(game: &mut Game, count: usize) {
        for _ in 0..count {
            game.add_die(Some(Rc::new(LoadedDie::always(1))));
        }
    }

    #[test]
    fn none_die_is_ignored() {
        let mut game = Game::default();
        game.add_die(None);
        with_dice(&mut game, 2);
        game.add_die(None);
        game.add_player("A");
        game.add_player("B");
        assert!(game.validate().is_ok());
    }

    #[test]
    fn dice_are_checked_before_players() {
        let mut game = Game::default();
        with_dice(&mut game, 3);
        let err = game.validate().unwrap_err();
        assert_eq!(err, GameError::TooManyDice { count: 3, required: 2 });
        assert!(err.is_dice_count());
        assert!(!err.is_player_count());
    }

    #[test]
    fn player_range_comes_from_config() {
        let mut game = Game::new(GameConfig {
            max_players: 3,
            ..GameConfig::default()
        });
        with_dice(&mut game, 2);
        for name in ["A", "B", "C", "D"] {
            game.add_player(name);
        }
        let err = game.validate().unwrap_err();
        assert_eq!(err, GameError::TooManyPlayers { count: 4, max: 3 });
        assert!(err.is_player_count());
    }

    #[test]
    fn starting_money_comes_from_config() {
        let mut game = Game::new(GameConfig {
            starting_money: 250,
            ..GameConfig::default()
        });
        game.add_player("A");
        assert_eq!(game.players()[0].money(), 250);
    }

    #[test]
    fn default_stop_condition_never_stops() {
        let players = vec![PlayerState::new("A", 0)];
        let stop = StopCondition::default();
        assert!(matches!(stop, StopCondition::Never));
        assert!(!stop.should_stop(&players));
    }

    #[test]
    fn last_player_standing() {
        let mut players = vec![PlayerState::new("A", 10), PlayerState::new("B", 10)];
        assert!(!StopCondition::LastPlayerStanding.should_stop(&players));
        players[0].pay(20);
        assert!(StopCondition::LastPlayerStanding.should_stop(&players));
        assert!(!StopCondition::Never.should_stop(&players));
    }

    #[test]
    fn error_messages() {
        let err = GameError::TooFewPlayers { count: 1, min: 2 };
        assert_eq!(
            err.to_string(),
            "too few players: 1 registered, at least 2 required"
        );
    }
}
