use std::cell::RefCell;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Receives the progress of a game as it is played.
pub trait ScoreBoard {
    fn on_round(&self, round: u32);
    fn on_turn(&self, player: &str, status: &str, field: &str, money: u32);
}

/// Default scoreboard, ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScoreBoard;

impl ScoreBoard for NullScoreBoard {
    fn on_round(&self, _round: u32) {}

    fn on_turn(&self, _player: &str, _status: &str, _field: &str, _money: u32) {}
}

/// Writes the classic one-line-per-turn report.
#[derive(Debug)]
pub struct TextScoreBoard<W: Write> {
    out: RefCell<W>,
}

impl TextScoreBoard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextScoreBoard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, line: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out.borrow_mut(), "{line}") {
            log::warn!("scoreboard write failed: {err}");
        }
    }
}

impl<W: Write> ScoreBoard for TextScoreBoard<W> {
    fn on_round(&self, round: u32) {
        self.emit(format_args!("=== Round: {round}"));
    }

    fn on_turn(&self, player: &str, status: &str, field: &str, money: u32) {
        self.emit(format_args!("{player} [{status}] [{field}] {money}"));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreEvent {
    Round(u32),
    Turn {
        player: String,
        status: String,
        field: String,
        money: u32,
    },
}

/// Keeps every notification in order.
#[derive(Debug, Default)]
pub struct RecordingScoreBoard {
    events: RefCell<Vec<ScoreEvent>>,
}

impl RecordingScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ScoreEvent> {
        self.events.borrow().clone()
    }

    pub fn rounds(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ScoreEvent::Round(_)))
            .count()
    }

    pub fn turns(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ScoreEvent::Turn { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl ScoreBoard for RecordingScoreBoard {
    fn on_round(&self, round: u32) {
        self.events.borrow_mut().push(ScoreEvent::Round(round));
    }

    fn on_turn(&self, player: &str, status: &str, field: &str, money: u32) {
        self.events.borrow_mut().push(ScoreEvent::Turn {
            player: player.to_string(),
            status: status.to_string(),
            field: field.to_string(),
            money,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_scoreboard_formats_lines() {
        let board = TextScoreBoard::new(Vec::new());
        board.on_round(1);
        board.on_turn("Lewandowski", "in play", "Goal", 1120);
        let text = String::from_utf8(board.into_inner()).unwrap();
        assert_eq!(text, "=== Round: 1\nLewandowski [in play] [Goal] 1120\n");
    }

    #[test]
    fn recording_scoreboard_keeps_order() {
        let board = RecordingScoreBoard::new();
        board.on_round(1);
        board.on_turn("A", "in play", "Day off", 1000);
        board.on_turn("B", "*** bankrupt ***", "Penalty kick", 0);
        assert_eq!(board.rounds(), 1);
        assert_eq!(board.turns(), 2);
        assert_eq!(board.events()[0], ScoreEvent::Round(1));
        board.clear();
        assert!(board.is_empty());
    }
}
