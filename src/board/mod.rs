use std::fmt;

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::types::{BoardLayout, MatchKind};

mod field;

pub use field::{BOOKMAKER_CYCLE, Field, FieldKind, SEASON_START_BONUS};

/// Two six-sided dice never walk further than this in one turn.
pub const INLINE_PATH: usize = 12;

pub type Path = SmallVec<[PathStep; INLINE_PATH]>;

/// One field visited while a player walks the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub position: u64,
    pub index: usize,
    pub is_final: bool,
}

/// Cyclic track of fields. The board owns every field and the state it accumulates;
/// players refer to it only through their absolute position.
#[derive(Debug, Clone)]
pub struct Board {
    fields: Vec<Field>,
}

impl Board {
    pub fn new(fields: Vec<Field>) -> Self {
        assert!(!fields.is_empty(), "a board needs at least one field");
        Self { fields }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_FIELDS.clone())
    }

    pub fn mini() -> Self {
        Self::new(MINI_FIELDS.clone())
    }

    pub fn from_layout(layout: BoardLayout) -> Self {
        match layout {
            BoardLayout::Standard => Self::standard(),
            BoardLayout::Mini => Self::mini(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    pub fn field_mut(&mut self, index: usize) -> &mut Field {
        &mut self.fields[index]
    }

    pub fn index_of(&self, position: u64) -> usize {
        (position % self.fields.len() as u64) as usize
    }

    pub fn field_at(&self, position: u64) -> &Field {
        &self.fields[self.index_of(position)]
    }

    /// Every position a player starting at `from` visits when walking `steps` fields,
    /// in order. Only the last step is final.
    pub fn resolve_path(&self, from: u64, steps: u32) -> Path {
        (1..=u64::from(steps))
            .map(|offset| {
                let position = from + offset;
                PathStep {
                    position,
                    index: self.index_of(position),
                    is_final: offset == u64::from(steps),
                }
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, field) in self.fields.iter().enumerate() {
            writeln!(f, "{idx:>3}  {field}")?;
        }
        Ok(())
    }
}

static STANDARD_FIELDS: Lazy<Vec<Field>> = Lazy::new(|| {
    vec![
        Field::season_start(),
        Field::match_against("San Marino", 160, MatchKind::Friendly),
        Field::day_off(),
        Field::match_against("Liechtenstein", 220, MatchKind::Friendly),
        Field::yellow_card(3),
        Field::match_against("Mexico", 300, MatchKind::Qualifier),
        Field::match_against("Saudi Arabia", 280, MatchKind::Qualifier),
        Field::bookmaker(100),
        Field::match_against("Argentina", 250, MatchKind::Qualifier),
        Field::goal(120),
        Field::match_against("France", 400, MatchKind::Final),
        Field::penalty_kick(180),
    ]
});

static MINI_FIELDS: Lazy<Vec<Field>> = Lazy::new(|| {
    vec![
        Field::season_start(),
        Field::match_against("Wales", 120, MatchKind::Friendly),
        Field::yellow_card(1),
        Field::bookmaker(80),
        Field::match_against("Denmark", 200, MatchKind::Final),
        Field::penalty_kick(150),
    ]
});

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn numbered(len: usize) -> Board {
        Board::new((0..len).map(|i| Field::goal(i as u32)).collect())
    }

    #[test]
    fn standard_board_layout() {
        let board = Board::standard();
        assert_eq!(board.len(), 12);
        assert_eq!(board.field(0).name(), "Season start");
        assert_eq!(board.field(10).name(), "Match vs France");
        assert_eq!(board.field(11).name(), "Penalty kick");
        let matches = board
            .fields()
            .iter()
            .filter(|f| matches!(f.kind(), FieldKind::Match { .. }))
            .count();
        assert_eq!(matches, 6);
    }

    #[test]
    fn layouts_start_with_fresh_state() {
        let mut board = Board::standard();
        let mut player = crate::game::PlayerState::new("Glik", 1000);
        board.field_mut(1).on_pass(&mut player);
        assert_eq!(board.field(1).pool(), 160);
        assert_eq!(Board::standard().field(1).pool(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one field")]
    fn empty_board_panics() {
        Board::new(Vec::new());
    }

    #[test]
    fn path_wraps_around() {
        let board = numbered(4);
        let path = board.resolve_path(2, 5);
        let indices: Vec<_> = path.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![3, 0, 1, 2, 3]);
        assert!(path.last().unwrap().is_final);
        assert_eq!(path.iter().filter(|s| s.is_final).count(), 1);
    }

    #[test]
    fn zero_steps_is_an_empty_path() {
        assert!(numbered(3).resolve_path(7, 0).is_empty());
    }

    proptest! {
        #[test]
        fn path_is_cyclic(len in 1usize..40, from in 0u64..10_000, steps in 1u32..64) {
            let board = numbered(len);
            let path = board.resolve_path(from, steps);
            prop_assert_eq!(path.len(), steps as usize);
            for (k, step) in path.iter().enumerate() {
                let expected = from + k as u64 + 1;
                prop_assert_eq!(step.position, expected);
                prop_assert_eq!(step.index, (expected % len as u64) as usize);
                prop_assert_eq!(step.is_final, k + 1 == steps as usize);
            }
            let last = path.last().unwrap();
            prop_assert_eq!(last.index, ((from + u64::from(steps)) % len as u64) as usize);
        }
    }
}
