use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchKind {
    Friendly,
    Qualifier,
    Final,
}

impl MatchKind {
    /// Multiplier applied to the accumulated pool when a player lands on the match.
    pub const fn coefficient(self) -> f64 {
        match self {
            MatchKind::Friendly => 1.0,
            MatchKind::Qualifier => 2.5,
            MatchKind::Final => 4.0,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardLayout {
    #[default]
    Standard,
    Mini,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn coefficients_grow_with_stakes() {
        assert_eq!(MatchKind::Friendly.coefficient(), 1.0);
        assert_eq!(MatchKind::Qualifier.coefficient(), 2.5);
        assert_eq!(MatchKind::Final.coefficient(), 4.0);
    }

    #[test]
    fn layout_parses_from_cli_spelling() {
        assert_eq!(BoardLayout::from_str("STANDARD").unwrap(), BoardLayout::Standard);
        assert_eq!(BoardLayout::from_str("MINI").unwrap(), BoardLayout::Mini);
        assert!(BoardLayout::from_str("HUGE").is_err());
        assert_eq!(BoardLayout::Mini.to_string(), "MINI");
    }
}
