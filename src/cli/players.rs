use std::collections::HashSet;

pub const DEFAULT_ROSTER: &[&str] = &["Lewandowski", "Szczesny", "Zielinski", "Milik"];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("player name at position {0} is empty")]
    EmptyName(usize),
    #[error("player '{0}' is listed twice")]
    Duplicate(String),
}

/// Splits a comma-separated list of player names, keeping the order they were given in.
pub fn parse_roster(input: &str) -> Result<Vec<String>, RosterError> {
    let mut seen = HashSet::new();
    let mut roster = Vec::new();
    for (idx, raw) in input.split(',').enumerate() {
        let name = raw.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName(idx + 1));
        }
        if !seen.insert(name) {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        roster.push(name.to_string());
    }
    Ok(roster)
}

pub fn default_roster() -> String {
    DEFAULT_ROSTER.join(",")
}
