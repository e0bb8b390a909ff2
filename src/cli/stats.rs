use std::collections::HashMap;
use std::time::Duration;

use crate::game::{GameSummary, PlayerStatus};

#[derive(Debug, Default, Clone)]
pub struct GameStats {
    pub bankruptcies: HashMap<String, u32>,
    pub money_by_player: HashMap<String, Vec<u32>>,
    pub games: u32,
    pub total_rounds: u64,
    pub total_survivors: u64,
    pub total_duration: Duration,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game(&mut self, summary: &GameSummary, duration: Duration) {
        self.games += 1;
        self.total_duration += duration;
        self.total_rounds += u64::from(summary.rounds_played);
        self.total_survivors += summary.survivors().count() as u64;

        for standing in &summary.standings {
            if standing.status == PlayerStatus::Bankrupt {
                *self
                    .bankruptcies
                    .entry(standing.name.clone())
                    .or_insert(0) += 1;
            }
            self.money_by_player
                .entry(standing.name.clone())
                .or_default()
                .push(standing.money);
        }
    }

    pub fn merge(&mut self, other: GameStats) {
        for (name, count) in other.bankruptcies {
            *self.bankruptcies.entry(name).or_insert(0) += count;
        }
        for (name, money) in other.money_by_player {
            self.money_by_player.entry(name).or_default().extend(money);
        }
        self.games += other.games;
        self.total_rounds += other.total_rounds;
        self.total_survivors += other.total_survivors;
        self.total_duration += other.total_duration;
    }

    pub fn bankruptcy_rate(&self, player: &str) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let bankrupt = self.bankruptcies.get(player).copied().unwrap_or(0);
        f64::from(bankrupt) / f64::from(self.games)
    }

    pub fn avg_money(&self, player: &str) -> f64 {
        match self.money_by_player.get(player) {
            Some(money) if !money.is_empty() => {
                money.iter().map(|&m| f64::from(m)).sum::<f64>() / money.len() as f64
            }
            _ => 0.0,
        }
    }

    pub fn get_avg_rounds(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / f64::from(self.games)
    }

    pub fn get_avg_survivors(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_survivors as f64 / f64::from(self.games)
    }

    pub fn get_avg_duration(&self) -> Duration {
        if self.games == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.games
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::game::Standing;

    fn standing(name: &str, money: u32, status: PlayerStatus) -> Standing {
        Standing {
            name: name.to_string(),
            money,
            position: 0,
            status,
        }
    }

    fn summary(rounds: u32, standings: Vec<Standing>) -> GameSummary {
        GameSummary {
            id: Uuid::new_v4(),
            rounds_played: rounds,
            standings,
        }
    }

    #[test]
    fn aggregates_games() {
        let mut stats = GameStats::new();
        stats.record_game(
            &summary(
                10,
                vec![
                    standing("A", 0, PlayerStatus::Bankrupt),
                    standing("B", 1500, PlayerStatus::Active),
                ],
            ),
            Duration::from_millis(4),
        );
        stats.record_game(
            &summary(
                20,
                vec![
                    standing("A", 500, PlayerStatus::Suspended(1)),
                    standing("B", 700, PlayerStatus::Active),
                ],
            ),
            Duration::from_millis(2),
        );

        assert_eq!(stats.games, 2);
        assert_eq!(stats.get_avg_rounds(), 15.0);
        assert_eq!(stats.get_avg_survivors(), 1.5);
        assert_eq!(stats.bankruptcy_rate("A"), 0.5);
        assert_eq!(stats.bankruptcy_rate("B"), 0.0);
        assert_eq!(stats.avg_money("A"), 250.0);
        assert_eq!(stats.avg_money("B"), 1100.0);
        assert_eq!(stats.get_avg_duration(), Duration::from_millis(3));
    }

    #[test]
    fn merge_combines_workers() {
        let mut left = GameStats::new();
        left.record_game(
            &summary(5, vec![standing("A", 0, PlayerStatus::Bankrupt)]),
            Duration::ZERO,
        );
        let mut right = GameStats::new();
        right.record_game(
            &summary(7, vec![standing("A", 100, PlayerStatus::Active)]),
            Duration::ZERO,
        );
        left.merge(right);
        assert_eq!(left.games, 2);
        assert_eq!(left.total_rounds, 12);
        assert_eq!(left.money_by_player["A"], vec![0, 100]);
        assert_eq!(left.bankruptcies["A"], 1);
    }

    #[test]
    fn empty_stats_are_zero() {
        let stats = GameStats::new();
        assert_eq!(stats.get_avg_rounds(), 0.0);
        assert_eq!(stats.avg_money("nobody"), 0.0);
        assert_eq!(stats.get_avg_duration(), Duration::ZERO);
    }
}
