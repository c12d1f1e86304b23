use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime play statistics, persisted alongside cards.
///
/// The streak counts consecutive bingos without a reset; the session layer
/// extends it on every earned bingo and the host resets it when a game
/// ends without one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_games: u64,
    pub total_bingos: u64,
    pub games_per_park: HashMap<String, u64>,
    pub bingos_per_park: HashMap<String, u64>,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_played_at: Option<DateTime<Utc>>,
}

impl GameStats {
    /// Record the start of a new game in `park_id`.
    pub fn record_new_game(&mut self, park_id: &str) {
        self.total_games += 1;
        *self.games_per_park.entry(park_id.to_string()).or_default() += 1;
        self.last_played_at = Some(Utc::now());
    }

    /// Record one earned bingo in `park_id`, extending the streak.
    pub fn record_bingo(&mut self, park_id: &str) {
        self.total_bingos += 1;
        *self.bingos_per_park.entry(park_id.to_string()).or_default() += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    /// End the running streak (a game finished without a bingo).
    pub fn reset_streak(&mut self) {
        self.current_streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_games_are_counted_per_park() {
        let mut stats = GameStats::default();
        stats.record_new_game("mk");
        stats.record_new_game("mk");
        stats.record_new_game("epcot");

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_per_park["mk"], 2);
        assert_eq!(stats.games_per_park["epcot"], 1);
        assert!(stats.last_played_at.is_some());
    }

    #[test]
    fn bingos_extend_the_streak_and_keep_the_best() {
        let mut stats = GameStats::default();
        stats.record_bingo("mk");
        stats.record_bingo("mk");
        stats.record_bingo("ak");
        assert_eq!(stats.total_bingos, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.bingos_per_park["mk"], 2);

        stats.reset_streak();
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 3);

        stats.record_bingo("ak");
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 3);
    }
}
