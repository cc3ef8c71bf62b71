//! Leaderboard of human players against the AI.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// One player's record.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct LeaderboardEntry {
    /// Display name.
    player_name: String,
    /// Games won.
    wins: u32,
    /// Games played, wins included.
    games_played: u32,
}

impl LeaderboardEntry {
    /// Win rate as a percentage (0.0–100.0).
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            (self.wins as f64 / self.games_played as f64) * 100.0
        }
    }

    fn record(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Ranking order: more wins first, then better win rate, then name.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .wins
            .cmp(&self.wins)
            .then_with(|| other.win_rate().total_cmp(&self.win_rate()))
            .then_with(|| self.player_name.cmp(&other.player_name))
    }
}

/// In-memory leaderboard.
///
/// Serializable so a caller can hand it to whatever store it uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a leaderboard from existing entries.
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    /// Records a finished game for `player_name`, creating the entry if needed.
    #[instrument(skip(self))]
    pub fn record(&mut self, player_name: &str, won: bool) -> &LeaderboardEntry {
        let idx = match self
            .entries
            .iter()
            .position(|e| e.player_name == player_name)
        {
            Some(idx) => idx,
            None => {
                debug!("New leaderboard entry");
                self.entries
                    .push(LeaderboardEntry::new(player_name.to_string(), 0, 0));
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[idx];
        entry.record(won);
        debug!(wins = entry.wins, games_played = entry.games_played, "Result recorded");
        entry
    }

    /// Looks up a player's entry.
    pub fn get(&self, player_name: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.player_name == player_name)
    }

    /// All entries in ranking order.
    pub fn standings(&self) -> Vec<&LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| a.rank_cmp(b));
        ranked
    }

    /// The first `n` entries in ranking order.
    pub fn top(&self, n: usize) -> Vec<&LeaderboardEntry> {
        let mut ranked = self.standings();
        ranked.truncate(n);
        ranked
    }

    /// Number of players on the board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nobody has played yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the entries as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Restores a leaderboard from a JSON array of entries.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(json)?;
        debug!(players = entries.len(), "Leaderboard restored");
        Ok(Self::from_entries(entries))
    }
}
