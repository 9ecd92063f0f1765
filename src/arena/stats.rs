//! Aggregated match results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bots::BotKind;
use crate::core::PlayerId;
use crate::rules::GameResult;

/// Tally for the bot seated as one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotRecord {
    pub player: PlayerId,
    pub kind: BotKind,
    /// Games this player won outright.
    pub wins: usize,
    /// Games this player finished tied for the lead.
    pub ties: usize,
}

impl BotRecord {
    pub fn new(player: PlayerId, kind: BotKind) -> Self {
        Self {
            player,
            kind,
            wins: 0,
            ties: 0,
        }
    }
}

/// Results of a full match, one record per seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Records in player order.
    pub records: Vec<BotRecord>,

    /// Games completed.
    pub games_played: usize,

    /// Games that ended with more than one leader.
    pub tied_games: usize,
}

impl MatchReport {
    /// Empty report for the given seating.
    pub fn new(seats: impl IntoIterator<Item = (PlayerId, BotKind)>) -> Self {
        Self {
            records: seats
                .into_iter()
                .map(|(player, kind)| BotRecord::new(player, kind))
                .collect(),
            games_played: 0,
            tied_games: 0,
        }
    }

    /// Fold one finished game into the tallies.
    pub fn record(&mut self, result: &GameResult) {
        self.games_played += 1;
        match result {
            GameResult::Winner(player) => {
                if let Some(record) = self.record_mut(*player) {
                    record.wins += 1;
                }
            }
            GameResult::Tie(players) => {
                self.tied_games += 1;
                for player in players {
                    if let Some(record) = self.record_mut(*player) {
                        record.ties += 1;
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&BotRecord> {
        self.records.iter().find(|r| r.player == player)
    }

    fn record_mut(&mut self, player: PlayerId) -> Option<&mut BotRecord> {
        self.records.iter_mut().find(|r| r.player == player)
    }

    /// Wins for `player`, 0 for an unknown seat.
    #[must_use]
    pub fn wins(&self, player: PlayerId) -> usize {
        self.get(player).map_or(0, |r| r.wins)
    }

    /// Ties for `player`, 0 for an unknown seat.
    #[must_use]
    pub fn ties(&self, player: PlayerId) -> usize {
        self.get(player).map_or(0, |r| r.ties)
    }

    /// Fraction of games `player` won, in `[0, 1]`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        self.rate(self.wins(player))
    }

    /// Fraction of games that ended tied, in `[0, 1]`.
    #[must_use]
    pub fn tie_rate(&self) -> f64 {
        self.rate(self.tied_games)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            count as f64 / self.games_played as f64
        }
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(
                f,
                "{} wins: {:.2}%",
                record.player,
                self.win_rate(record.player) * 100.0
            )?;
        }
        writeln!(f, "Ties: {:.2}%", self.tie_rate() * 100.0)
    }
}
