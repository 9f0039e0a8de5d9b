//! Player statistics across a decoded tournament.
//!
//! Runs after decoding: every game of every recorded set counts one win for
//! its winner and one loss for the other side.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{Match, Player, PlayerId, PlayerRecord};

/// Per-player game tallies, keyed by player identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    players: BTreeMap<PlayerId, Player>,
}

impl PlayerStats {
    /// Look a player up by name.
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(&PlayerId::from(name))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn records(&self) -> Vec<PlayerRecord> {
        self.iter().map(Player::to_record).collect()
    }
}

/// Builds `PlayerStats` from a list of matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerStatsAggregator;

impl PlayerStatsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Tally game wins and losses for every player seen in `matches`.
    ///
    /// Games without a winner leave both counters untouched.
    pub fn aggregate(&self, matches: &[Match]) -> PlayerStats {
        let mut players: BTreeMap<PlayerId, Player> = BTreeMap::new();
        for m in matches {
            let (a, b) = m.players();
            for id in [a, b] {
                players
                    .entry(id.clone())
                    .or_insert_with(|| Player::new(id.clone()));
            }
        }

        for m in matches {
            let (a, b) = m.players();
            for game in m.sets().iter().flat_map(|set| set.games()) {
                let Some(winner) = game.winner() else {
                    continue;
                };
                let loser = if winner == a {
                    b
                } else if winner == b {
                    a
                } else {
                    continue;
                };

                if let Some(p) = players.get_mut(winner) {
                    p.add_win();
                }
                if let Some(p) = players.get_mut(loser) {
                    p.add_loss();
                }
            }
        }

        debug!("Aggregated game records for {} players", players.len());
        PlayerStats { players }
    }
}
