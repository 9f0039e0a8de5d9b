//! Player model with cumulative game win/loss counters.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Win/loss record across every game a player took part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WinLossRecord {
    pub wins: u32,
    pub losses: u32,
}

/// A tournament player and their game tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    record: WinLossRecord,
}

impl Player {
    /// Create a player with an empty record.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            record: WinLossRecord::default(),
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    pub fn wins(&self) -> u32 {
        self.record.wins
    }

    pub fn losses(&self) -> u32 {
        self.record.losses
    }

    pub fn record(&self) -> WinLossRecord {
        self.record
    }

    /// Record a game won.
    pub fn add_win(&mut self) {
        self.record.wins += 1;
    }

    /// Record a game lost.
    pub fn add_loss(&mut self) {
        self.record.losses += 1;
    }

    /// Flatten into the serializable record used by reports.
    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord {
            name: self.name().to_string(),
            wins: self.record.wins,
            losses: self.record.losses,
        }
    }
}

/// Reporting view of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}
