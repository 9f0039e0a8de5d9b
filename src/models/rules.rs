//! Win-condition policies for sets and matches.
//!
//! `Set` and `Match` never hard-code their thresholds. Each is handed a
//! `RuleStrategy` at construction and asks it whether the running counts are
//! decided and which side leads. Swapping in a different format (best of five,
//! margin-required sets) is a new implementation of the trait.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two contestants, in the order they were listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Decode a raw point code: 0 is side A, any other value is side B.
    pub fn from_point_code(code: i64) -> Self {
        if code == 0 {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Decides when a pair of running counts is terminal and who leads.
pub trait RuleStrategy: fmt::Debug + Send + Sync {
    /// True once the counts have reached a winner-determined state.
    fn is_decided(&self, count_a: u32, count_b: u32) -> bool;

    /// The side with the strictly larger count; B on a tie.
    fn winner(&self, count_a: u32, count_b: u32) -> Side {
        if count_a > count_b {
            Side::A
        } else {
            Side::B
        }
    }
}

/// Default games needed to take a set.
pub const GAMES_PER_SET: u32 = 6;

/// Default sets needed to take a match (best of three).
pub const SETS_TO_WIN: u32 = 2;

/// First to a fixed number of games, no two-game margin required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRules {
    games_to_win: u32,
}

impl SetRules {
    pub fn new(games_to_win: u32) -> Self {
        Self { games_to_win }
    }

    pub fn games_to_win(&self) -> u32 {
        self.games_to_win
    }
}

impl Default for SetRules {
    fn default() -> Self {
        Self::new(GAMES_PER_SET)
    }
}

impl RuleStrategy for SetRules {
    fn is_decided(&self, count_a: u32, count_b: u32) -> bool {
        count_a == self.games_to_win || count_b == self.games_to_win
    }
}

/// First to a fixed number of sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRules {
    sets_to_win: u32,
}

impl MatchRules {
    pub fn new(sets_to_win: u32) -> Self {
        Self { sets_to_win }
    }

    pub fn sets_to_win(&self) -> u32 {
        self.sets_to_win
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self::new(SETS_TO_WIN)
    }
}

impl RuleStrategy for MatchRules {
    fn is_decided(&self, count_a: u32, count_b: u32) -> bool {
        count_a >= self.sets_to_win || count_b >= self.sets_to_win
    }
}
