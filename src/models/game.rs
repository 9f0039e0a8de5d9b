//! Point-level state machine for a single game.

use super::{PlayerId, Side};

/// Points a side needs before a game can be won.
const MIN_POINTS_TO_WIN: u32 = 4;

/// Lead required to close a game.
const MIN_LEAD_TO_WIN: u32 = 2;

/// Both sides at or above this many points means deuce territory.
const DEUCE_THRESHOLD: u32 = 3;

/// Marker reported once a game is decided.
pub const GAME_CALL: &str = "Game";

/// Map a point count onto the tennis call.
pub fn call(points: u32) -> &'static str {
    match points {
        0 => "0",
        1 => "15",
        2 => "30",
        3 => "40",
        _ => GAME_CALL,
    }
}

/// A single game between two players.
///
/// Scores only move forward, and only while the game is undecided. Scoring
/// a decided game is silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    player_a: PlayerId,
    player_b: PlayerId,
    score_a: u32,
    score_b: u32,
}

impl Game {
    pub fn new(player_a: PlayerId, player_b: PlayerId) -> Self {
        Self {
            player_a,
            player_b,
            score_a: 0,
            score_b: 0,
        }
    }

    pub fn player(&self, side: Side) -> &PlayerId {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    pub fn score_a(&self) -> u32 {
        self.score_a
    }

    pub fn score_b(&self) -> u32 {
        self.score_b
    }

    /// True once either side has scored.
    pub fn has_points(&self) -> bool {
        self.score_a > 0 || self.score_b > 0
    }

    /// Award a point to `side`. No-op once the game is over.
    pub fn score_side(&mut self, side: Side) {
        if self.is_over() {
            return;
        }
        match side {
            Side::A => self.score_a += 1,
            Side::B => self.score_b += 1,
        }
    }

    fn lead(&self) -> u32 {
        self.score_a.abs_diff(self.score_b)
    }

    pub fn is_over(&self) -> bool {
        self.score_a.max(self.score_b) >= MIN_POINTS_TO_WIN && self.lead() >= MIN_LEAD_TO_WIN
    }

    pub fn is_deuce(&self) -> bool {
        self.score_a == self.score_b && self.score_a >= DEUCE_THRESHOLD
    }

    /// The side holding advantage, if any.
    pub fn advantage(&self) -> Option<Side> {
        if self.score_a >= DEUCE_THRESHOLD && self.score_b >= DEUCE_THRESHOLD && self.lead() == 1 {
            Some(self.leader())
        } else {
            None
        }
    }

    fn leader(&self) -> Side {
        if self.score_a > self.score_b {
            Side::A
        } else {
            Side::B
        }
    }

    /// Human-readable state of the game.
    ///
    /// Checked in order: "Game" once decided, then "Deuce", then
    /// "Advantage <name>", otherwise the paired calls such as "30 - 15".
    pub fn current_score(&self) -> String {
        if self.is_over() {
            return GAME_CALL.to_string();
        }
        if self.is_deuce() {
            return "Deuce".to_string();
        }
        if let Some(side) = self.advantage() {
            return format!("Advantage {}", self.player(side));
        }
        format!("{} - {}", call(self.score_a), call(self.score_b))
    }

    /// Winning side, or `None` while undecided.
    pub fn winner_side(&self) -> Option<Side> {
        self.is_over().then(|| self.leader())
    }

    /// Winning player, or `None` while undecided.
    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner_side().map(|side| self.player(side))
    }
}
