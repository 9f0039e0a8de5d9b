//! Set-level state machine for a single match.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{MatchId, PlayerId, RuleStrategy, Set, Side};

/// A match between two players, holding only decided sets.
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    player_a: PlayerId,
    player_b: PlayerId,
    rules: Arc<dyn RuleStrategy>,
    sets: Vec<Set>,
    sets_a: u32,
    sets_b: u32,
}

impl Match {
    pub fn new(
        id: MatchId,
        player_a: PlayerId,
        player_b: PlayerId,
        rules: Arc<dyn RuleStrategy>,
    ) -> Self {
        Self {
            id,
            player_a,
            player_b,
            rules,
            sets: Vec::new(),
            sets_a: 0,
            sets_b: 0,
        }
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn player(&self, side: Side) -> &PlayerId {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    pub fn players(&self) -> (&PlayerId, &PlayerId) {
        (&self.player_a, &self.player_b)
    }

    /// Decided sets in play order.
    pub fn sets(&self) -> &[Set] {
        &self.sets
    }

    pub fn sets_won(&self, side: Side) -> u32 {
        match side {
            Side::A => self.sets_a,
            Side::B => self.sets_b,
        }
    }

    /// Record a set. Ignored if the match is already over or the set is not.
    pub fn add_won_set(&mut self, set: Set) {
        if self.is_match_end() {
            debug!(match_id = %self.id, "Match already decided; set ignored");
            return;
        }
        let Some(winner) = set.winner() else {
            debug!(match_id = %self.id, score = %set.score(), "Unfinished set ignored");
            return;
        };

        if *winner == self.player_a {
            self.sets_a += 1;
        } else {
            self.sets_b += 1;
        }
        self.sets.push(set);
    }

    pub fn is_match_end(&self) -> bool {
        self.rules.is_decided(self.sets_a, self.sets_b)
    }

    fn winning_side(&self) -> Option<Side> {
        self.is_match_end()
            .then(|| self.rules.winner(self.sets_a, self.sets_b))
    }

    /// "<A> sets to <B>", or winner's count first once decided.
    pub fn match_score(&self) -> String {
        match self.winning_side() {
            Some(Side::B) => format!("{} sets to {}", self.sets_b, self.sets_a),
            _ => format!("{} sets to {}", self.sets_a, self.sets_b),
        }
    }

    /// "<winner> defeated <loser>", or `None` while undecided.
    pub fn match_winner(&self) -> Option<String> {
        self.winning_side().map(|side| {
            format!(
                "{} defeated {}",
                self.player(side),
                self.player(side.opponent())
            )
        })
    }

    /// Flatten into the serializable view consumed by reports.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            id: self.id.as_str().to_string(),
            player_a: self.player_a.as_str().to_string(),
            player_b: self.player_b.as_str().to_string(),
            set_scores: self.sets.iter().map(Set::score).collect(),
            is_decided: self.is_match_end(),
            match_score: self.match_score(),
            winner: self.match_winner(),
        }
    }
}

/// Reporting view of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: String,
    pub player_a: String,
    pub player_b: String,
    pub set_scores: Vec<String>,
    pub is_decided: bool,
    pub match_score: String,
    pub winner: Option<String>,
}
