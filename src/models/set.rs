//! Game-level state machine for a single set.

use std::sync::Arc;

use tracing::warn;

use super::{Game, PlayerId, RuleStrategy, Side};

/// A set: the games played in order plus the running game count per side.
#[derive(Debug, Clone)]
pub struct Set {
    player_a: PlayerId,
    player_b: PlayerId,
    rules: Arc<dyn RuleStrategy>,
    games: Vec<Game>,
    games_a: u32,
    games_b: u32,
}

impl Set {
    pub fn new(player_a: PlayerId, player_b: PlayerId, rules: Arc<dyn RuleStrategy>) -> Self {
        Self {
            player_a,
            player_b,
            rules,
            games: Vec::new(),
            games_a: 0,
            games_b: 0,
        }
    }

    pub fn player(&self, side: Side) -> &PlayerId {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    /// Add a game to the set. No-op once the set is decided.
    ///
    /// The game is credited to side A when its winner is A's identity and to
    /// side B otherwise. An undecided game therefore counts for B.
    pub fn add_won_game(&mut self, game: Game) {
        if self.is_finished() {
            return;
        }

        match game.winner() {
            Some(winner) if *winner == self.player_a => self.games_a += 1,
            Some(_) => self.games_b += 1,
            None => {
                warn!(
                    score = %game.current_score(),
                    "Undecided game added to set; crediting {}",
                    self.player_b
                );
                self.games_b += 1;
            }
        }
        self.games.push(game);
    }

    pub fn is_finished(&self) -> bool {
        self.rules.is_decided(self.games_a, self.games_b)
    }

    /// Winning player, or `None` while the set is still open.
    pub fn winner(&self) -> Option<&PlayerId> {
        if !self.is_finished() {
            return None;
        }
        Some(self.player(self.rules.winner(self.games_a, self.games_b)))
    }

    /// Games in play order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn games_won(&self, side: Side) -> u32 {
        match side {
            Side::A => self.games_a,
            Side::B => self.games_b,
        }
    }

    /// Set score as "<A> - <B>".
    pub fn score(&self) -> String {
        format!("{} - {}", self.games_a, self.games_b)
    }
}
