//! Games to sets.

use std::sync::Arc;

use tracing::debug;

use crate::models::{Game, PlayerId, RuleStrategy, Set};

/// Folds an ordered stream of games into sets under an injected set rule.
#[derive(Debug, Clone)]
pub struct SetAggregator {
    rules: Arc<dyn RuleStrategy>,
}

impl SetAggregator {
    pub fn new(rules: Arc<dyn RuleStrategy>) -> Self {
        Self { rules }
    }

    /// Group games into sets in play order.
    ///
    /// A set is emitted as soon as the rule says it is decided. A trailing set
    /// holding at least one game is emitted last, still open.
    pub fn aggregate(&self, games: Vec<Game>, player_a: &PlayerId, player_b: &PlayerId) -> Vec<Set> {
        let new_set = || Set::new(player_a.clone(), player_b.clone(), Arc::clone(&self.rules));

        let (mut sets, open) =
            games
                .into_iter()
                .fold((Vec::new(), new_set()), |(mut sets, mut open), game| {
                    open.add_won_game(game);
                    if open.is_finished() {
                        debug!(score = %open.score(), "Set closed");
                        sets.push(std::mem::replace(&mut open, new_set()));
                    }
                    (sets, open)
                });

        if !open.games().is_empty() {
            debug!(score = %open.score(), "Trailing set in progress");
            sets.push(open);
        }

        sets
    }
}

impl Default for SetAggregator {
    fn default() -> Self {
        Self::new(Arc::new(crate::models::SetRules::default()))
    }
}
