//! Point codes to games.

use tracing::debug;

use crate::models::{Game, PlayerId, Side};

/// Folds an ordered stream of point codes into games.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameDecoder;

impl GameDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode point codes into games in play order.
    ///
    /// A game is emitted the moment it becomes decided. If points remain in
    /// an undecided game at the end, it is emitted last as the in-progress
    /// game. No empty games are produced.
    pub fn decode(&self, points: &[i64], player_a: &PlayerId, player_b: &PlayerId) -> Vec<Game> {
        let new_game = || Game::new(player_a.clone(), player_b.clone());

        let (mut games, open) =
            points
                .iter()
                .fold((Vec::new(), new_game()), |(mut games, mut open), &code| {
                    open.score_side(Side::from_point_code(code));
                    if open.is_over() {
                        games.push(std::mem::replace(&mut open, new_game()));
                    }
                    (games, open)
                });

        if open.has_points() {
            debug!(score = %open.current_score(), "Trailing game in progress");
            games.push(open);
        }

        games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(points: &[i64]) -> Vec<Game> {
        GameDecoder::new().decode(points, &PlayerId::from("Person A"), &PlayerId::from("Person B"))
    }

    #[test]
    fn test_empty_input() {
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn test_single_love_game() {
        let games = decode(&[0, 0, 0, 0]);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].winner(), Some(&PlayerId::from("Person A")));
        assert_eq!(games[0].current_score(), "Game");
    }

    #[test]
    fn test_deuce_then_two_in_a_row() {
        let games = decode(&[0, 1, 0, 1, 0, 1, 0, 0]);
        assert_eq!(games.len(), 1);
        assert!(games[0].is_over());
        assert_eq!(games[0].winner_side(), Some(Side::A));
    }

    #[test]
    fn test_multiple_games() {
        let games = decode(&[0, 0, 0, 0, 1, 1, 1, 1]);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].winner_side(), Some(Side::A));
        assert_eq!(games[1].winner_side(), Some(Side::B));
    }

    #[test]
    fn test_trailing_partial_game() {
        let games = decode(&[0, 0, 0, 0, 1, 0]);
        assert_eq!(games.len(), 2);
        assert!(games[0].is_over());
        assert!(!games[1].is_over());
        assert_eq!(games[1].current_score(), "15 - 15");
    }

    #[test]
    fn test_no_trailing_game_when_last_point_closes() {
        let games = decode(&[1, 1, 1, 1]);
        assert_eq!(games.len(), 1);
        assert!(games.iter().all(Game::is_over));
    }

    #[test]
    fn test_non_binary_codes_score_for_side_b() {
        let games = decode(&[2, 5, 9, 1]);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].winner_side(), Some(Side::B));
    }

    #[test]
    fn test_completed_games_match_closing_moments() {
        // Long deuce battle, then a love game, then a partial.
        let points = [0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1];
        let games = decode(&points);

        let closed = games.iter().filter(|g| g.is_over()).count();
        assert_eq!(closed, 2);
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].winner_side(), Some(Side::B));
        assert_eq!(games[1].winner_side(), Some(Side::A));
        assert_eq!(games[2].score_b(), 1);
    }
}
