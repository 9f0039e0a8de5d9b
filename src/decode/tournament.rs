//! Tournament text to matches.
//!
//! Input is line oriented:
//!
//! ```text
//! Match: 01
//! Person A vs Person B
//! 0
//! 1
//! ...
//! Match: 02
//! ...
//! ```

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{debug, info};

use super::{DecodeError, GameDecoder, SetAggregator};
use crate::models::{Match, MatchId, MatchRules, PlayerId, RuleStrategy, SetRules};

/// Token the header line must carry exactly once.
pub const MATCH_PREFIX: &str = "Match: ";

/// Token the players line must carry exactly once.
pub const PLAYER_SEPARATOR: &str = "vs";

/// Header and players line precede the point codes.
const HEADER_LINES: usize = 2;

fn chunk_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Match:").expect("static pattern compiles"))
}

/// Builds one `Match` per `Match:` chunk of tournament text.
#[derive(Debug, Clone)]
pub struct TournamentDecoder {
    games: GameDecoder,
    sets: SetAggregator,
    match_rules: Arc<dyn RuleStrategy>,
}

impl Default for TournamentDecoder {
    fn default() -> Self {
        Self::new(Arc::new(SetRules::default()), Arc::new(MatchRules::default()))
    }
}

impl TournamentDecoder {
    pub fn new(set_rules: Arc<dyn RuleStrategy>, match_rules: Arc<dyn RuleStrategy>) -> Self {
        Self {
            games: GameDecoder::new(),
            sets: SetAggregator::new(set_rules),
            match_rules,
        }
    }

    /// Decode every match in `content`, in order. Fails on the first bad chunk.
    pub fn parse_matches(&self, content: &str) -> Result<Vec<Match>, DecodeError> {
        let matches = split_into_chunks(content)
            .into_iter()
            .map(|chunk| self.parse_match(chunk))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Decoded {} matches", matches.len());
        Ok(matches)
    }

    /// Decode a single match chunk.
    ///
    /// Only finished sets reach the match. A trailing set still in progress
    /// is dropped.
    pub fn parse_match(&self, chunk: &str) -> Result<Match, DecodeError> {
        let lines: Vec<&str> = chunk.lines().collect();

        let header = find_line_containing(&lines, MATCH_PREFIX).ok_or(DecodeError::MissingHeaderLine)?;
        let id = parse_match_header(header)?;

        let players_line =
            find_line_containing(&lines, PLAYER_SEPARATOR).ok_or(DecodeError::MissingPlayersLine)?;
        let (player_a, player_b) = parse_match_players(players_line)?;

        let points = lines
            .iter()
            .skip(HEADER_LINES)
            .filter(|line| !line.trim().is_empty())
            .map(|line| parse_point(line))
            .collect::<Result<Vec<_>, _>>()?;

        if id.as_str().is_empty() || player_a.as_str().is_empty() || player_b.as_str().is_empty() {
            return Err(DecodeError::EmptyMatchData {
                id: id.to_string(),
                player_a: player_a.to_string(),
                player_b: player_b.to_string(),
            });
        }

        debug!(match_id = %id, points = points.len(), "Decoding match");

        let games = self.games.decode(&points, &player_a, &player_b);
        let sets = self.sets.aggregate(games, &player_a, &player_b);

        let mut tennis_match = Match::new(id, player_a, player_b, Arc::clone(&self.match_rules));
        for set in sets {
            tennis_match.add_won_set(set);
        }

        debug!(
            match_id = %tennis_match.id(),
            score = %tennis_match.match_score(),
            decided = tennis_match.is_match_end(),
            "Match decoded"
        );
        Ok(tennis_match)
    }
}

/// Split text at every `Match:` token, keeping the token with its chunk.
/// Blank chunks are dropped.
pub fn split_into_chunks(content: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = chunk_boundary().find_iter(content).map(|m| m.start()).collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(content.len());
            &content[start..end]
        })
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

/// Extract the match id from a header line such as `Match: 01`.
pub fn parse_match_header(line: &str) -> Result<MatchId, DecodeError> {
    let parts: Vec<&str> = line.split(MATCH_PREFIX).collect();
    match parts.as_slice() {
        [_, id] => Ok(MatchId::new(id.trim())),
        _ => Err(DecodeError::MalformedHeaderFormat {
            line: line.to_string(),
        }),
    }
}

/// Extract both player names from a line such as `Person A vs Person B`.
pub fn parse_match_players(line: &str) -> Result<(PlayerId, PlayerId), DecodeError> {
    let parts: Vec<&str> = line.split(PLAYER_SEPARATOR).collect();
    match parts.as_slice() {
        [a, b] => Ok((PlayerId::new(a.trim()), PlayerId::new(b.trim()))),
        _ => Err(DecodeError::MalformedPlayersFormat {
            line: line.to_string(),
        }),
    }
}

fn parse_point(line: &str) -> Result<i64, DecodeError> {
    line.trim()
        .parse()
        .map_err(|_| DecodeError::InvalidPointValue {
            line: line.to_string(),
        })
}

fn find_line_containing<'a>(lines: &[&'a str], token: &str) -> Option<&'a str> {
    lines.iter().copied().find(|line| line.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;

    fn repeat(code: &str, times: usize) -> String {
        format!("{}\n", code).repeat(times)
    }

    /// A takes the first set 6-0, B takes the next two 6-0.
    fn comeback_for_b() -> String {
        let mut body = String::new();
        body.push_str(&repeat("0", 24));
        body.push_str(&repeat("1", 24));
        body.push('\n');
        body.push_str(&repeat("1", 24));
        body
    }

    #[test]
    fn test_parse_match_header() {
        assert_eq!(parse_match_header("Match: 01").unwrap(), MatchId::from("01"));
        assert_eq!(parse_match_header("  Match:  02  ").unwrap(), MatchId::from("02"));
    }

    #[test]
    fn test_parse_match_header_invalid() {
        let err = parse_match_header("Invalid format").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedHeaderFormat {
                line: "Invalid format".to_string()
            }
        );
    }

    #[test]
    fn test_parse_match_header_twice_is_invalid() {
        assert!(matches!(
            parse_match_header("Match: 01 Match: 02"),
            Err(DecodeError::MalformedHeaderFormat { .. })
        ));
    }

    #[test]
    fn test_parse_match_players() {
        let (a, b) = parse_match_players("  Person A vs Person B ").unwrap();
        assert_eq!(a, PlayerId::from("Person A"));
        assert_eq!(b, PlayerId::from("Person B"));
    }

    #[test]
    fn test_parse_match_players_invalid() {
        assert!(matches!(
            parse_match_players("Invalid format"),
            Err(DecodeError::MalformedPlayersFormat { .. })
        ));
        assert!(matches!(
            parse_match_players("A vs B vs C"),
            Err(DecodeError::MalformedPlayersFormat { .. })
        ));
    }

    #[test]
    fn test_chunk_boundary_matches_token() {
        let starts: Vec<usize> = chunk_boundary()
            .find_iter("Match: 01\nMatch: 02")
            .map(|m| m.start())
            .collect();
        assert_eq!(starts, vec![0, 10]);
    }

    #[test]
    fn test_split_into_chunks() {
        let text = "Match: 01\nA vs B\n0\nMatch: 02\nC vs D\n1\n";
        let chunks = split_into_chunks(text);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].starts_with("Match: 01"));
        assert!(chunks[1].starts_with("Match: 02"));
    }

    #[test]
    fn test_split_keeps_leading_text_as_chunk() {
        let chunks = split_into_chunks("junk\nMatch: 01\nA vs B\n");
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "junk\n");

        assert!(split_into_chunks("  \n\n").is_empty());
    }

    #[test]
    fn test_parse_match_straight_sets() {
        let text = format!("Match: 01\nPerson A vs Person B\n{}", repeat("0", 48));
        let m = TournamentDecoder::default().parse_match(&text).unwrap();

        assert_eq!(m.id().as_str(), "01");
        assert_eq!(m.players().0, &PlayerId::from("Person A"));
        assert!(m.is_match_end());
        assert_eq!(m.match_score(), "2 sets to 0");
        assert_eq!(m.match_winner().as_deref(), Some("Person A defeated Person B"));
    }

    #[test]
    fn test_parse_match_ignores_blank_lines_and_indentation() {
        let mut body = String::new();
        for _ in 0..24 {
            body.push_str("    0\n\n");
        }
        let text = format!("Match: 03\n    Person A vs Person C\n{}", body);
        let m = TournamentDecoder::default().parse_match(&text).unwrap();

        assert_eq!(m.sets().len(), 1);
        assert_eq!(m.sets()[0].score(), "6 - 0");
        assert_eq!(m.players().1, &PlayerId::from("Person C"));
    }

    #[test]
    fn test_parse_match_drops_trailing_set() {
        let text = format!(
            "Match: 04\nPerson A vs Person B\n{}{}",
            repeat("0", 24),
            repeat("1", 8)
        );
        let m = TournamentDecoder::default().parse_match(&text).unwrap();

        assert_eq!(m.sets().len(), 1);
        assert!(!m.is_match_end());
        assert_eq!(m.match_score(), "1 sets to 0");
        assert_eq!(m.match_winner(), None);
    }

    #[test]
    fn test_parse_matches_two_chunks() {
        let text = format!(
            "Match: 01\nPerson A vs Person B\n{}Match: 02\nPerson A vs Person C\n{}",
            repeat("0", 48),
            comeback_for_b()
        );
        let matches = TournamentDecoder::default().parse_matches(&text).unwrap();

        assert_eq!(matches.len(), 2);
        let second = &matches[1];
        assert!(second.is_match_end());
        assert_eq!(second.sets_won(Side::B), 2);
        assert_eq!(second.match_score(), "2 sets to 1");
        assert_eq!(second.match_winner().as_deref(), Some("Person C defeated Person A"));
    }

    #[test]
    fn test_missing_header_line() {
        let err = TournamentDecoder::default()
            .parse_match("Person A vs Person B\n0\n0")
            .unwrap_err();
        assert_eq!(err, DecodeError::MissingHeaderLine);
    }

    #[test]
    fn test_missing_players_line() {
        let err = TournamentDecoder::default()
            .parse_match("Match: 01\nPerson A and Person B\n0")
            .unwrap_err();
        assert_eq!(err, DecodeError::MissingPlayersLine);
    }

    #[test]
    fn test_invalid_point_value() {
        let err = TournamentDecoder::default()
            .parse_match("Match: 01\nPerson A vs Person B\n0\nx\n")
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidPointValue {
                line: "x".to_string()
            }
        );
    }

    #[test]
    fn test_empty_player_name() {
        let err = TournamentDecoder::default()
            .parse_match("Match: 01\nPerson A vs \n0\n")
            .unwrap_err();
        assert!(matches!(err, DecodeError::EmptyMatchData { .. }));
    }

    #[test]
    fn test_empty_match_id() {
        let err = TournamentDecoder::default()
            .parse_match("Match: \nPerson A vs Person B\n0\n")
            .unwrap_err();
        assert!(matches!(err, DecodeError::EmptyMatchData { .. }));
    }

    #[test]
    fn test_one_bad_chunk_fails_everything() {
        let text = format!(
            "Match: 01\nPerson A vs Person B\n{}Match: 02\nPerson A vs Person C\n0\noops\n",
            repeat("0", 48)
        );
        let result = TournamentDecoder::default().parse_matches(&text);
        assert!(matches!(result, Err(DecodeError::InvalidPointValue { .. })));
    }

    #[test]
    fn test_custom_rules() {
        let decoder = TournamentDecoder::new(Arc::new(SetRules::new(1)), Arc::new(MatchRules::new(1)));
        let m = decoder
            .parse_match("Match: 09\nPerson A vs Person B\n1\n1\n1\n1\n")
            .unwrap();

        assert!(m.is_match_end());
        assert_eq!(m.match_winner().as_deref(), Some("Person B defeated Person A"));
    }
}
