//! Loaded tournament and the queries answered against it.
//!
//! Two queries are supported:
//! - `Score Match <id>`: winner sentence and set score of one match
//! - `Games Player <name>`: games won and lost by one player

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::calculate::{PlayerStats, PlayerStatsAggregator};
use crate::config::RulesConfig;
use crate::decode::{DecodeError, TournamentDecoder};
use crate::models::{Match, MatchSummary, PlayerRecord};

const AVAILABLE_COMMANDS: &str = "Available commands: Score Match, Games Player";

/// Shown for a match that has no winner yet.
pub const MATCH_IN_PROGRESS: &str = "Match in progress";

/// Errors raised while loading a tournament file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors raised while parsing or answering a query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Unknown query command. {}", AVAILABLE_COMMANDS)]
    UnknownCommand,

    #[error("Invalid query format. Expected: {0}")]
    InvalidFormat(&'static str),

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),
}

/// A parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    ScoreMatch(String),
    GamesPlayer(String),
}

impl Query {
    /// Parse one line of user input.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(QueryError::EmptyQuery),
            ["Score", "Match", id] => Ok(Query::ScoreMatch(id.to_string())),
            ["Score", "Match", ..] => Err(QueryError::InvalidFormat("Score Match <id>")),
            ["Games", "Player", name @ ..] if !name.is_empty() => {
                Ok(Query::GamesPlayer(name.join(" ")))
            }
            ["Games", "Player"] => Err(QueryError::InvalidFormat("Games Player <Player Name>")),
            _ => Err(QueryError::UnknownCommand),
        }
    }
}

/// Every decoded match plus the player tallies built from them.
#[derive(Debug, Clone)]
pub struct Tournament {
    matches: Vec<Match>,
    stats: PlayerStats,
}

impl Tournament {
    /// Decode tournament text. All matches decode or none do.
    pub fn from_text(text: &str, rules: &RulesConfig) -> Result<Self, DecodeError> {
        let decoder = TournamentDecoder::new(rules.set_rules(), rules.match_rules());
        let matches = decoder.parse_matches(text)?;
        let stats = PlayerStatsAggregator::new().aggregate(&matches);
        Ok(Self { matches, stats })
    }

    /// Read and decode a tournament file.
    pub fn load_file(path: &Path, rules: &RulesConfig) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let tournament = Self::from_text(&text, rules)?;
        info!(
            "Loaded {} matches and {} players from {}",
            tournament.matches.len(),
            tournament.stats.len(),
            path.display()
        );
        Ok(tournament)
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn find_match(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id().as_str() == id)
    }

    pub fn summaries(&self) -> Vec<MatchSummary> {
        self.matches.iter().map(Match::summary).collect()
    }

    pub fn player_records(&self) -> Vec<PlayerRecord> {
        self.stats.records()
    }

    /// Answer a query as output lines.
    pub fn answer(&self, query: &Query) -> Result<Vec<String>, QueryError> {
        match query {
            Query::ScoreMatch(id) => {
                let m = self
                    .find_match(id)
                    .ok_or_else(|| QueryError::MatchNotFound(id.clone()))?;
                match m.match_winner() {
                    Some(winner) => Ok(vec![winner, m.match_score()]),
                    None => Ok(vec![MATCH_IN_PROGRESS.to_string()]),
                }
            }
            Query::GamesPlayer(name) => {
                let player = self
                    .stats
                    .get(name)
                    .ok_or_else(|| QueryError::PlayerNotFound(name.clone()))?;
                Ok(vec![format!("{} {}", player.wins(), player.losses())])
            }
        }
    }

    /// Parse and answer one line of input.
    pub fn process_query(&self, input: &str) -> Result<Vec<String>, QueryError> {
        self.answer(&Query::parse(input)?)
    }
}
