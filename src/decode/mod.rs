//! Decoding raw tournament text into scored matches.
//!
//! The pipeline runs strictly forward:
//! text → point codes → games → sets → match.
//!
//! - **games**: `GameDecoder`, point codes to games
//! - **sets**: `SetAggregator`, games to sets
//! - **tournament**: `TournamentDecoder`, text chunks to matches

mod games;
mod sets;
mod tournament;

pub use games::GameDecoder;
pub use sets::SetAggregator;
pub use tournament::{
    parse_match_header, parse_match_players, split_into_chunks, TournamentDecoder, MATCH_PREFIX,
    PLAYER_SEPARATOR,
};

use thiserror::Error;

/// Errors that can occur while decoding tournament text.
///
/// Every variant is fatal for the whole decode: no partial tournament is
/// returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("No line containing '{}' found", MATCH_PREFIX)]
    MissingHeaderLine,

    #[error("Invalid match format: {line:?}")]
    MalformedHeaderFormat { line: String },

    #[error("No line containing '{}' found", PLAYER_SEPARATOR)]
    MissingPlayersLine,

    #[error("Invalid players format: {line:?}")]
    MalformedPlayersFormat { line: String },

    #[error("Invalid point value: {line:?}")]
    InvalidPointValue { line: String },

    #[error("Failed to parse match data (id {id:?}, players {player_a:?} vs {player_b:?})")]
    EmptyMatchData {
        id: String,
        player_a: String,
        player_b: String,
    },
}
