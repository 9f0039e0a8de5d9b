//! # Tennis Tally
//!
//! Turns a raw log of point outcomes for a tennis tournament into games,
//! sets, matches and per-player game records.
//!
//! ## Architecture
//!
//! - **models**: Core scoring state machines (game, set, match) and rules
//! - **decode**: Point codes → games → sets → matches, plus the text format
//! - **calculate**: Per-player win/loss tallies across all matches
//! - **config**: Configuration loading and validation
//! - **query**: Loaded tournament and the `Score Match` / `Games Player` queries

pub mod calculate;
pub mod config;
pub mod decode;
pub mod models;
pub mod query;

pub use models::*;
