//! Core data models for tennis scoring.

mod game;
mod ids;
mod player;
mod rules;
mod set;
mod tennis_match;

pub use game::*;
pub use ids::*;
pub use player::*;
pub use rules::*;
pub use set::*;
pub use tennis_match::*;
