//! Ataxx on a 7x7 board, with a computer opponent and the types used to talk to bots.
pub use ai::*;
pub use board::*;
pub use errors::*;
pub use game::*;
pub use moves::*;
pub use player::*;
pub use protocol_types::*;
pub use score::*;
pub use turn::*;
pub use visualization::*;

pub mod ai;
#[cfg(test)]
mod arbitrary;
mod bitset;
mod board;
mod errors;
mod game;
mod moves;
mod player;
mod protocol_types;
mod score;
mod turn;
mod visualization;
