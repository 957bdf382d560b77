//! Search Core
//!
//! Time-boxed move selection by iterative deepening alpha-beta minimax.
//! The core knows nothing about the rules of the game: it walks positions
//! through the [`PositionProvider`] trait and reads time from a [`TurnClock`].
//!
//! One call to [`Searcher::choose_move`] runs:
//! - Iterative deepening from depth 1 up to `max_depth`
//! - Alpha-beta minimax with per-node time polling
//! - Mate-distance and material leaf evaluation
//! - A uniform random tie-break between equally scored root moves

pub mod config;
pub mod controller;
pub mod error;
pub mod eval;
pub mod provider;
pub mod search;
pub mod selector;
pub mod time_control;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use eval::{evaluate, material};
pub use provider::*;
pub use search::SearchState;
pub use selector::RootRecord;
pub use time_control::*;
pub use types::*;
