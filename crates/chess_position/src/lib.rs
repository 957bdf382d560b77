//! Chess Position
//!
//! Standard chess rules for `search_core`, backed by `cozy-chess`.
//!
//! ```no_run
//! use chess_position::ChessPosition;
//! use search_core::{PositionProvider, SearchConfig, Searcher, TurnTimer};
//! use std::time::Duration;
//!
//! let mut pos = ChessPosition::from_uci_position(&["startpos", "moves", "e2e4"]).unwrap();
//! let moves = pos.legal_moves();
//! let clock = TurnTimer::start(Duration::from_secs(60));
//! let mv = Searcher::new(SearchConfig::default())
//!     .unwrap()
//!     .choose_move(&mut pos, &moves, &clock)
//!     .unwrap();
//! println!("bestmove {}", pos.move_to_uci(mv));
//! ```

mod error;
mod position;
mod uci;

pub use cozy_chess::Move;
pub use error::PositionError;
pub use position::ChessPosition;
