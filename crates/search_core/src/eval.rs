//! Static leaf evaluation: mate distance, draws, then material.

use crate::config::SearchConfig;
use crate::provider::PositionProvider;
use crate::types::{Color, PieceKind};

/// Evaluates `pos` from the point of view of `us`.
///
/// `move_count` is the number of full moves played since the search root and
/// makes nearer mates score more extreme than distant ones:
/// - Checkmate against `us`: `move_count - mate_score`
/// - Checkmate against the opponent: `mate_score - move_count`
/// - Draw: 0
/// - Otherwise: material balance, positive when `us` is ahead
pub fn evaluate<P>(pos: &P, us: Color, move_count: i32, config: &SearchConfig) -> i32
where
    P: PositionProvider + ?Sized,
{
    if pos.is_checkmate() {
        return if pos.side_to_move() == us {
            move_count - config.mate_score
        } else {
            config.mate_score - move_count
        };
    }

    if pos.is_draw() {
        return 0;
    }

    material(pos, us, config)
}

/// Material balance from `us`'s perspective.
pub fn material<P>(pos: &P, us: Color, config: &SearchConfig) -> i32
where
    P: PositionProvider + ?Sized,
{
    let mut score = 0i32;
    for kind in PieceKind::ALL {
        let value = config.piece_values.value(kind);
        let ours = pos.piece_count(us, kind) as i32;
        let theirs = pos.piece_count(us.other(), kind) as i32;
        score += value * (ours - theirs);
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
