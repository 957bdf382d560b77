//! The narrow interface the search consumes from a game implementation.
//!
//! Everything rule-related (move generation, check and draw detection, piece
//! bookkeeping) lives behind [`PositionProvider`]. The search never copies a
//! position; it mutates one in place and restores it with [`Played`].

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::types::{Color, PieceKind};

/// A mutable game position that the search can walk.
///
/// `apply_move` / `undo_move` must be exact inverses and are always called in
/// strict stack order.
pub trait PositionProvider {
    /// A legal transition. Cheap to copy and immutable once produced.
    type Move: Copy + PartialEq + fmt::Debug;

    /// Appends every legal move of the current position to `moves`.
    fn legal_moves_into(&self, moves: &mut Vec<Self::Move>);

    fn apply_move(&mut self, mv: Self::Move);

    fn undo_move(&mut self, mv: Self::Move);

    /// True when the side to move has been checkmated.
    fn is_checkmate(&self) -> bool;

    /// True when the position is drawn under any rule the provider knows.
    fn is_draw(&self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Number of pieces of `kind` owned by `color`.
    fn piece_count(&self, color: Color, kind: PieceKind) -> u32;

    /// Kind of the piece `mv` would capture in the current position.
    fn captured_piece(&self, _mv: Self::Move) -> Option<PieceKind> {
        None
    }

    /// Kind of the piece `mv` moves in the current position.
    fn moved_piece(&self, _mv: Self::Move) -> Option<PieceKind> {
        None
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);
        moves
    }
}

/// A move applied to a position for the lifetime of the guard.
///
/// Dropping the guard undoes the move, so every exit path out of a search
/// frame (cutoff, timeout, normal return) leaves the position restored.
pub struct Played<'a, P: PositionProvider + ?Sized> {
    pos: &'a mut P,
    mv: P::Move,
}

impl<'a, P: PositionProvider + ?Sized> Played<'a, P> {
    pub fn new(pos: &'a mut P, mv: P::Move) -> Self {
        pos.apply_move(mv);
        Self { pos, mv }
    }

    pub fn mv(&self) -> P::Move {
        self.mv
    }
}

impl<P: PositionProvider + ?Sized> Deref for Played<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pos
    }
}

impl<P: PositionProvider + ?Sized> DerefMut for Played<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: PositionProvider + ?Sized> Drop for Played<'_, P> {
    fn drop(&mut self) {
        self.pos.undo_move(self.mv);
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
