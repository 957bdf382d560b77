//! Root move ranking and the randomized tie-break.

use rand::seq::SliceRandom;
use rand::Rng;

/// A root move paired with its most recently completed search score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootRecord<M> {
    pub mv: M,
    pub score: i32,
    /// Iteration depth that produced `score`; 0 until the move is searched.
    pub depth: u8,
}

impl<M> RootRecord<M> {
    /// A record that has not been searched yet. `floor` should sit below any
    /// score a search can produce.
    pub fn unscored(mv: M, floor: i32) -> Self {
        Self {
            mv,
            score: floor,
            depth: 0,
        }
    }

    pub fn record(&mut self, score: i32, depth: u8) {
        self.score = score;
        self.depth = depth;
    }
}

/// Sorts records best first: deeper results before shallower ones, then by
/// score. The sort is stable, so equal records keep their previous order.
pub fn rank<M>(records: &mut [RootRecord<M>]) {
    records.sort_by(|a, b| b.depth.cmp(&a.depth).then(b.score.cmp(&a.score)));
}

/// The ranked prefix tied with the top record.
pub fn best_set<M>(ranked: &[RootRecord<M>]) -> &[RootRecord<M>] {
    let Some(top) = ranked.first() else {
        return &[];
    };
    let len = ranked
        .iter()
        .take_while(|r| r.depth == top.depth && r.score == top.score)
        .count();
    &ranked[..len]
}

/// Picks a move uniformly from the whole best set.
pub fn choose<M: Copy, R: Rng + ?Sized>(best: &[RootRecord<M>], rng: &mut R) -> Option<M> {
    best.choose(rng).map(|r| r.mv)
}

/// Ranks `records` in place and picks one of the best moves.
pub fn select<M: Copy, R: Rng + ?Sized>(records: &mut [RootRecord<M>], rng: &mut R) -> Option<M> {
    rank(records);
    choose(best_set(records), rng)
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
