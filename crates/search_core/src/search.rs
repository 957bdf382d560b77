//! Alpha-beta minimax over a mutable position.

use crate::config::SearchConfig;
use crate::eval::evaluate;
use crate::provider::{Played, PositionProvider};
use crate::selector::RootRecord;
use crate::time_control::{budget_exceeded, TurnClock};
use crate::types::Color;

/// Per-call search state: the root records, the depth of the running
/// iteration and diagnostics. Created by the controller for one top-level
/// search and dropped when it returns.
pub struct SearchState<'a, M, C: ?Sized> {
    config: &'a SearchConfig,
    clock: &'a C,
    /// Side the search plays for
    us: Color,
    max_depth: u8,
    /// Leaf evaluations across all iterations
    nodes: u64,
    interruptible: bool,
    stopped: bool,
    root: Vec<RootRecord<M>>,
}

impl<'a, M, C> SearchState<'a, M, C>
where
    M: Copy + PartialEq + std::fmt::Debug,
    C: TurnClock + ?Sized,
{
    pub fn new(config: &'a SearchConfig, clock: &'a C, us: Color, root_moves: &[M]) -> Self {
        let root = root_moves
            .iter()
            .map(|&mv| RootRecord::unscored(mv, -config.mate_score))
            .collect();
        Self {
            config,
            clock,
            us,
            max_depth: 0,
            nodes: 0,
            interruptible: false,
            stopped: false,
            root,
        }
    }

    pub fn root(&self) -> &[RootRecord<M>] {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut [RootRecord<M>] {
        &mut self.root
    }

    pub fn into_root(self) -> Vec<RootRecord<M>> {
        self.root
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// True once the time budget cut an iteration short.
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Searches every root move to `depth` plies.
    ///
    /// The first iteration always runs to completion so that every root move
    /// carries a score; later iterations stop as soon as the budget runs out.
    pub fn run_iteration<P>(&mut self, pos: &mut P, depth: u8) -> i32
    where
        P: PositionProvider<Move = M> + ?Sized,
    {
        self.max_depth = depth;
        self.interruptible = depth > 1;
        let bound = self.config.mate_score;
        self.alpha_beta(pos, 1, true, -bound, bound)
    }

    /// Minimax score of `pos` with `ply` half-moves already on the stack.
    ///
    /// Ply 1 walks the root records and writes each completed child's score
    /// back into them. Siblings are skipped once `alpha > beta`, or once the
    /// budget is spent, in which case the best score so far is returned.
    fn alpha_beta<P>(
        &mut self,
        pos: &mut P,
        ply: u16,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32
    where
        P: PositionProvider<Move = M> + ?Sized,
    {
        if ply > u16::from(self.max_depth) {
            return self.leaf(pos, ply);
        }

        let moves: Vec<M> = if ply == 1 {
            self.root.iter().map(|r| r.mv).collect()
        } else {
            pos.legal_moves()
        };
        if moves.is_empty() {
            return self.leaf(pos, ply);
        }

        let bound = self.config.mate_score;
        let mut best = if maximizing { -bound } else { bound };

        for (index, mv) in moves.into_iter().enumerate() {
            if self.out_of_time() {
                break;
            }

            let score = {
                let mut child = Played::new(&mut *pos, mv);
                self.alpha_beta(&mut *child, ply + 1, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            // A subtree cut short by the clock has no trustworthy score.
            if ply == 1 && !self.stopped {
                self.root[index].record(score, self.max_depth);
            }

            if alpha > beta {
                break;
            }
        }

        best
    }

    fn leaf<P>(&mut self, pos: &P, ply: u16) -> i32
    where
        P: PositionProvider<Move = M> + ?Sized,
    {
        self.nodes += 1;
        evaluate(pos, self.us, i32::from(ply / 2), self.config)
    }

    fn out_of_time(&mut self) -> bool {
        if !self.stopped
            && self.interruptible
            && budget_exceeded(self.clock, self.config.time_divisor)
        {
            self.stopped = true;
        }
        self.stopped
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
