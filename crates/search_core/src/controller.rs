//! Iterative deepening driver and the public entry point.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, enabled, trace, Level};

use crate::config::SearchConfig;
use crate::error::{ConfigError, SearchError};
use crate::provider::PositionProvider;
use crate::search::SearchState;
use crate::selector::{self, RootRecord};
use crate::time_control::{budget_exceeded, TurnClock};

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// The chosen move, always one of the supplied root moves
    pub best_move: M,
    /// Score of the best move from the searching side's perspective
    pub score: i32,
    /// Depth that produced `score` (0 when no search was needed)
    pub depth: u8,
    /// Number of leaf evaluations
    pub nodes: u64,
    /// Whether the last iteration was cut short by the time budget
    pub stopped: bool,
    /// Root moves, best first
    pub ranking: Vec<RootRecord<M>>,
}

/// Chooses moves by iterative deepening alpha-beta search.
///
/// A `Searcher` keeps only its configuration and tie-break RNG between calls;
/// all search state lives for a single [`Searcher::search`].
#[derive(Debug, Clone)]
pub struct Searcher<R = StdRng> {
    config: SearchConfig,
    rng: R,
}

impl Searcher<StdRng> {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Searcher with reproducible tie-breaks.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl Default for Searcher<StdRng> {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> Searcher<R> {
    /// Fails with [`ConfigError::Invalid`] when `config` does not pass
    /// [`SearchConfig::validate`].
    pub fn with_rng(config: SearchConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Picks a move from `root_moves` for the side to move in `pos`.
    ///
    /// `pos` is mutated during the search and restored before returning.
    pub fn choose_move<P, C>(
        &mut self,
        pos: &mut P,
        root_moves: &[P::Move],
        clock: &C,
    ) -> Result<P::Move, SearchError>
    where
        P: PositionProvider + ?Sized,
        C: TurnClock + ?Sized,
    {
        self.search(pos, root_moves, clock).map(|result| result.best_move)
    }

    /// Like [`Searcher::choose_move`], also reporting score and statistics.
    pub fn search<P, C>(
        &mut self,
        pos: &mut P,
        root_moves: &[P::Move],
        clock: &C,
    ) -> Result<SearchResult<P::Move>, SearchError>
    where
        P: PositionProvider + ?Sized,
        C: TurnClock + ?Sized,
    {
        let Some(&first) = root_moves.first() else {
            return Err(SearchError::NoLegalMoves);
        };

        if root_moves.len() == 1 {
            debug!(mv = ?first, "single legal move, skipping search");
            return Ok(SearchResult {
                best_move: first,
                score: 0,
                depth: 0,
                nodes: 0,
                stopped: false,
                ranking: vec![RootRecord::unscored(first, 0)],
            });
        }

        let config = &self.config;
        let us = pos.side_to_move();
        let mut state = SearchState::new(config, clock, us, root_moves);
        let mut best_move = first;

        for depth in 1..=config.max_depth {
            if depth > 1 && budget_exceeded(clock, config.time_divisor) {
                break;
            }

            let nodes_before = state.nodes();
            state.run_iteration(&mut *pos, depth);
            if let Some(mv) = selector::select(state.root_mut(), &mut self.rng) {
                best_move = mv;
            }

            let top = state.root()[0];
            debug!(
                depth,
                elapsed_ms = clock.elapsed_millis(),
                nodes = state.nodes() - nodes_before,
                score = top.score,
                interrupted = state.stopped(),
                "finished search iteration"
            );
            if enabled!(Level::TRACE) {
                log_ranking(&*pos, state.root());
            }

            if state.stopped() {
                break;
            }
            if top.score > config.win_threshold {
                debug!(score = top.score, "forced win found, stopping early");
                break;
            }
        }

        let top = state.root()[0];
        let nodes = state.nodes();
        let stopped = state.stopped();
        Ok(SearchResult {
            best_move,
            score: top.score,
            depth: top.depth,
            nodes,
            stopped,
            ranking: state.into_root(),
        })
    }
}

fn log_ranking<P>(pos: &P, ranking: &[RootRecord<P::Move>])
where
    P: PositionProvider + ?Sized,
{
    for (rank, record) in ranking.iter().enumerate() {
        trace!(
            rank = rank + 1,
            mv = ?record.mv,
            piece = ?pos.moved_piece(record.mv),
            captures = ?pos.captured_piece(record.mv),
            score = record.score,
            depth = record.depth,
        );
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
