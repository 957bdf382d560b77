//! Synthetic game trees and clocks shared by the unit tests.

use std::cell::Cell;

use rand::Rng;

use crate::config::SearchConfig;
use crate::eval::evaluate;
use crate::provider::{Played, PositionProvider};
use crate::time_control::TurnClock;
use crate::types::{Color, PieceKind};

#[derive(Debug, Clone, Default)]
pub struct Node {
    pub children: Vec<usize>,
    pub mate: bool,
    pub draw: bool,
    /// Piece counts indexed by [color][kind]
    pub material: [[u32; 6]; 2],
}

impl Node {
    /// A node whose material balance is `score` pawns in White's favour.
    pub fn scored(score: i32) -> Self {
        let mut node = Node::default();
        node.material[Color::White.idx()][PieceKind::Pawn.idx()] = score.max(0) as u32;
        node.material[Color::Black.idx()][PieceKind::Pawn.idx()] = (-score).max(0) as u32;
        node
    }

    pub fn mate() -> Self {
        Node {
            mate: true,
            ..Node::default()
        }
    }

    pub fn draw() -> Self {
        Node {
            draw: true,
            ..Node::default()
        }
    }
}

/// An explicit game tree. Moves are child node indices; the side to move
/// alternates with depth starting from `root_side`.
#[derive(Debug, Clone)]
pub struct TreeGame {
    nodes: Vec<Node>,
    root_side: Color,
    path: Vec<usize>,
    pub applied: usize,
    pub terminal_queries: Cell<u64>,
}

impl TreeGame {
    pub fn new(root_side: Color, root: Node) -> Self {
        Self {
            nodes: vec![root],
            root_side,
            path: vec![0],
            applied: 0,
            terminal_queries: Cell::new(0),
        }
    }

    pub fn add(&mut self, parent: usize, node: Node) -> usize {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.nodes[parent].children.push(id);
        id
    }

    /// Adds one child per score under `parent`.
    pub fn add_scored(&mut self, parent: usize, scores: &[i32]) -> Vec<usize> {
        scores
            .iter()
            .map(|&s| self.add(parent, Node::scored(s)))
            .collect()
    }

    /// A random tree up to `height` plies deep with some mates and draws.
    pub fn random<R: Rng>(rng: &mut R, root_side: Color, height: u8, max_branching: usize) -> Self {
        let mut game = TreeGame::new(root_side, Node::scored(rng.gen_range(-3..=3)));
        game.grow(rng, 0, height, max_branching);
        game
    }

    fn grow<R: Rng>(&mut self, rng: &mut R, parent: usize, height: u8, max_branching: usize) {
        if height == 0 {
            return;
        }
        let branching = rng.gen_range(2..=max_branching.max(2));
        for _ in 0..branching {
            let roll = rng.gen_range(0..20);
            let node = match roll {
                0 => Node::mate(),
                1 => Node::draw(),
                _ => Node::scored(rng.gen_range(-6..=6)),
            };
            let terminal = node.mate || node.draw;
            let child = self.add(parent, node);
            if !terminal {
                self.grow(rng, child, height - 1, max_branching);
            }
        }
    }

    pub fn root_moves(&self) -> Vec<usize> {
        self.nodes[0].children.clone()
    }

    pub fn current(&self) -> usize {
        *self.path.last().unwrap()
    }

    pub fn at_root(&self) -> bool {
        self.path == [0]
    }
}

impl PositionProvider for TreeGame {
    type Move = usize;

    fn legal_moves_into(&self, moves: &mut Vec<usize>) {
        moves.extend_from_slice(&self.nodes[self.current()].children);
    }

    fn apply_move(&mut self, mv: usize) {
        assert!(
            self.nodes[self.current()].children.contains(&mv),
            "illegal move {mv} from node {}",
            self.current()
        );
        self.path.push(mv);
        self.applied += 1;
    }

    fn undo_move(&mut self, mv: usize) {
        assert_eq!(self.path.pop(), Some(mv), "undo out of order");
        assert!(!self.path.is_empty(), "undo past the root");
    }

    fn is_checkmate(&self) -> bool {
        self.terminal_queries.set(self.terminal_queries.get() + 1);
        self.nodes[self.current()].mate
    }

    fn is_draw(&self) -> bool {
        self.nodes[self.current()].draw
    }

    fn side_to_move(&self) -> Color {
        if (self.path.len() - 1) % 2 == 0 {
            self.root_side
        } else {
            self.root_side.other()
        }
    }

    fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        self.nodes[self.current()].material[color.idx()][kind.idx()]
    }
}

/// A clock that advances one millisecond every time it is read, so time
/// pressure is deterministic: the budget is exceeded after `allowed` polls.
pub struct StepClock {
    reads: Cell<u64>,
    allowed: u64,
    divisor: u64,
}

impl StepClock {
    pub fn new(allowed: u64, divisor: u64) -> Self {
        Self {
            reads: Cell::new(0),
            allowed,
            divisor,
        }
    }

    pub fn reads(&self) -> u64 {
        self.reads.get()
    }
}

impl TurnClock for StepClock {
    fn elapsed_millis(&self) -> u64 {
        let now = self.reads.get() + 1;
        self.reads.set(now);
        now
    }

    fn remaining_millis(&self) -> u64 {
        self.allowed * self.divisor
    }
}

/// Plain minimax without pruning, using the same leaf rules as the search.
pub fn minimax<P>(
    pos: &mut P,
    us: Color,
    config: &SearchConfig,
    ply: u16,
    max_depth: u8,
    maximizing: bool,
) -> i32
where
    P: PositionProvider,
{
    if ply > u16::from(max_depth) {
        return evaluate(pos, us, i32::from(ply / 2), config);
    }
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return evaluate(pos, us, i32::from(ply / 2), config);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let mut child = Played::new(&mut *pos, mv);
        let score = minimax(&mut *child, us, config, ply + 1, max_depth, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Exhaustive score of every root move at `max_depth`.
pub fn root_scores<P>(pos: &mut P, config: &SearchConfig, max_depth: u8) -> Vec<(P::Move, i32)>
where
    P: PositionProvider,
{
    let us = pos.side_to_move();
    pos.legal_moves()
        .into_iter()
        .map(|mv| {
            let mut child = Played::new(&mut *pos, mv);
            (mv, minimax(&mut *child, us, config, 2, max_depth, false))
        })
        .collect()
}
