use cozy_chess::{Board, GameStatus, Move, Piece};
use search_core::{Color, PieceKind, PositionProvider};

use crate::error::PositionError;

/// A chess game position that the search can mutate in place.
///
/// Applied moves are recorded in an undo log holding the board before each
/// move, so `undo_move` is an exact restore. The hash of every position
/// reached in the game (including ones reached inside the search) is kept
/// for repetition detection.
#[derive(Debug, Clone)]
pub struct ChessPosition {
    board: Board,
    undo: Vec<(Board, Move)>,
    history: Vec<u64>,
}

impl ChessPosition {
    pub fn new(board: Board) -> Self {
        let history = vec![board.hash()];
        Self {
            board,
            undo: Vec::new(),
            history,
        }
    }

    pub fn startpos() -> Self {
        Self::new(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board = fen
            .trim()
            .parse::<Board>()
            .map_err(|_| PositionError::InvalidFen(fen.to_string()))?;
        Ok(Self::new(board))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays a game move permanently. The move is checked for legality and
    /// becomes part of the repetition history.
    pub fn play(&mut self, mv: Move) -> Result<(), PositionError> {
        if !self.board.is_legal(mv) {
            return Err(PositionError::IllegalMove(format!("{mv}")));
        }
        self.board.play_unchecked(mv);
        self.history.push(self.board.hash());
        Ok(())
    }

    /// Number of times the current position has occurred in the game.
    pub fn repetitions(&self) -> usize {
        let key = self.board.hash();
        self.history.iter().filter(|&&k| k == key).count()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// Neither side can possibly deliver mate: bare kings, a single minor
    /// piece, or only bishops that all stand on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy =
            board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = board.pieces(Piece::Knight);
        let bishops = board.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }
        let mut shades = bishops
            .into_iter()
            .map(|sq| (sq.file() as u8 + sq.rank() as u8) % 2);
        let first = shades.next();
        shades.all(|shade| Some(shade) == first)
    }

    /// Depth of the search-side undo log.
    pub fn ply(&self) -> usize {
        self.undo.len()
    }
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::startpos()
    }
}

impl PositionProvider for ChessPosition {
    type Move = Move;

    fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
    }

    fn apply_move(&mut self, mv: Move) {
        self.undo.push((self.board.clone(), mv));
        self.board.play_unchecked(mv);
        self.history.push(self.board.hash());
    }

    fn undo_move(&mut self, mv: Move) {
        debug_assert_eq!(self.undo.last().map(|(_, m)| *m), Some(mv), "undo out of order");
        if let Some((board, _)) = self.undo.pop() {
            self.board = board;
            self.history.pop();
        }
    }

    fn is_checkmate(&self) -> bool {
        self.board.status() == GameStatus::Won
    }

    fn is_draw(&self) -> bool {
        self.board.status() == GameStatus::Drawn
            || self.is_fifty_move_draw()
            || self.repetitions() >= 3
            || self.is_insufficient_material()
    }

    fn side_to_move(&self) -> Color {
        color_of(self.board.side_to_move())
    }

    fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        self.board
            .colored_pieces(cozy_color(color), cozy_piece(kind))
            .len()
    }

    fn captured_piece(&self, mv: Move) -> Option<PieceKind> {
        let us = self.board.side_to_move();
        match self.board.color_on(mv.to) {
            Some(color) if color != us => self.board.piece_on(mv.to).map(kind_of),
            // Castling is encoded as the king capturing its own rook.
            Some(_) => None,
            None => {
                let pawn = self.board.piece_on(mv.from) == Some(Piece::Pawn);
                (pawn && mv.from.file() != mv.to.file()).then_some(PieceKind::Pawn)
            }
        }
    }

    fn moved_piece(&self, mv: Move) -> Option<PieceKind> {
        self.board.piece_on(mv.from).map(kind_of)
    }
}

fn color_of(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

fn cozy_color(color: Color) -> cozy_chess::Color {
    match color {
        Color::White => cozy_chess::Color::White,
        Color::Black => cozy_chess::Color::Black,
    }
}

fn kind_of(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

fn cozy_piece(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
        PieceKind::King => Piece::King,
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
