//! UCI move notation and `position` command parsing.
//!
//! `cozy-chess` encodes castling as the king capturing its own rook; UCI
//! writes it as the king's two-square step. Conversion happens here.

use cozy_chess::{File, Move, Piece, Square};
use search_core::PositionProvider;

use crate::error::PositionError;
use crate::position::ChessPosition;

impl ChessPosition {
    /// Formats `mv` (legal in this position) in standard UCI notation.
    pub fn move_to_uci(&self, mv: Move) -> String {
        let to = self.uci_target(mv);
        let mut s = format!("{}{}", mv.from, to);
        if let Some(p) = mv.promotion {
            let ch = match p {
                Piece::Queen => 'q',
                Piece::Rook => 'r',
                Piece::Bishop => 'b',
                Piece::Knight => 'n',
                _ => 'q',
            };
            s.push(ch);
        }
        s
    }

    /// Finds the legal move written as `text` in UCI notation.
    pub fn parse_uci_move(&self, text: &str) -> Result<Move, PositionError> {
        // Match against legal moves so castling is translated correctly.
        let text = text.trim();
        self.legal_moves()
            .into_iter()
            .find(|&mv| self.move_to_uci(mv) == text)
            .ok_or_else(|| PositionError::IllegalMove(text.to_string()))
    }

    /// Builds a position from the arguments of a UCI `position` command:
    /// `startpos [moves ...]` or `fen <fields> [moves ...]`.
    pub fn from_uci_position(args: &[&str]) -> Result<Self, PositionError> {
        let (mut pos, rest) = match args.split_first() {
            Some((&"startpos", rest)) => (ChessPosition::startpos(), rest),
            Some((&"fen", rest)) => {
                let end = rest.iter().position(|&a| a == "moves").unwrap_or(rest.len());
                (ChessPosition::from_fen(&rest[..end].join(" "))?, &rest[end..])
            }
            _ => return Err(PositionError::MalformedCommand(args.join(" "))),
        };

        match rest.split_first() {
            None => {}
            Some((&"moves", moves)) => {
                for text in moves {
                    let mv = pos.parse_uci_move(text)?;
                    pos.play(mv)?;
                }
            }
            Some(_) => return Err(PositionError::MalformedCommand(args.join(" "))),
        }
        Ok(pos)
    }

    fn uci_target(&self, mv: Move) -> Square {
        let board = self.board();
        let castles = board.piece_on(mv.from) == Some(Piece::King)
            && board.piece_on(mv.to) == Some(Piece::Rook)
            && board.color_on(mv.to) == board.color_on(mv.from);
        if !castles {
            return mv.to;
        }
        let file = if mv.to.file() as u8 > mv.from.file() as u8 {
            File::G
        } else {
            File::C
        };
        Square::new(file, mv.from.rank())
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
