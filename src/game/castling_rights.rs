//! # Representation of castling rights

use std::str::FromStr;

use thiserror::Error;

use super::{action::Move, colour::Colour, piece::PieceKind};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
#[error("Unexpected character in castling rights: {0}")]
pub struct CastlingRightsParseError(pub char);

/// Four independent flags: kingside and queenside castling, for each colour.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CastlingRights(u8);
impl CastlingRights {
    const KINGSIDE_BLACK: u8 = 0b0001;
    const QUEENSIDE_BLACK: u8 = 0b0010;
    const KINGSIDE_WHITE: u8 = 0b0100;
    const QUEENSIDE_WHITE: u8 = 0b1000;
    const FULL: u8 =
        Self::KINGSIDE_BLACK | Self::KINGSIDE_WHITE | Self::QUEENSIDE_BLACK | Self::QUEENSIDE_WHITE;
    const EMPTY: u8 = 0;

    /// Full castling rights for both sides.
    pub const fn full() -> Self {
        Self(Self::FULL)
    }

    /// No castling rights for any sides.
    pub const fn none() -> Self {
        Self(Self::EMPTY)
    }

    /// Checks if no one can castle.
    pub const fn is_none(self) -> bool {
        self.0 == Self::EMPTY
    }

    /// Checks if kingside castling is allowed for a certain colour.
    #[inline(always)]
    pub const fn kingside_castle_allowed(self, colour: Colour) -> bool {
        if colour.is_black() {
            self.0 & Self::KINGSIDE_BLACK != 0
        } else {
            self.0 & Self::KINGSIDE_WHITE != 0
        }
    }
    /// Checks if queenside castling is allowed for a certain colour.
    #[inline(always)]
    pub const fn queenside_castle_allowed(self, colour: Colour) -> bool {
        if colour.is_black() {
            self.0 & Self::QUEENSIDE_BLACK != 0
        } else {
            self.0 & Self::QUEENSIDE_WHITE != 0
        }
    }

    /// Disallows kingside for a given side.
    #[inline(always)]
    pub fn disallow_kingside_castle(&mut self, colour: Colour) {
        self.0 &= if colour.is_black() {
            !Self::KINGSIDE_BLACK
        } else {
            !Self::KINGSIDE_WHITE
        }
    }
    /// Disallows queenside for a given side.
    #[inline(always)]
    pub fn disallow_queenside_castle(&mut self, colour: Colour) {
        self.0 &= if colour.is_black() {
            !Self::QUEENSIDE_BLACK
        } else {
            !Self::QUEENSIDE_WHITE
        }
    }
    /// Disallows castling for a given side.
    pub fn disallow(&mut self, colour: Colour) {
        self.0 &= if colour.is_black() {
            !(Self::QUEENSIDE_BLACK | Self::KINGSIDE_BLACK)
        } else {
            !(Self::QUEENSIDE_WHITE | Self::KINGSIDE_WHITE)
        }
    }

    /// Returns the rights remaining once the given move has been played.
    ///
    /// Moving the king forfeits both rights of its colour, moving a rook off its
    /// original corner forfeits the matching one. Capturing a rook on its corner
    /// leaves the opponent's rights untouched.
    pub fn after(mut self, mv: Move) -> Self {
        let Some(piece) = mv.piece_moved() else {
            return self;
        };
        match piece.kind {
            PieceKind::King => self.disallow(piece.colour),
            PieceKind::Rook if mv.start().row() == piece.colour.back_row() => {
                match mv.start().col() {
                    0 => self.disallow_queenside_castle(piece.colour),
                    7 => self.disallow_kingside_castle(piece.colour),
                    _ => (),
                }
            }
            _ => (),
        }
        self
    }
}
impl FromStr for CastlingRights {
    type Err = CastlingRightsParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rights = 0;
        for c in s.chars() {
            match c {
                'k' => rights |= Self::KINGSIDE_BLACK,
                'q' => rights |= Self::QUEENSIDE_BLACK,
                'K' => rights |= Self::KINGSIDE_WHITE,
                'Q' => rights |= Self::QUEENSIDE_WHITE,
                '-' => return Ok(Self(Self::EMPTY)),
                c => return Err(CastlingRightsParseError(c)),
            }
        }
        Ok(Self(rights))
    }
}
impl std::fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return write!(f, "-");
        }

        if self.kingside_castle_allowed(Colour::White) {
            write!(f, "K")?
        }
        if self.queenside_castle_allowed(Colour::White) {
            write!(f, "Q")?
        }
        if self.kingside_castle_allowed(Colour::Black) {
            write!(f, "k")?
        }
        if self.queenside_castle_allowed(Colour::Black) {
            write!(f, "q")?
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::{board::Board, piece::Piece, square::Square};

    fn mv(board: &Board, from: &str, to: &str) -> Move {
        Move::new(
            from.parse::<Square>().unwrap(),
            to.parse::<Square>().unwrap(),
            board,
        )
    }

    #[test]
    fn parse_and_display() {
        for s in ["KQkq", "Kq", "Qk", "K", "-"] {
            let rights: CastlingRights = s.parse().unwrap();
            assert_eq!(rights.to_string(), s);
        }
        assert_eq!(
            "KX".parse::<CastlingRights>(),
            Err(CastlingRightsParseError('X'))
        );
    }

    #[test]
    fn king_move_forfeits_both_sides() {
        let board = Board::initial();
        let rights = CastlingRights::full().after(mv(&board, "e1", "e2"));
        assert!(!rights.kingside_castle_allowed(Colour::White));
        assert!(!rights.queenside_castle_allowed(Colour::White));
        assert!(rights.kingside_castle_allowed(Colour::Black));
        assert!(rights.queenside_castle_allowed(Colour::Black));
    }

    #[test]
    fn rook_move_forfeits_its_side() {
        let board = Board::initial();
        let rights = CastlingRights::full().after(mv(&board, "h8", "h7"));
        assert_eq!(rights.to_string(), "KQq");
        let rights = rights.after(mv(&board, "a1", "a2"));
        assert_eq!(rights.to_string(), "Kq");
    }

    #[test]
    fn rook_captured_at_home_keeps_rights() {
        let mut board = Board::empty();
        board["h8".parse::<Square>().unwrap()] = Some(Piece::new(PieceKind::Rook, Colour::Black));
        board["b2".parse::<Square>().unwrap()] = Some(Piece::new(PieceKind::Bishop, Colour::White));
        let rights = CastlingRights::full().after(mv(&board, "b2", "h8"));
        assert_eq!(rights, CastlingRights::full());
    }
}
