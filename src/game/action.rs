//! # Actions (or moves)

use thiserror::Error;

use super::{
    board::Board,
    piece::{Piece, PieceKind},
    square::{Square, SquareParseError},
};

/// Describes a single transition of the board, with all information needed to
/// undo it.
///
/// Two moves compare equal when they share the same origin and target, whatever
/// their flags or captured piece. This is what allows matching a move built from
/// two user-selected squares against a fully flagged generated move. Under
/// standard rules no two legal moves share the same origin and target, since
/// promotions always go to a queen.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Option<Piece>,
    piece_captured: Option<Piece>,
    is_en_passant: bool,
    is_castle: bool,
    is_pawn_promotion: bool,
}
impl Move {
    /// Creates a new move, reading the moving and captured pieces from the board.
    ///
    /// The promotion flag is set when a pawn lands on its farthest rank.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved = board[start];
        let is_pawn_promotion = piece_moved.is_some_and(|piece| {
            piece.is(PieceKind::Pawn) && end.row() == piece.colour.promotion_row()
        });
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board[end],
            is_en_passant: false,
            is_castle: false,
            is_pawn_promotion,
        }
    }

    /// Creates an en passant capture. The captured piece is the opposing pawn
    /// standing next to the origin, not the (empty) target square.
    pub fn new_en_passant(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved = board[start];
        Self {
            start,
            end,
            piece_moved,
            piece_captured: piece_moved
                .map(|piece| Piece::new(PieceKind::Pawn, piece.colour.inverse())),
            is_en_passant: true,
            is_castle: false,
            is_pawn_promotion: false,
        }
    }

    /// Creates a castle move, described by the two squares the king travels.
    pub fn new_castle(start: Square, end: Square, board: &Board) -> Self {
        Self {
            start,
            end,
            piece_moved: board[start],
            piece_captured: None,
            is_en_passant: false,
            is_castle: true,
            is_pawn_promotion: false,
        }
    }

    /// Returns the square the move originates from.
    #[inline(always)]
    pub const fn start(self) -> Square {
        self.start
    }
    /// Returns the square the move targets.
    #[inline(always)]
    pub const fn end(self) -> Square {
        self.end
    }

    /// Returns the piece being moved.
    #[inline(always)]
    pub const fn piece_moved(self) -> Option<Piece> {
        self.piece_moved
    }
    /// Returns the piece being captured, if any.
    #[inline(always)]
    pub const fn piece_captured(self) -> Option<Piece> {
        self.piece_captured
    }

    /// Checks if this move is a capture (en passant included).
    #[inline(always)]
    pub const fn is_capture(self) -> bool {
        self.piece_captured.is_some()
    }
    #[inline(always)]
    pub const fn is_en_passant(self) -> bool {
        self.is_en_passant
    }
    #[inline(always)]
    pub const fn is_castle(self) -> bool {
        self.is_castle
    }
    #[inline(always)]
    pub const fn is_pawn_promotion(self) -> bool {
        self.is_pawn_promotion
    }

    /// Checks if this move encodes a kingside castle.
    pub const fn is_kingside_castle(self) -> bool {
        self.is_castle && self.end.col() > self.start.col()
    }
    /// Checks if this move encodes a queenside castle.
    pub const fn is_queenside_castle(self) -> bool {
        self.is_castle && self.end.col() < self.start.col()
    }

    /// Pure coordinate rendering of the move, such as `e2e4`.
    pub fn notation(self) -> String {
        self.to_string()
    }
}
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
impl Eq for Move {}
impl std::hash::Hash for Move {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
/// Coordinate notation parsing errors.
pub enum MoveParseError {
    #[error("Expected four characters such as e2e4, got {0}")]
    WrongLength(usize),
    #[error("Invalid square: {0}")]
    InvalidSquare(#[from] SquareParseError),
}

/// Pure coordinate notation move, mainly used for parsing user input.
///
/// These only hold two squares: they are turned into a [`Move`] against a given
/// board with [`CoordinateMove::to_move`].
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
}
impl CoordinateMove {
    /// Builds the candidate move these coordinates describe on the given board.
    pub fn to_move(self, board: &Board) -> Move {
        Move::new(self.from, self.to, board)
    }
}
impl std::fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
impl std::str::FromStr for CoordinateMove {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 4 || !s.is_ascii() {
            return Err(MoveParseError::WrongLength(len));
        }
        Ok(Self {
            from: s[0..2].parse()?,
            to: s[2..4].parse()?,
        })
    }
}
