//! The 8x8 grid of squares the game is played on.

use super::{
    colour::Colour,
    piece::{Piece, PieceKind},
    square::{Square, BOARD_SIZE},
};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mailbox representation of the board: every square is either empty or holds
/// a piece. Row 0 is black's back rank and row 7 white's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board([[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize]);
impl Default for Board {
    /// A board with no pieces.
    fn default() -> Self {
        Self([[None; BOARD_SIZE as usize]; BOARD_SIZE as usize])
    }
}
impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The initial set-up of chess.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for colour in [Colour::White, Colour::Black] {
            let back = colour.back_row() as usize;
            let pawns = colour.pawn_row() as usize;
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.0[back][col] = Some(Piece::new(kind, colour));
                board.0[pawns][col] = Some(Piece::new(PieceKind::Pawn, colour));
            }
        }
        board
    }

    /// Checks if a square is empty.
    #[inline(always)]
    pub fn is_empty(&self, square: Square) -> bool {
        self[square].is_none()
    }

    /// Iterator over the rows of the board, from row 0 (rank 8) to row 7 (rank 1).
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; BOARD_SIZE as usize]> {
        self.0.iter()
    }

    /// Iterator over every occupied square along with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::squares_iter().filter_map(|square| self[square].map(|piece| (square, piece)))
    }
}
impl std::ops::Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, square: Square) -> &Self::Output {
        &self.0[square.row() as usize][square.col() as usize]
    }
}
impl std::ops::IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.0[square.row() as usize][square.col() as usize]
    }
}
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, squares) in self.rows().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for square in squares {
                match square {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn initial_setup() {
        let board = Board::initial();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board["e1".parse().unwrap()],
            Some(Piece::new(PieceKind::King, Colour::White))
        );
        assert_eq!(
            board["d8".parse().unwrap()],
            Some(Piece::new(PieceKind::Queen, Colour::Black))
        );
        assert_eq!(
            board["a7".parse().unwrap()],
            Some(Piece::new(PieceKind::Pawn, Colour::Black))
        );
        assert!(board.is_empty("e4".parse().unwrap()));
    }

    #[test]
    fn display() {
        let rendered = Board::initial().to_string();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("8 r n b q k b n r "));
        assert_eq!(lines.last(), Some("  a b c d e f g h"));
    }
}
