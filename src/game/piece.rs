//! Piece types encoding.

use super::colour::Colour;

/// The kind of a piece, one of Pawn, Knight, Bishop, Rook, Queen or King. Usually
/// with supplementary information about the colour of the piece, in the form of
/// the type [`Piece`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}
impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pawn => 'p',
                Self::Knight => 'n',
                Self::Bishop => 'b',
                Self::Rook => 'r',
                Self::Queen => 'q',
                Self::King => 'k',
            }
        )
    }
}

/// Complete set of information for identifying a piece.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: Colour,
}
impl Piece {
    #[inline(always)]
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Self { kind, colour }
    }

    /// Checks if this piece is of the given kind, regardless of colour.
    #[inline(always)]
    pub fn is(self, kind: PieceKind) -> bool {
        self.kind == kind
    }
}
/// Uppercase for white pieces, lowercase for black ones.
impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.colour.is_white() {
            write!(f, "{}", self.kind.to_string().to_uppercase())
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_case_follows_colour() {
        assert_eq!(
            Piece::new(PieceKind::Knight, Colour::White).to_string(),
            "N"
        );
        assert_eq!(Piece::new(PieceKind::Knight, Colour::Black).to_string(), "n");
    }
}
