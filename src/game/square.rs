//! Board coordinates and their algebraic notation.
//!
//! Squares are addressed by `(row, col)`, row 0 being black's back rank (rank 8)
//! and column 0 being the a-file.
use thiserror::Error;

/// Number of rows (and columns) of the board.
pub const BOARD_SIZE: u8 = 8;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
/// Algebraic square name parsing errors.
pub enum SquareParseError {
    #[error("Expected a two character square name, got {0} characters")]
    WrongLength(usize),
    #[error("Invalid file: {0}")]
    InvalidFile(char),
    #[error("Invalid rank: {0}")]
    InvalidRank(char),
}

/// A square on the board. Both coordinates are always within `0..8`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}
impl Square {
    /// Instantiates a new square from its row and column.
    ///
    /// Returns `None` if either coordinate is out of the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row of the square (0 is rank 8).
    #[inline(always)]
    pub const fn row(self) -> u8 {
        self.row
    }
    /// Returns the column of the square (0 is the a-file).
    #[inline(always)]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Translates this square by a given delta.
    ///
    /// Returns `None` if the translation would go out of the board.
    #[inline]
    pub const fn translate(self, delta: Delta) -> Option<Self> {
        let row = self.row as i8 + delta.rows;
        let col = self.col as i8 + delta.cols;
        if row < 0 || col < 0 {
            None
        } else {
            Self::new(row as u8, col as u8)
        }
    }

    /// An iterator over all squares in row-major order, starting at a8.
    pub fn squares_iter() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self { row, col }))
    }

    /// Letter of the file this square sits on.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Digit of the rank this square sits on.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
impl std::str::FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().collect::<Vec<_>>();
        let &[file, rank] = chars.as_slice() else {
            return Err(SquareParseError::WrongLength(chars.len()));
        };
        let col = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return Err(SquareParseError::InvalidFile(file)),
        };
        let row = match rank {
            '1'..='8' => b'8' - rank as u8,
            _ => return Err(SquareParseError::InvalidRank(rank)),
        };
        Ok(Self { row, col })
    }
}

/// Deltas represent directions in which pieces can move, in rows and columns.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Delta {
    pub rows: i8,
    pub cols: i8,
}
impl Delta {
    pub const fn new(rows: i8, cols: i8) -> Self {
        Self { rows, cols }
    }

    pub const ORTHOGONAL_DELTAS: [Self; 4] = [
        Self::new(-1, 0),
        Self::new(0, -1),
        Self::new(1, 0),
        Self::new(0, 1),
    ];
    pub const DIAGONAL_DELTAS: [Self; 4] = [
        Self::new(-1, -1),
        Self::new(-1, 1),
        Self::new(1, -1),
        Self::new(1, 1),
    ];
    pub const KNIGHT_DELTAS: [Self; 8] = [
        Self::new(-2, -1),
        Self::new(-2, 1),
        Self::new(-1, -2),
        Self::new(-1, 2),
        Self::new(1, -2),
        Self::new(1, 2),
        Self::new(2, -1),
        Self::new(2, 1),
    ];
    pub const KING_DELTAS: [Self; 8] = [
        Self::new(-1, -1),
        Self::new(-1, 0),
        Self::new(-1, 1),
        Self::new(0, -1),
        Self::new(0, 1),
        Self::new(1, -1),
        Self::new(1, 0),
        Self::new(1, 1),
    ];
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn algebraic_mapping() {
        assert_eq!("a8".parse::<Square>(), Ok(Square::new(0, 0).unwrap()));
        assert_eq!("h1".parse::<Square>(), Ok(Square::new(7, 7).unwrap()));
        assert_eq!("e2".parse::<Square>(), Ok(Square::new(6, 4).unwrap()));
        assert_eq!(Square::new(4, 3).unwrap().to_string(), "d4");

        for square in Square::squares_iter() {
            assert_eq!(square.to_string().parse::<Square>(), Ok(square));
        }
    }

    #[test]
    fn malformed_names() {
        assert_eq!(
            "e".parse::<Square>(),
            Err(SquareParseError::WrongLength(1))
        );
        assert_eq!(
            "i4".parse::<Square>(),
            Err(SquareParseError::InvalidFile('i'))
        );
        assert_eq!(
            "a9".parse::<Square>(),
            Err(SquareParseError::InvalidRank('9'))
        );
    }

    #[test]
    fn translation_stays_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.translate(Delta::new(-1, 0)), None);
        assert_eq!(corner.translate(Delta::new(0, -1)), None);
        assert_eq!(corner.translate(Delta::new(2, 1)), Square::new(2, 1));
        assert_eq!(Square::new(7, 7).unwrap().translate(Delta::new(1, 1)), None);
        assert_eq!(Square::squares_iter().count(), 64);
    }
}
