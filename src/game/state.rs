//! Main API to represent and interact with a game of chess.
//!
//! This includes making, unmaking and generating moves, as well as detecting
//! checkmates and stalemates.

use thiserror::Error;

use super::{
    action::Move,
    board::Board,
    castling_rights::CastlingRights,
    colour::{Colour, NUM_COLOURS},
    piece::{Piece, PieceKind},
    square::Square,
};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
/// Errors raised when setting up a position piece by piece.
pub enum PlaceError {
    #[error("Square {square} is already occupied by {piece}")]
    SquareOccupied { square: Square, piece: Piece },
    #[error("There already is a {0} king on the board")]
    TooManyKings(Colour),
}

/// The state of a game: board, side to move, history and terminal flags.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Colour,

    move_log: Vec<Move>,
    // Starts with the initial rights, so it always holds one more entry than
    // the move log.
    castle_rights_log: Vec<CastlingRights>,
    castle_rights: CastlingRights,
    // En passant target in effect before each move of the log.
    en_passant_log: Vec<Option<Square>>,
    en_passant: Option<Square>,

    king_squares: [Option<Square>; NUM_COLOURS],

    checkmate: bool,
    stalemate: bool,
}
impl Default for GameState {
    /// The initial position of chess.
    fn default() -> Self {
        Self::initial()
    }
}
impl GameState {
    /// A position with no pieces, white to move and no castling rights.
    pub fn empty() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Colour::White,
            move_log: vec![],
            castle_rights_log: vec![CastlingRights::none()],
            castle_rights: CastlingRights::none(),
            en_passant_log: vec![],
            en_passant: None,
            king_squares: [None; NUM_COLOURS],
            checkmate: false,
            stalemate: false,
        }
    }

    /// The initial position of chess.
    pub fn initial() -> Self {
        let board = Board::initial();
        let mut king_squares = [None; NUM_COLOURS];
        for (square, piece) in board.pieces() {
            if piece.is(PieceKind::King) {
                king_squares[piece.colour as usize] = Some(square);
            }
        }
        Self {
            board,
            king_squares,
            castle_rights_log: vec![CastlingRights::full()],
            castle_rights: CastlingRights::full(),
            ..Self::empty()
        }
    }

    /// Adds a piece on the board on the given square.
    /// # Errors
    /// Returns an error if the square is not empty, or when trying to place a second
    /// king for any side.
    pub fn place(&mut self, square: Square, piece: Piece) -> Result<(), PlaceError> {
        if let Some(occupying) = self.board[square] {
            return Err(PlaceError::SquareOccupied {
                square,
                piece: occupying,
            });
        }
        if piece.is(PieceKind::King) {
            let king = &mut self.king_squares[piece.colour as usize];
            if king.is_some() {
                return Err(PlaceError::TooManyKings(piece.colour));
            }
            *king = Some(square);
        }
        self.board[square] = Some(piece);
        Ok(())
    }

    /// Sets the side to move. Only meaningful before any move was played.
    pub fn with_side_to_move(mut self, colour: Colour) -> Self {
        self.side_to_move = colour;
        self
    }

    /// Sets the castling rights, resetting their history. Only meaningful before
    /// any move was played.
    pub fn with_castle_rights(mut self, rights: CastlingRights) -> Self {
        self.castle_rights = rights;
        self.castle_rights_log = vec![rights];
        self
    }

    /// Sets the en passant target square. Only meaningful before any move was
    /// played.
    pub fn with_en_passant(mut self, target: Option<Square>) -> Self {
        self.en_passant = target;
        self
    }

    /// Returns the board, for rendering purposes.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current side to move.
    #[inline]
    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    /// Returns every move played so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Returns the last move played, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().copied()
    }

    /// Returns the current castling rights.
    #[inline]
    pub fn castle_rights(&self) -> CastlingRights {
        self.castle_rights
    }

    /// Returns the history of castling rights, one entry per ply plus the initial one.
    #[inline]
    pub fn castle_rights_log(&self) -> &[CastlingRights] {
        &self.castle_rights_log
    }

    /// Returns the square a pawn may currently capture en passant onto.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns the position of the king of the given colour.
    #[inline]
    pub fn king_square(&self, colour: Colour) -> Option<Square> {
        self.king_squares[colour as usize]
    }

    /// Whether the side to move was found checkmated by the last call to
    /// [`GameState::legal_moves`].
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Whether the side to move was found stalemated by the last call to
    /// [`GameState::legal_moves`].
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Plays a move on the board.
    ///
    /// No legality check is performed: callers should only pass moves obtained
    /// from [`GameState::legal_moves`].
    pub fn apply(&mut self, mv: Move) {
        log::trace!("apply {mv}");
        let (start, end) = (mv.start(), mv.end());

        self.board[start] = None;
        self.board[end] = mv.piece_moved();
        self.move_log.push(mv);
        self.side_to_move.invert();

        if let Some(piece) = mv.piece_moved() {
            if piece.is(PieceKind::King) {
                self.king_squares[piece.colour as usize] = Some(end);
            }
            if mv.is_pawn_promotion() {
                self.board[end] = Some(Piece::new(PieceKind::Queen, piece.colour));
            }
        }

        if mv.is_en_passant() {
            if let Some(passed) = Square::new(start.row(), end.col()) {
                self.board[passed] = None;
            }
        }

        self.en_passant_log.push(self.en_passant);
        self.en_passant = match mv.piece_moved() {
            Some(piece) if piece.is(PieceKind::Pawn) && start.row().abs_diff(end.row()) == 2 => {
                Square::new((start.row() + end.row()) / 2, start.col())
            }
            _ => None,
        };

        if mv.is_castle() {
            if let Some((rook_origin, rook_target)) = Self::castle_rook_squares(mv) {
                self.board[rook_target] = self.board[rook_origin].take();
            }
        }

        self.castle_rights = self.castle_rights.after(mv);
        self.castle_rights_log.push(self.castle_rights);
    }

    /// Undoes the effects of the last move played, restoring the position as it
    /// was prior to the move.
    ///
    /// If no moves were played prior to calling this function, nothing happens.
    pub fn undo(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        log::trace!("undo {mv}");
        let (start, end) = (mv.start(), mv.end());

        self.board[start] = mv.piece_moved();
        self.board[end] = mv.piece_captured();
        self.side_to_move.invert();

        if let Some(piece) = mv.piece_moved() {
            if piece.is(PieceKind::King) {
                self.king_squares[piece.colour as usize] = Some(start);
            }
        }

        if mv.is_en_passant() {
            self.board[end] = None;
            if let Some(passed) = Square::new(start.row(), end.col()) {
                self.board[passed] = mv.piece_captured();
            }
        }
        self.en_passant = self.en_passant_log.pop().flatten();

        self.castle_rights_log.pop();
        if let Some(&rights) = self.castle_rights_log.last() {
            self.castle_rights = rights;
        }

        if mv.is_castle() {
            if let Some((rook_origin, rook_target)) = Self::castle_rook_squares(mv) {
                self.board[rook_origin] = self.board[rook_target].take();
            }
        }
    }

    /// Origin and target of the rook taking part in a castle move.
    fn castle_rook_squares(mv: Move) -> Option<(Square, Square)> {
        let row = mv.start().row();
        if mv.is_kingside_castle() {
            Some((Square::new(row, 7)?, Square::new(row, mv.end().col() - 1)?))
        } else {
            Some((Square::new(row, 0)?, Square::new(row, mv.end().col() + 1)?))
        }
    }

    /// Returns every legal move for the side to move, refreshing the checkmate and
    /// stalemate flags along the way.
    ///
    /// Each candidate is played and taken back to check whether it leaves the
    /// mover's king attacked.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let saved_en_passant = self.en_passant;
        let saved_castle_rights = self.castle_rights;
        let us = self.side_to_move;

        let mut moves = self.pseudo_legal_moves();
        if let Some(king) = self.king_square(us) {
            self.castle_moves(king, &mut moves);
        }

        moves.retain(|&mv| {
            self.apply(mv);
            let safe = !self
                .king_square(us)
                .is_some_and(|king| self.square_attacked_by(king, us.inverse()));
            self.undo();
            safe
        });

        self.en_passant = saved_en_passant;
        self.castle_rights = saved_castle_rights;

        self.checkmate = false;
        self.stalemate = false;
        if moves.is_empty() {
            if self.in_check() {
                log::debug!("{us} is checkmated");
                self.checkmate = true;
            } else {
                log::debug!("{us} is stalemated");
                self.stalemate = true;
            }
        }
        moves
    }

    /// Checks if the king of the side to move is attacked.
    pub fn in_check(&self) -> bool {
        self.king_square(self.side_to_move)
            .is_some_and(|king| self.square_attacked(king))
    }

    /// Checks if the opponent of the side to move could move to the given square.
    ///
    /// A square counts as attacked when it is the target of one of the opponent's
    /// pseudo-legal moves (castling excluded).
    pub fn square_attacked(&self, square: Square) -> bool {
        self.square_attacked_by(square, self.side_to_move.inverse())
    }

    pub(super) fn square_attacked_by(&self, square: Square, attacker: Colour) -> bool {
        self.pseudo_legal_moves_for(attacker)
            .iter()
            .any(|mv| mv.end() == square)
    }
}
impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f, "side to move: {}", self.side_to_move)?;
        writeln!(f, "castling rights: {}", self.castle_rights)?;
        writeln!(
            f,
            "en passant: {}",
            if let Some(square) = self.en_passant {
                square.to_string()
            } else {
                "-".to_string()
            }
        )?;
        write!(f, "moves played: {}", self.move_log.len())
    }
}
impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn undo_on_fresh_game_is_noop() {
        let mut state = GameState::initial();
        state.undo();
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn apply_flips_side_and_logs() {
        let mut state = GameState::initial();
        let mv = Move::new(sq("e2"), sq("e4"), state.board());
        state.apply(mv);
        assert_eq!(state.side_to_move(), Colour::Black);
        assert_eq!(state.last_move(), Some(mv));
        assert_eq!(state.en_passant(), Some(sq("e3")));
        assert_eq!(state.castle_rights_log().len(), state.move_log().len() + 1);

        state.apply(Move::new(sq("g8"), sq("f6"), state.board()));
        assert_eq!(state.en_passant(), None);
    }

    #[test]
    fn king_cache_follows_king() {
        let mut state = GameState::initial();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("e1", "e2")] {
            state.apply(Move::new(sq(from), sq(to), state.board()));
        }
        assert_eq!(state.king_square(Colour::White), Some(sq("e2")));
        assert!(!state.castle_rights().kingside_castle_allowed(Colour::White));
        state.undo();
        assert_eq!(state.king_square(Colour::White), Some(sq("e1")));
        assert_eq!(state.castle_rights(), CastlingRights::full());
    }

    #[test]
    fn place_errors() {
        let mut state = GameState::empty();
        let king = Piece::new(PieceKind::King, Colour::Black);
        state.place(sq("e8"), king).unwrap();
        assert_eq!(
            state.place(sq("e8"), Piece::new(PieceKind::Rook, Colour::White)),
            Err(PlaceError::SquareOccupied {
                square: sq("e8"),
                piece: king
            })
        );
        assert_eq!(
            state.place(sq("a1"), king),
            Err(PlaceError::TooManyKings(Colour::Black))
        );
        assert_eq!(state.king_square(Colour::Black), Some(sq("e8")));
    }

    #[test]
    fn kingless_positions_are_never_in_check() {
        let mut state = GameState::empty();
        state
            .place(sq("d4"), Piece::new(PieceKind::Rook, Colour::White))
            .unwrap();
        assert!(!state.in_check());
        assert_eq!(state.legal_moves().len(), 14);
    }
}
