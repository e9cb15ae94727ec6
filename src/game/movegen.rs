//! Pseudo-legal move generation, one generator per piece kind.

use super::{
    action::Move,
    colour::Colour,
    piece::PieceKind,
    square::{Delta, Square},
    state::GameState,
};

impl GameState {
    /// Returns every move of the side to move that follows the movement rules of
    /// its pieces, whether or not it leaves the king in check. Castling is not
    /// included.
    ///
    /// Squares are visited row by row, columns ascending.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        self.pseudo_legal_moves_for(self.side_to_move())
    }

    pub(super) fn pseudo_legal_moves_for(&self, colour: Colour) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for (origin, piece) in self.board().pieces() {
            if piece.colour != colour {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(origin, colour, &mut moves),
                PieceKind::Knight => self.step_moves(origin, colour, &Delta::KNIGHT_DELTAS, &mut moves),
                PieceKind::Bishop => {
                    self.slider_moves(origin, colour, &Delta::DIAGONAL_DELTAS, &mut moves)
                }
                PieceKind::Rook => {
                    self.slider_moves(origin, colour, &Delta::ORTHOGONAL_DELTAS, &mut moves)
                }
                PieceKind::Queen => {
                    self.slider_moves(origin, colour, &Delta::ORTHOGONAL_DELTAS, &mut moves);
                    self.slider_moves(origin, colour, &Delta::DIAGONAL_DELTAS, &mut moves)
                }
                PieceKind::King => self.step_moves(origin, colour, &Delta::KING_DELTAS, &mut moves),
            }
        }
        moves
    }

    fn pawn_moves(&self, origin: Square, colour: Colour, moves: &mut Vec<Move>) {
        let board = self.board();
        let direction = colour.pawn_direction();

        if let Some(push) = origin.translate(Delta::new(direction, 0)) {
            if board.is_empty(push) {
                moves.push(Move::new(origin, push, board));
                if origin.row() == colour.pawn_row() {
                    if let Some(double_push) = push.translate(Delta::new(direction, 0)) {
                        if board.is_empty(double_push) {
                            moves.push(Move::new(origin, double_push, board))
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            let Some(target) = origin.translate(Delta::new(direction, side)) else {
                continue;
            };
            match board[target] {
                Some(piece) if piece.colour != colour => moves.push(Move::new(origin, target, board)),
                None if self.en_passant() == Some(target) => {
                    moves.push(Move::new_en_passant(origin, target, board))
                }
                _ => (),
            }
        }
    }

    /// Rooks, bishops and queens: walk each ray until the edge of the board, a
    /// friendly piece (excluded) or an enemy piece (included).
    fn slider_moves(&self, origin: Square, colour: Colour, deltas: &[Delta], moves: &mut Vec<Move>) {
        let board = self.board();
        for &delta in deltas {
            let mut current = origin;
            while let Some(target) = current.translate(delta) {
                match board[target] {
                    None => moves.push(Move::new(origin, target, board)),
                    Some(piece) => {
                        if piece.colour != colour {
                            moves.push(Move::new(origin, target, board))
                        }
                        break;
                    }
                }
                current = target;
            }
        }
    }

    /// Knights and kings: fixed offsets, skipping squares held by a friendly piece.
    fn step_moves(&self, origin: Square, colour: Colour, deltas: &[Delta], moves: &mut Vec<Move>) {
        let board = self.board();
        for &delta in deltas {
            if let Some(target) = origin.translate(delta) {
                if !board[target].is_some_and(|piece| piece.colour == colour) {
                    moves.push(Move::new(origin, target, board))
                }
            }
        }
    }

    /// Appends the castle moves available to the king standing on `king`.
    ///
    /// The king may not castle out of check, through an attacked square or onto
    /// one, and every square between king and rook must be empty.
    pub(super) fn castle_moves(&self, king: Square, moves: &mut Vec<Move>) {
        let colour = self.side_to_move();
        let them = colour.inverse();
        if self.square_attacked_by(king, them) {
            return;
        }
        let rights = self.castle_rights();

        if rights.kingside_castle_allowed(colour)
            && self.rook_on(king.row(), 7, colour)
            && self.castle_path_clear(king, &[1, 2], &[1, 2], them)
        {
            if let Some(end) = king.translate(Delta::new(0, 2)) {
                moves.push(Move::new_castle(king, end, self.board()))
            }
        }
        if rights.queenside_castle_allowed(colour)
            && self.rook_on(king.row(), 0, colour)
            && self.castle_path_clear(king, &[-1, -2, -3], &[-1, -2], them)
        {
            if let Some(end) = king.translate(Delta::new(0, -2)) {
                moves.push(Move::new_castle(king, end, self.board()))
            }
        }
    }

    fn rook_on(&self, row: u8, col: u8, colour: Colour) -> bool {
        Square::new(row, col)
            .and_then(|square| self.board()[square])
            .is_some_and(|piece| piece.is(PieceKind::Rook) && piece.colour == colour)
    }

    /// Checks that the squares at the given column offsets from the king are
    /// respectively empty and not attacked.
    fn castle_path_clear(&self, king: Square, empty: &[i8], safe: &[i8], them: Colour) -> bool {
        let along = |offset: i8| king.translate(Delta::new(0, offset));
        empty
            .iter()
            .all(|&offset| along(offset).is_some_and(|square| self.board().is_empty(square)))
            && safe.iter().all(|&offset| {
                along(offset).is_some_and(|square| !self.square_attacked_by(square, them))
            })
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::game::{castling_rights::CastlingRights, piece::Piece};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn targets(moves: &[Move], from: &str) -> Vec<String> {
        let mut targets: Vec<_> = moves
            .iter()
            .filter(|mv| mv.start() == sq(from))
            .map(|mv| mv.end().to_string())
            .collect();
        targets.sort();
        targets
    }

    #[test]
    fn initial_pseudo_legal_moves() {
        let state = GameState::initial();
        let moves = state.pseudo_legal_moves();
        assert_eq!(moves.len(), 20);
        assert_eq!(targets(&moves, "e2"), ["e3", "e4"]);
        assert_eq!(targets(&moves, "b1"), ["a3", "c3"]);
        assert!(targets(&moves, "d1").is_empty());
    }

    #[test]
    fn generation_order_is_row_major() {
        let state = GameState::initial().with_side_to_move(Colour::Black);
        let origins: Vec<_> = state
            .pseudo_legal_moves()
            .iter()
            .map(|mv| (mv.start().row(), mv.start().col()))
            .collect();
        let mut sorted = origins.clone();
        sorted.sort();
        assert_eq!(origins, sorted);
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let mut state = GameState::empty();
        state
            .place(sq("d4"), Piece::new(PieceKind::Rook, Colour::White))
            .unwrap();
        state
            .place(sq("d6"), Piece::new(PieceKind::Pawn, Colour::Black))
            .unwrap();
        state
            .place(sq("f4"), Piece::new(PieceKind::Knight, Colour::White))
            .unwrap();
        let moves = state.pseudo_legal_moves();
        assert_eq!(
            targets(&moves, "d4"),
            ["a4", "b4", "c4", "d1", "d2", "d3", "d5", "d6", "e4"]
        );
        let capture = moves
            .iter()
            .find(|mv| mv.start() == sq("d4") && mv.end() == sq("d6"))
            .unwrap();
        assert_eq!(
            capture.piece_captured(),
            Some(Piece::new(PieceKind::Pawn, Colour::Black))
        );
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let mut state = GameState::empty();
        state
            .place(sq("d4"), Piece::new(PieceKind::Queen, Colour::White))
            .unwrap();
        assert_eq!(state.pseudo_legal_moves().len(), 27);
    }

    #[test]
    fn knight_in_corner() {
        let mut state = GameState::empty().with_side_to_move(Colour::Black);
        state
            .place(sq("h8"), Piece::new(PieceKind::Knight, Colour::Black))
            .unwrap();
        state
            .place(sq("f7"), Piece::new(PieceKind::Pawn, Colour::Black))
            .unwrap();
        assert_eq!(targets(&state.pseudo_legal_moves(), "h8"), ["g6"]);
    }

    #[test]
    fn pawn_captures_and_blocked_pushes() {
        let mut state = GameState::empty();
        state
            .place(sq("e2"), Piece::new(PieceKind::Pawn, Colour::White))
            .unwrap();
        state
            .place(sq("e4"), Piece::new(PieceKind::Knight, Colour::Black))
            .unwrap();
        state
            .place(sq("d3"), Piece::new(PieceKind::Bishop, Colour::Black))
            .unwrap();
        state
            .place(sq("f3"), Piece::new(PieceKind::Bishop, Colour::White))
            .unwrap();
        // Double push blocked on e4, capture on d3 only.
        assert_eq!(targets(&state.pseudo_legal_moves(), "e2"), ["d3", "e3"]);
    }

    #[test]
    fn en_passant_target_is_capturable() {
        let mut state = GameState::empty().with_en_passant(Some(sq("d6")));
        state
            .place(sq("e5"), Piece::new(PieceKind::Pawn, Colour::White))
            .unwrap();
        state
            .place(sq("d5"), Piece::new(PieceKind::Pawn, Colour::Black))
            .unwrap();
        let moves = state.pseudo_legal_moves();
        let en_passant = moves.iter().find(|mv| mv.end() == sq("d6")).unwrap();
        assert!(en_passant.is_en_passant());
        assert_eq!(targets(&moves, "e5"), ["d6", "e6"]);
    }

    #[test]
    fn queenside_castle_needs_three_empty_squares() {
        let mut state = GameState::empty().with_castle_rights(CastlingRights::full());
        for (square, kind) in [
            ("e1", PieceKind::King),
            ("a1", PieceKind::Rook),
            ("b1", PieceKind::Knight),
        ] {
            state.place(sq(square), Piece::new(kind, Colour::White)).unwrap();
        }
        state
            .place(sq("e8"), Piece::new(PieceKind::King, Colour::Black))
            .unwrap();
        let mut castles = vec![];
        state.castle_moves(sq("e1"), &mut castles);
        assert!(castles.is_empty());
    }
}
