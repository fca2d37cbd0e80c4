//! Per-piece move and attack generation.
//!
//! Each piece kind has its own `PieceType` implementation; the functions here look up the
//! piece on a square and dispatch on its kind.

mod piece_type;

pub use self::piece_type::*;

use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::square_set::{SquareSet, EMPTY};

/// Route a query to the rule set of `$piece`'s kind.
macro_rules! dispatch {
    ($func:ident, $board:expr, $src:expr, $piece:expr) => {
        match $piece.kind() {
            PieceKind::Pawn => checked::<PawnType>($piece, PawnType::$func($board, $src, $piece)),
            PieceKind::Knight => {
                checked::<KnightType>($piece, KnightType::$func($board, $src, $piece))
            }
            PieceKind::Bishop => {
                checked::<BishopType>($piece, BishopType::$func($board, $src, $piece))
            }
            PieceKind::Rook => checked::<RookType>($piece, RookType::$func($board, $src, $piece)),
            PieceKind::Queen => {
                checked::<QueenType>($piece, QueenType::$func($board, $src, $piece))
            }
            PieceKind::King => checked::<KingType>($piece, KingType::$func($board, $src, $piece)),
        }
    };
}

#[inline(always)]
fn checked<T: PieceType>(piece: &Piece, result: SquareSet) -> SquareSet {
    debug_assert!(T::is(piece.kind()));
    result
}

/// Pseudo-legal destinations for whatever stands on `src`.  Empty if nothing does.
pub fn valid_moves(board: &Board, src: Square) -> SquareSet {
    match board.get_content(src) {
        Some(piece) => dispatch!(valid_moves, board, src, &piece),
        None => EMPTY,
    }
}

/// Squares attacked by whatever stands on `src`.  Empty if nothing does.
pub fn squares_attacked(board: &Board, src: Square) -> SquareSet {
    match board.get_content(src) {
        Some(piece) => dispatch!(squares_attacked, board, src, &piece),
        None => EMPTY,
    }
}

/// Every square attacked by at least one piece of `color`.
pub fn squares_attacked_by(board: &Board, color: Color) -> SquareSet {
    board
        .color_combined(color)
        .fold(EMPTY, |acc, src| acc | squares_attacked(board, src))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::ChessMove;
    use crate::piece::ALL_PIECE_KINDS;
    use crate::square::ALL_SQUARES;

    fn board_with(pieces: &[(Square, Color, PieceKind)]) -> Board {
        let mut board = Board::new();
        for (sq, color, kind) in pieces {
            board.set_content(*sq, Piece::new(*color, *kind)).unwrap();
        }
        board
    }

    fn set(squares: &[Square]) -> SquareSet {
        squares.iter().cloned().collect()
    }

    #[test]
    fn rule_types_name_their_kind() {
        assert_eq!(PawnType::into_piece_kind(), PieceKind::Pawn);
        assert_eq!(KnightType::into_piece_kind(), PieceKind::Knight);
        assert_eq!(BishopType::into_piece_kind(), PieceKind::Bishop);
        assert_eq!(RookType::into_piece_kind(), PieceKind::Rook);
        assert_eq!(QueenType::into_piece_kind(), PieceKind::Queen);
        assert_eq!(KingType::into_piece_kind(), PieceKind::King);
        for kind in ALL_PIECE_KINDS.iter() {
            let matches = [
                PawnType::is(*kind),
                KnightType::is(*kind),
                BishopType::is(*kind),
                RookType::is(*kind),
                QueenType::is(*kind),
                KingType::is(*kind),
            ];
            assert_eq!(matches.iter().filter(|m| **m).count(), 1);
        }
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::new();
        assert_eq!(valid_moves(&board, Square::E4), EMPTY);
        assert_eq!(squares_attacked(&board, Square::E4), EMPTY);
    }

    #[test]
    fn knight_in_the_center_and_in_corners() {
        let board = board_with(&[(Square::D4, Color::White, PieceKind::Knight)]);
        assert_eq!(valid_moves(&board, Square::D4).len(), 8);

        for corner in [Square::A1, Square::H1, Square::A8, Square::H8].iter() {
            let board = board_with(&[(*corner, Color::Black, PieceKind::Knight)]);
            assert!(valid_moves(&board, *corner).len() <= 2);
        }

        let board = board_with(&[(Square::A1, Color::White, PieceKind::Knight)]);
        assert_eq!(valid_moves(&board, Square::A1), set(&[Square::B3, Square::C2]));
    }

    #[test]
    fn knight_never_lands_on_a_friend_but_still_attacks_it() {
        let board = board_with(&[
            (Square::A1, Color::White, PieceKind::Knight),
            (Square::B3, Color::White, PieceKind::Pawn),
            (Square::C2, Color::Black, PieceKind::Pawn),
        ]);
        assert_eq!(valid_moves(&board, Square::A1), set(&[Square::C2]));
        assert_eq!(
            squares_attacked(&board, Square::A1),
            set(&[Square::B3, Square::C2])
        );
    }

    #[test]
    fn knight_jumps_stay_on_the_board_everywhere() {
        for sq in ALL_SQUARES.iter() {
            let board = board_with(&[(*sq, Color::White, PieceKind::Knight)]);
            for dest in valid_moves(&board, *sq) {
                let df = dest.get_file().to_index() as i8 - sq.get_file().to_index() as i8;
                let dr = dest.get_rank().to_index() as i8 - sq.get_rank().to_index() as i8;
                assert_eq!(df.abs() * dr.abs(), 2);
            }
        }
    }

    #[test]
    fn rook_ray_stops_at_the_first_piece() {
        let board = board_with(&[
            (Square::D4, Color::White, PieceKind::Rook),
            (Square::D6, Color::Black, PieceKind::Pawn),
            (Square::F4, Color::White, PieceKind::Pawn),
        ]);
        let moves = valid_moves(&board, Square::D4);
        assert!(moves.contains(Square::D5));
        assert!(moves.contains(Square::D6));
        assert!(!moves.contains(Square::D7));
        assert!(moves.contains(Square::E4));
        assert!(!moves.contains(Square::F4));
        assert!(!moves.contains(Square::G4));
        assert!(moves.contains(Square::A4));
        assert!(moves.contains(Square::D1));
        assert_eq!(moves.len(), 9);

        let attacks = squares_attacked(&board, Square::D4);
        assert!(attacks.contains(Square::F4));
        assert!(!attacks.contains(Square::G4));
        assert!(attacks.contains(Square::D6));
        assert!(!attacks.contains(Square::D7));
    }

    #[test]
    fn bishop_ray_stops_at_the_first_piece() {
        let board = board_with(&[
            (Square::C1, Color::White, PieceKind::Bishop),
            (Square::D2, Color::White, PieceKind::Pawn),
            (Square::B2, Color::Black, PieceKind::Pawn),
        ]);
        assert_eq!(valid_moves(&board, Square::C1), set(&[Square::B2]));
        assert_eq!(
            squares_attacked(&board, Square::C1),
            set(&[Square::B2, Square::D2])
        );
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let board = board_with(&[(Square::D4, Color::White, PieceKind::Queen)]);
        assert_eq!(valid_moves(&board, Square::D4).len(), 27);

        let board = board_with(&[
            (Square::A1, Color::Black, PieceKind::Queen),
            (Square::A2, Color::Black, PieceKind::Pawn),
            (Square::B2, Color::White, PieceKind::Pawn),
        ]);
        assert_eq!(
            valid_moves(&board, Square::A1),
            set(&[
                Square::B1,
                Square::C1,
                Square::D1,
                Square::E1,
                Square::F1,
                Square::G1,
                Square::H1,
                Square::B2
            ])
        );
    }

    #[test]
    fn king_steps_one_square() {
        let board = board_with(&[
            (Square::E1, Color::White, PieceKind::King),
            (Square::D1, Color::White, PieceKind::Queen),
            (Square::F2, Color::Black, PieceKind::Pawn),
        ]);
        assert_eq!(
            valid_moves(&board, Square::E1),
            set(&[Square::D2, Square::E2, Square::F2, Square::F1])
        );
        assert_eq!(squares_attacked(&board, Square::E1).len(), 5);

        let board = board_with(&[(Square::H8, Color::Black, PieceKind::King)]);
        assert_eq!(valid_moves(&board, Square::H8).len(), 3);
    }

    #[test]
    fn pawn_attacks_diagonals_regardless_of_occupancy() {
        let board = board_with(&[
            (Square::E4, Color::White, PieceKind::Pawn),
            (Square::D5, Color::White, PieceKind::Knight),
        ]);
        assert_eq!(
            squares_attacked(&board, Square::E4),
            set(&[Square::D5, Square::F5])
        );
        assert!(!valid_moves(&board, Square::E4).contains(Square::D5));

        let board = board_with(&[(Square::A7, Color::Black, PieceKind::Pawn)]);
        assert_eq!(squares_attacked(&board, Square::A7), set(&[Square::B6]));
    }

    #[test]
    fn pawn_captures_only_enemies() {
        let mut board = board_with(&[
            (Square::E4, Color::White, PieceKind::Pawn),
            (Square::D5, Color::Black, PieceKind::Bishop),
            (Square::F5, Color::White, PieceKind::Bishop),
        ]);
        assert_eq!(
            valid_moves(&board, Square::E4),
            set(&[Square::D5, Square::E5, Square::E6])
        );

        board.piece_on_mut(Square::E4).unwrap().mark_moved();
        assert_eq!(
            valid_moves(&board, Square::E4),
            set(&[Square::D5, Square::E5])
        );
    }

    #[test]
    fn blocked_pawn_cannot_advance() {
        let board = board_with(&[
            (Square::E2, Color::White, PieceKind::Pawn),
            (Square::E3, Color::Black, PieceKind::Knight),
        ]);
        assert_eq!(valid_moves(&board, Square::E2), EMPTY);

        let board = board_with(&[
            (Square::E2, Color::White, PieceKind::Pawn),
            (Square::E4, Color::Black, PieceKind::Knight),
        ]);
        assert_eq!(valid_moves(&board, Square::E2), set(&[Square::E3]));
    }

    #[test]
    fn en_passant_needs_a_double_step_beside_the_pawn() {
        let mut board = board_with(&[
            (Square::E5, Color::White, PieceKind::Pawn),
            (Square::F7, Color::Black, PieceKind::Pawn),
            (Square::D6, Color::Black, PieceKind::Pawn),
        ]);

        board.move_piece(Square::F7, Square::F5).unwrap();
        assert_eq!(
            PawnType::en_passant_target(&board, Square::E5, Color::White),
            Some(Square::F6)
        );

        // A single step onto the same square does not count.
        board.move_piece(Square::D6, Square::D5).unwrap();
        assert_eq!(
            PawnType::en_passant_target(&board, Square::E5, Color::White),
            None
        );
        assert_eq!(board.last_move(), Some(ChessMove::new(Square::D6, Square::D5)));
    }

    #[test]
    fn en_passant_ignores_own_pawns_and_distant_files() {
        let mut board = board_with(&[
            (Square::D4, Color::Black, PieceKind::Pawn),
            (Square::C2, Color::White, PieceKind::Pawn),
            (Square::F2, Color::White, PieceKind::Pawn),
            (Square::B4, Color::Black, PieceKind::Pawn),
        ]);

        board.move_piece(Square::F2, Square::F4).unwrap();
        assert_eq!(
            PawnType::en_passant_target(&board, Square::D4, Color::Black),
            None
        );

        board.move_piece(Square::C2, Square::C4).unwrap();
        assert_eq!(
            PawnType::en_passant_target(&board, Square::D4, Color::Black),
            Some(Square::C3)
        );
        assert_eq!(
            PawnType::en_passant_target(&board, Square::B4, Color::Black),
            Some(Square::C3)
        );
        assert!(valid_moves(&board, Square::D4).contains(Square::C3));
    }

    #[test]
    fn attacked_by_color() {
        let board = board_with(&[
            (Square::A1, Color::White, PieceKind::Rook),
            (Square::H8, Color::Black, PieceKind::King),
        ]);
        let white = squares_attacked_by(&board, Color::White);
        assert_eq!(white.len(), 14);
        assert!(!white.contains(Square::H8));
        assert_eq!(squares_attacked_by(&board, Color::Black).len(), 3);
    }
}
