use crate::board::Board;
use crate::color::Color;
use crate::direction::{Direction, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::square_set::{SquareSet, EMPTY};

/// The (file, rank) jumps a knight can make.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The movement rules of one kind of piece.
///
/// Both functions are pure: they read `board` and assume `piece` is the piece standing on
/// `src`.  Neither looks at check.
pub trait PieceType {
    fn is(kind: PieceKind) -> bool;
    fn into_piece_kind() -> PieceKind;

    /// Squares the piece could move to right now, captures included.
    fn valid_moves(board: &Board, src: Square, piece: &Piece) -> SquareSet;

    /// Squares the piece would capture on if an enemy piece stood there.
    fn squares_attacked(board: &Board, src: Square, piece: &Piece) -> SquareSet;
}

pub struct PawnType;
pub struct KnightType;
pub struct BishopType;
pub struct RookType;
pub struct QueenType;
pub struct KingType;

/// Walk from `src` in `direction` until the edge of the board or the first occupied square.
///
/// Returns the empty squares passed over and the blocking square, if there was one.
fn ray(board: &Board, src: Square, direction: Direction) -> (SquareSet, Option<Square>) {
    let mut passed = EMPTY;
    let mut current = src;
    while let Some(next) = board.neighbor(current, direction) {
        if !board.is_empty(next) {
            return (passed, Some(next));
        }
        passed.insert(next);
        current = next;
    }
    (passed, None)
}

fn sliding_moves(board: &Board, src: Square, color: Color, directions: &[Direction]) -> SquareSet {
    let mut result = EMPTY;
    for direction in directions {
        let (passed, blocker) = ray(board, src, *direction);
        result |= passed;
        if let Some(sq) = blocker {
            if board.color_on(sq) == Some(!color) {
                result.insert(sq);
            }
        }
    }
    result
}

fn sliding_attacks(board: &Board, src: Square, directions: &[Direction]) -> SquareSet {
    let mut result = EMPTY;
    for direction in directions {
        let (passed, blocker) = ray(board, src, *direction);
        result |= passed | SquareSet::from_maybe_square(blocker);
    }
    result
}

/// Drop the squares my own pieces stand on.
#[inline]
fn not_friendly(board: &Board, squares: SquareSet, color: Color) -> SquareSet {
    squares & !board.color_combined(color)
}

impl PawnType {
    /// Where could the pawn on `src` capture en passant, if anywhere?
    ///
    /// Only the last move counts: it must be an enemy pawn's double step that ended right
    /// beside `src`, and the square behind that pawn must be empty.
    pub fn en_passant_target(board: &Board, src: Square, color: Color) -> Option<Square> {
        if src.get_rank() != color.to_en_passant_rank() {
            return None;
        }

        let last = board.last_move()?;
        let landed = last.get_dest();
        let victim = board.get_content(landed)?;
        if victim.kind() != PieceKind::Pawn || victim.color() == color {
            return None;
        }
        if !landed.same_rank(src) || !landed.get_file().is_adjacent(src.get_file()) {
            return None;
        }

        let from = last.get_source();
        let distance = from.get_rank().to_index() as i8 - landed.get_rank().to_index() as i8;
        if !from.same_file(landed) || distance.abs() != 2 {
            return None;
        }

        let dest = landed.forward(color)?;
        if board.is_empty(dest) {
            Some(dest)
        } else {
            None
        }
    }
}

impl PieceType for PawnType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Pawn
    }

    fn into_piece_kind() -> PieceKind {
        PieceKind::Pawn
    }

    fn valid_moves(board: &Board, src: Square, piece: &Piece) -> SquareSet {
        let color = piece.color();
        let mut result = EMPTY;

        if let Some(one) = src.forward(color) {
            if board.is_empty(one) {
                result.insert(one);
                if !piece.has_moved() {
                    if let Some(two) = one.forward(color) {
                        if board.is_empty(two) {
                            result.insert(two);
                        }
                    }
                }
            }
        }

        for dest in Self::squares_attacked(board, src, piece) {
            if board.color_on(dest) == Some(!color) {
                result.insert(dest);
            }
        }

        result | SquareSet::from_maybe_square(Self::en_passant_target(board, src, color))
    }

    fn squares_attacked(_board: &Board, src: Square, piece: &Piece) -> SquareSet {
        piece
            .color()
            .pawn_captures()
            .iter()
            .filter_map(|direction| src.neighbor(*direction))
            .collect()
    }
}

impl PieceType for KnightType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Knight
    }

    fn into_piece_kind() -> PieceKind {
        PieceKind::Knight
    }

    fn valid_moves(board: &Board, src: Square, piece: &Piece) -> SquareSet {
        not_friendly(board, Self::squares_attacked(board, src, piece), piece.color())
    }

    fn squares_attacked(_board: &Board, src: Square, _piece: &Piece) -> SquareSet {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|(file, rank)| src.offset(*file, *rank))
            .collect()
    }
}

impl PieceType for BishopType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Bishop
    }

    fn into_piece_kind() -> PieceKind {
        PieceKind::Bishop
    }

    fn valid_moves(board: &Board, src: Square, piece: &Piece) -> SquareSet {
        sliding_moves(board, src, piece.color(), &DIAGONAL)
    }

    fn squares_attacked(board: &Board, src: Square, _piece: &Piece) -> SquareSet {
        sliding_attacks(board, src, &DIAGONAL)
    }
}

impl PieceType for RookType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Rook
    }

    fn into_piece_kind() -> PieceKind {
        PieceKind::Rook
    }

    fn valid_moves(board: &Board, src: Square, piece: &Piece) -> SquareSet {
        sliding_moves(board, src, piece.color(), &ORTHOGONAL)
    }

    fn squares_attacked(board: &Board, src: Square, _piece: &Piece) -> SquareSet {
        sliding_attacks(board, src, &ORTHOGONAL)
    }
}

impl PieceType for QueenType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::Queen
    }

    fn into_piece_kind() -> PieceKind {
        PieceKind::Queen
    }

    fn valid_moves(board: &Board, src: Square, piece: &Piece) -> SquareSet {
        BishopType::valid_moves(board, src, piece) | RookType::valid_moves(board, src, piece)
    }

    fn squares_attacked(board: &Board, src: Square, piece: &Piece) -> SquareSet {
        BishopType::squares_attacked(board, src, piece)
            | RookType::squares_attacked(board, src, piece)
    }
}

impl PieceType for KingType {
    fn is(kind: PieceKind) -> bool {
        kind == PieceKind::King
    }

    fn into_piece_kind() -> PieceKind {
        PieceKind::King
    }

    // No castling here: the king only ever steps to a neighbor.
    fn valid_moves(board: &Board, src: Square, piece: &Piece) -> SquareSet {
        not_friendly(board, Self::squares_attacked(board, src, piece), piece.color())
    }

    fn squares_attacked(board: &Board, src: Square, _piece: &Piece) -> SquareSet {
        ALL_DIRECTIONS
            .iter()
            .filter_map(|direction| board.neighbor(src, *direction))
            .collect()
    }
}
