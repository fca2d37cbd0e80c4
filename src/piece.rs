use crate::color::Color;
use std::fmt;

/// Represent a kind of chess piece as a very simple enum
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many piece kinds are there?
pub const NUM_PIECE_KINDS: usize = 6;

/// An array representing each piece kind, in order of ascending value.
pub const ALL_PIECE_KINDS: [PieceKind; NUM_PIECE_KINDS] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Convert the `PieceKind` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The lowercase letter for this kind.
    #[inline]
    pub fn to_char(&self) -> char {
        match *self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Do pieces of this kind carry a first-move flag?
    #[inline]
    pub fn tracks_first_move(&self) -> bool {
        *self == PieceKind::Pawn || *self == PieceKind::King
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One piece on the board.
///
/// A `Piece` lives in the board's piece arena for the whole game, so its `has_moved` flag
/// follows the piece from square to square.  Only pawns and kings ever have it set.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[inline]
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece {
            color,
            kind,
            has_moved: false,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Has this pawn or king made its first move?  Always `false` for other kinds.
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Record the first move.  Ignored for kinds that do not track it.
    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        if self.kind.tracks_first_move() {
            self.has_moved = true;
        }
    }

    /// The one-character glyph for this piece.
    #[inline]
    pub fn glyph(&self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
