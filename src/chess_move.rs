use crate::error::Error;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

/// Represent a ChessMove in memory: the square a piece left and the square it landed on.
///
/// This is also the entry type of the board's move log.
#[derive(Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    source: Square,
    dest: Square,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square` and a destination `Square`.
    #[inline]
    pub fn new(source: Square, dest: Square) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }
}

/// Convert a coordinate notation string to a move.
///
/// ```
/// use chess_rules::{ChessMove, Square};
///
/// let mv: ChessMove = "g1f3".parse().expect("Valid Move");
/// assert_eq!(mv, ChessMove::new(Square::G1, Square::F3));
/// ```
impl FromStr for ChessMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(Error::InvalidMove);
        }
        let source = Square::from_str(&s[0..2]).map_err(|_| Error::InvalidMove)?;
        let dest = Square::from_str(&s[2..4]).map_err(|_| Error::InvalidMove)?;
        Ok(ChessMove::new(source, dest))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

/// What kind of move did `Game::make_move` just apply?
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// The destination was empty.
    Quiet,
    /// The piece on the destination was captured.
    Capture,
    /// A pawn captured en passant; the bypassed pawn was removed.
    EnPassant,
}
