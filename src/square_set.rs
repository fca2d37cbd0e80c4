use crate::file::File;
use crate::rank::Rank;
use crate::square::*;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// A set of squares, one bit per square, with bit `n` standing for the square of index `n`.
///
/// Every move and attack query answers with one of these.  Iterating yields the squares in
/// ascending index order (a1, b1, ..., h8).
///
/// ```
/// use chess_rules::{Square, SquareSet};
///
/// let set: SquareSet = [Square::E3, Square::E4].iter().cloned().collect();
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Square::E4));
/// assert_eq!(set.collect::<Vec<_>>(), vec![Square::E3, Square::E4]);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Clone, Copy, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareSet(pub u64);

/// The set with no squares.  `!EMPTY` is the whole board.
pub const EMPTY: SquareSet = SquareSet(0);

impl BitAnd for SquareSet {
    type Output = SquareSet;

    fn bitand(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 & other.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    fn bitor(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, other: SquareSet) {
        self.0 |= other.0;
    }
}

impl Not for SquareSet {
    type Output = SquareSet;

    fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

/// Draws the set as a board, rank 8 at the top, `X` for members.
impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s: String = "".to_owned();
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = Square::make_square(Rank::from_index(rank), File::from_index(file));
                if self.contains(sq) {
                    s.push_str("X ");
                } else {
                    s.push_str(". ");
                }
            }
            s.push('\n');
        }
        write!(f, "{}", s)
    }
}

impl SquareSet {
    /// Construct a new `SquareSet` with a particular `Square` set
    #[inline]
    pub fn from_square(sq: Square) -> SquareSet {
        SquareSet(1u64 << sq.to_index())
    }

    /// Convert an `Option<Square>` to a `SquareSet`, empty for `None`
    #[inline]
    pub fn from_maybe_square(sq: Option<Square>) -> SquareSet {
        sq.map(SquareSet::from_square).unwrap_or(EMPTY)
    }

    /// Is `sq` a member?
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.0 & (1u64 << sq.to_index()) != 0
    }

    /// Add `sq` to the set.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.to_index();
    }

    /// Count the number of `Squares` in this set
    #[inline]
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The lowest-index member, if any.
    #[inline]
    pub fn first(&self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::new(self.0.trailing_zeros() as u8)
        }
    }
}

/// For the `SquareSet`, iterate over every `Square` in it.
impl Iterator for SquareSet {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let result = self.first()?;
        // Clear the lowest set bit.
        self.0 &= self.0 - 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len() as usize;
        (n, Some(n))
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut result = EMPTY;
        for sq in iter {
            result.insert(sq);
        }
        result
    }
}
