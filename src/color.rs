use crate::direction::Direction;
use crate::rank::Rank;
use std::ops::Not;

/// Represent a color.
#[derive(PartialOrd, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;
/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::White, Color::Black];

impl Color {
    /// Convert the `Color` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Covert the `Color` to a rank, which reperesnts the starting position
    /// for that colors pieces.
    #[inline]
    pub fn to_my_backrank(&self) -> Rank {
        match *self {
            Color::White => Rank::First,
            Color::Black => Rank::Eighth,
        }
    }

    /// Convert a `Color` to my second rank, which represents the starting position for my pawns.
    #[inline]
    pub fn to_second_rank(&self) -> Rank {
        match *self {
            Color::White => Rank::Second,
            Color::Black => Rank::Seventh,
        }
    }

    /// The rank my pawns must stand on to capture en passant.  One more step forward and
    /// they reach the rank an enemy double-step skipped over.
    #[inline]
    pub fn to_en_passant_rank(&self) -> Rank {
        match *self {
            Color::White => Rank::Fifth,
            Color::Black => Rank::Fourth,
        }
    }

    /// The direction my pawns advance in.
    #[inline]
    pub fn forward(&self) -> Direction {
        match *self {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }

    /// The two directions my pawns capture in.
    #[inline]
    pub fn pawn_captures(&self) -> [Direction; 2] {
        match *self {
            Color::White => [Direction::NorthWest, Direction::NorthEast],
            Color::Black => [Direction::SouthWest, Direction::SouthEast],
        }
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}
