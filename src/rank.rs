use crate::error::Error;
use std::fmt;
use std::mem::transmute;
use std::str::FromStr;

/// Describe a rank (row) on a chess board
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

/// How many ranks are there?
pub const NUM_RANKS: usize = 8;

/// Enumerate all ranks
pub const ALL_RANKS: [Rank; NUM_RANKS] = [
    Rank::First,
    Rank::Second,
    Rank::Third,
    Rank::Fourth,
    Rank::Fifth,
    Rank::Sixth,
    Rank::Seventh,
    Rank::Eighth,
];

impl Rank {
    /// Convert a `usize` into a `Rank` (the inverse of to_index).  If the number is > 7, wrap
    /// around.
    #[inline]
    pub fn from_index(i: usize) -> Rank {
        unsafe { transmute((i as u8) & 7) }
    }

    /// Convert this `Rank` into a `usize` between 0 and 7 (inclusive).
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The digit naming this rank.
    #[inline]
    pub fn to_char(&self) -> char {
        (b'1' + self.to_index() as u8) as char
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some('1') => Ok(Rank::First),
            Some('2') => Ok(Rank::Second),
            Some('3') => Ok(Rank::Third),
            Some('4') => Ok(Rank::Fourth),
            Some('5') => Ok(Rank::Fifth),
            Some('6') => Ok(Rank::Sixth),
            Some('7') => Ok(Rank::Seventh),
            Some('8') => Ok(Rank::Eighth),
            _ => Err(Error::InvalidRank),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_is_stable() {
        for (i, rank) in ALL_RANKS.iter().enumerate() {
            assert_eq!(rank.to_index(), i);
            assert_eq!(Rank::from_index(i), *rank);
        }
    }

    #[test]
    fn parse() {
        assert_eq!("8".parse::<Rank>(), Ok(Rank::Eighth));
        assert_eq!("9".parse::<Rank>(), Err(Error::InvalidRank));
        assert_eq!("".parse::<Rank>(), Err(Error::InvalidRank));
    }
}
