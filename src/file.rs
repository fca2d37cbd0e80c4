use crate::error::Error;
use std::fmt;
use std::mem::transmute;
use std::str::FromStr;

/// Describe a file (column) on a chess board
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// How many files are there?
pub const NUM_FILES: usize = 8;

/// Enumerate all files
pub const ALL_FILES: [File; NUM_FILES] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

impl File {
    /// Convert a `usize` into a `File` (the inverse of to_index).  If i > 7, wrap around.
    #[inline]
    pub fn from_index(i: usize) -> File {
        unsafe { transmute((i as u8) & 7) }
    }

    /// Convert this `File` into a `usize` from 0 to 7 inclusive.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Are these two files next to each other?
    #[inline]
    pub fn is_adjacent(&self, other: File) -> bool {
        (self.to_index() as i8 - other.to_index() as i8).abs() == 1
    }

    /// The lowercase letter naming this file.
    #[inline]
    pub fn to_char(&self) -> char {
        (b'a' + self.to_index() as u8) as char
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some('a') => Ok(File::A),
            Some('b') => Ok(File::B),
            Some('c') => Ok(File::C),
            Some('d') => Ok(File::D),
            Some('e') => Ok(File::E),
            Some('f') => Ok(File::F),
            Some('g') => Ok(File::G),
            Some('h') => Ok(File::H),
            _ => Err(Error::InvalidFile),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_is_stable() {
        for (i, file) in ALL_FILES.iter().enumerate() {
            assert_eq!(file.to_index(), i);
            assert_eq!(File::from_index(i), *file);
        }
    }

    #[test]
    fn adjacency() {
        assert!(File::E.is_adjacent(File::F));
        assert!(File::E.is_adjacent(File::D));
        assert!(!File::E.is_adjacent(File::E));
        assert!(!File::A.is_adjacent(File::H));
    }

    #[test]
    fn parse() {
        assert_eq!("c".parse::<File>(), Ok(File::C));
        assert_eq!("".parse::<File>(), Err(Error::InvalidFile));
        assert_eq!("i".parse::<File>(), Err(Error::InvalidFile));
    }
}
