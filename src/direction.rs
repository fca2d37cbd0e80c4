/// One of the eight compass directions, seen from White's side of the board.
///
/// North is toward the eighth rank, East is toward the h-file.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// How many directions are there?
pub const NUM_DIRECTIONS: usize = 8;

/// Enumerate all directions, clockwise from North.
pub const ALL_DIRECTIONS: [Direction; NUM_DIRECTIONS] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

/// The directions a rook slides in.
pub const ORTHOGONAL: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// The directions a bishop slides in.
pub const DIAGONAL: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

impl Direction {
    /// How many files does one step in this direction cross?  East is positive.
    #[inline]
    pub fn file_delta(&self) -> i8 {
        match *self {
            Direction::NorthEast | Direction::East | Direction::SouthEast => 1,
            Direction::NorthWest | Direction::West | Direction::SouthWest => -1,
            Direction::North | Direction::South => 0,
        }
    }

    /// How many ranks does one step in this direction cross?  North is positive.
    #[inline]
    pub fn rank_delta(&self) -> i8 {
        match *self {
            Direction::NorthWest | Direction::North | Direction::NorthEast => 1,
            Direction::SouthWest | Direction::South | Direction::SouthEast => -1,
            Direction::East | Direction::West => 0,
        }
    }

    /// Is this one of the four diagonals?
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.file_delta() != 0 && self.rank_delta() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_cancel() {
        for i in 0..NUM_DIRECTIONS {
            let a = ALL_DIRECTIONS[i];
            let b = ALL_DIRECTIONS[(i + 4) % NUM_DIRECTIONS];
            assert_eq!(a.file_delta() + b.file_delta(), 0);
            assert_eq!(a.rank_delta() + b.rank_delta(), 0);
        }
    }

    #[test]
    fn slider_tables_partition_the_compass() {
        assert!(ORTHOGONAL.iter().all(|d| !d.is_diagonal()));
        assert!(DIAGONAL.iter().all(|d| d.is_diagonal()));
    }
}
