use crate::color::Color;
use crate::direction::Direction;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board.
///
/// Squares are numbered rank by rank from a1 (0) to h8 (63), so `index = rank * 8 + file`.
///
/// ```
/// use chess_rules::{Square, Rank, File};
///
/// let sq = Square::make_square(Rank::Fourth, File::E);
/// assert_eq!(sq, Square::E4);
/// assert_eq!(sq.to_index(), 28);
/// assert_eq!(sq.to_string(), "e4");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

const fn gen_all_squares() -> [Square; NUM_SQUARES] {
    let mut squares = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square(i as u8);
        i += 1;
    }
    squares
}

/// A list of every square on the chessboard, in index order.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = gen_all_squares();

impl Square {
    /// Create a new square, given an index.  Returns `None` for an index >= 64.
    #[inline]
    pub fn new(sq: u8) -> Option<Square> {
        if (sq as usize) < NUM_SQUARES {
            Some(Square(sq))
        } else {
            None
        }
    }

    /// Make a square given a rank and a file
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square(((rank.to_index() as u8) << 3) | file.to_index() as u8)
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    /// Move by a number of files and ranks.  If that would leave the board, return `None`.
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// assert_eq!(Square::G1.offset(-1, 2), Some(Square::F3));
    /// assert_eq!(Square::G1.offset(2, 1), None);
    /// ```
    #[inline]
    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.get_file().to_index() as i8 + file_delta;
        let rank = self.get_rank().to_index() as i8 + rank_delta;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square::make_square(
                Rank::from_index(rank as usize),
                File::from_index(file as usize),
            ))
        }
    }

    /// The adjacent square in `direction`, or `None` at the edge of the board.
    ///
    /// ```
    /// use chess_rules::{Direction, Square};
    ///
    /// assert_eq!(Square::E4.neighbor(Direction::NorthEast), Some(Square::F5));
    /// assert_eq!(Square::H4.neighbor(Direction::East), None);
    /// ```
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<Square> {
        self.offset(direction.file_delta(), direction.rank_delta())
    }

    /// If there is a square to the left of me, return that.  Otherwise, None.
    #[inline]
    pub fn left(&self) -> Option<Square> {
        self.neighbor(Direction::West)
    }

    /// If there is a square to the right of me, return that.  Otherwise, None.
    #[inline]
    pub fn right(&self) -> Option<Square> {
        self.neighbor(Direction::East)
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.neighbor(color.forward())
    }

    /// If there is a square "backward" given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn backward(&self, color: Color) -> Option<Square> {
        self.neighbor((!color).forward())
    }

    /// Do these two squares share a file?
    #[inline]
    pub fn same_file(&self, other: Square) -> bool {
        (self.0 ^ other.0) & 7 == 0
    }

    /// Do these two squares share a rank?
    #[inline]
    pub fn same_rank(&self, other: Square) -> bool {
        self.0 >> 3 == other.0 >> 3
    }

    /// The square a1.  Every other square has a constant named the same way.
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.get_file(), self.get_rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.is_ascii() {
            return Err(Error::InvalidSquare);
        }
        let file = File::from_str(&s[0..1]).map_err(|_| Error::InvalidSquare)?;
        let rank = Rank::from_str(&s[1..2]).map_err(|_| Error::InvalidSquare)?;
        Ok(Square::make_square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::ALL_DIRECTIONS;

    #[test]
    fn index_is_bijective() {
        for (i, sq) in ALL_SQUARES.iter().enumerate() {
            assert_eq!(sq.to_index(), i);
            assert_eq!(Square::make_square(sq.get_rank(), sq.get_file()), *sq);
        }
        assert_eq!(Square::new(64), None);
        assert_eq!(Square::new(63), Some(Square::H8));
    }

    #[test]
    fn neighbors_never_wrap_files() {
        for sq in ALL_SQUARES.iter() {
            for dir in ALL_DIRECTIONS.iter() {
                if let Some(n) = sq.neighbor(*dir) {
                    let df = n.get_file().to_index() as i8 - sq.get_file().to_index() as i8;
                    let dr = n.get_rank().to_index() as i8 - sq.get_rank().to_index() as i8;
                    assert_eq!((df, dr), (dir.file_delta(), dir.rank_delta()));
                }
            }
        }
    }

    #[test]
    fn corners_clip() {
        assert_eq!(Square::H1.neighbor(Direction::East), None);
        assert_eq!(Square::H1.neighbor(Direction::SouthEast), None);
        assert_eq!(Square::H1.neighbor(Direction::North), Some(Square::H2));
        assert_eq!(Square::A8.neighbor(Direction::West), None);
        assert_eq!(Square::A8.neighbor(Direction::NorthWest), None);
        assert_eq!(Square::A8.neighbor(Direction::SouthEast), Some(Square::B7));
        assert_eq!(Square::A1.neighbor(Direction::SouthWest), None);
        assert_eq!(Square::H8.neighbor(Direction::NorthEast), None);
        assert_eq!(Square::A4.left(), None);
        assert_eq!(Square::H4.right(), None);
    }

    #[test]
    fn every_square_has_between_three_and_eight_neighbors() {
        for sq in ALL_SQUARES.iter() {
            let n = ALL_DIRECTIONS
                .iter()
                .filter(|d| sq.neighbor(**d).is_some())
                .count();
            assert!(n >= 3 && n <= 8);
        }
    }

    #[test]
    fn forward_depends_on_color() {
        assert_eq!(Square::E2.forward(Color::White), Some(Square::E3));
        assert_eq!(Square::E7.forward(Color::Black), Some(Square::E6));
        assert_eq!(Square::E8.forward(Color::White), None);
        assert_eq!(Square::E2.backward(Color::Black), Some(Square::E3));
    }

    #[test]
    fn same_file_and_rank() {
        assert!(Square::E2.same_file(Square::E7));
        assert!(!Square::E2.same_file(Square::F2));
        assert!(Square::E2.same_rank(Square::F2));
        assert!(!Square::H1.same_rank(Square::A2));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("e4".parse::<Square>(), Ok(Square::E4));
        assert_eq!("a1".parse::<Square>(), Ok(Square::A1));
        assert_eq!("h8".parse::<Square>(), Ok(Square::H8));
        assert_eq!("e9".parse::<Square>(), Err(Error::InvalidSquare));
        assert_eq!("z1".parse::<Square>(), Err(Error::InvalidSquare));
        assert_eq!("e44".parse::<Square>(), Err(Error::InvalidSquare));
        for sq in ALL_SQUARES.iter() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(*sq));
        }
    }
}
