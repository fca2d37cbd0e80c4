use crate::square::Square;
use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail, PartialEq)]
pub enum Error {
    /// The string could not be parsed as a square, like "e4"
    #[fail(display = "The string specified does not contain a valid algebraic notation square")]
    InvalidSquare,

    /// The string could not be parsed as a file, "a" through "h"
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// The string could not be parsed as a rank, "1" through "8"
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// The string could not be parsed as a move, like "e2e4"
    #[fail(display = "The string specified does not contain a valid coordinate notation move")]
    InvalidMove,

    /// A board holds at most 32 pieces
    #[fail(display = "The board cannot hold any more pieces")]
    TooManyPieces,

    /// There is no piece to move on this square
    #[fail(display = "There is no piece on {}", square)]
    EmptySquare { square: Square },
}
