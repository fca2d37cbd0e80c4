use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use crate::game::Game;
use crate::piece::{Piece, PieceKind};
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

/// Represents a chess position that has *not* been validated for legality.
///
/// This structure is useful in the following cases:
/// * You are trying to build a chess position manually in code, for a puzzle or a test.
/// * You want to start a `Game` somewhere other than the initial position.
///
/// ```
/// use chess_rules::{BoardBuilder, Color, Game, PieceKind, Square};
/// use std::convert::TryFrom;
///
/// let mut position = BoardBuilder::new();
/// position.piece(Square::A1, PieceKind::King, Color::White);
/// position.piece(Square::A8, PieceKind::Rook, Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[Square::A1].map(|p| p.kind()), Some(PieceKind::King));
///
/// let game = Game::try_from(&position).expect("two pieces fit on a board");
/// assert_eq!(game.valid_moves_for_piece_at(Square::A8).len(), 14);
///
/// // One liners are possible with the builder pattern.
/// use std::convert::TryInto;
///
/// let res: Result<Game, _> = BoardBuilder::new()
///                        .piece(Square::A1, PieceKind::King, Color::White)
///                        .piece(Square::H8, PieceKind::King, Color::Black)
///                        .try_into();
/// assert!(res.is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardBuilder {
    pieces: [Option<Piece>; NUM_SQUARES],
    last_move: Option<ChessMove>,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder with no last move.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
            last_move: None,
        }
    }

    /// Set up a position with everything pre-loaded.
    ///
    /// ```
    /// use chess_rules::{BoardBuilder, ChessMove, Color, Game, PieceKind, Square};
    /// use std::convert::TryInto;
    ///
    /// # use chess_rules::Error;
    /// # fn main() -> Result<(), Error> {
    /// let game: Game = BoardBuilder::setup(
    ///         &[
    ///             (Square::E5, PieceKind::Pawn, Color::White),
    ///             (Square::D5, PieceKind::Pawn, Color::Black),
    ///         ],
    ///         Some(ChessMove::new(Square::D7, Square::D5)))
    ///     .try_into()?;
    /// assert!(game.valid_moves_for_piece_at(Square::E5).contains(Square::D6));
    /// # Ok(())
    /// # }
    /// ```
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Square, PieceKind, Color)>,
        last_move: Option<ChessMove>,
    ) -> BoardBuilder {
        let mut result = BoardBuilder {
            pieces: [None; NUM_SQUARES],
            last_move,
        };

        for (square, kind, color) in pieces.into_iter() {
            result[*square] = Some(Piece::new(*color, *kind));
        }

        result
    }

    /// The move the position will report as most recently played.
    pub fn get_last_move(&self) -> Option<ChessMove> {
        self.last_move
    }

    /// Set a piece that has not moved yet on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if need.
    ///
    /// This function can be used on self directly or in a builder pattern.
    ///
    /// ```
    /// use chess_rules::{BoardBuilder, Color, PieceKind, Square};
    ///
    /// BoardBuilder::new()
    ///              .piece(Square::A1, PieceKind::Rook, Color::White);
    ///
    /// let mut bb = BoardBuilder::new();
    /// bb.piece(Square::A8, PieceKind::Rook, Color::Black);
    /// ```
    pub fn piece(&mut self, square: Square, kind: PieceKind, color: Color) -> &mut Self {
        self[square] = Some(Piece::new(color, kind));
        self
    }

    /// Set a piece on a square, flagged as having moved already.
    ///
    /// Only pawns and kings keep the flag; for other pieces this is the same as `piece`.
    pub fn moved_piece(&mut self, square: Square, kind: PieceKind, color: Color) -> &mut Self {
        let mut piece = Piece::new(color, kind);
        piece.mark_moved();
        self[square] = Some(piece);
        self
    }

    /// Clear a square on the board.
    ///
    /// ```
    /// use chess_rules::{Board, BoardBuilder, Square};
    ///
    /// let mut bb: BoardBuilder = Board::starting_position().into();
    /// bb.clear_square(Square::A1);
    /// assert_eq!(bb[Square::A1], None);
    /// ```
    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self[square] = None;
        self
    }

    /// Set or clear the move the position will report as most recently played.
    ///
    /// This is what makes an en-passant capture available in a hand-built position.
    pub fn last_move(&mut self, chess_move: Option<ChessMove>) -> &mut Self {
        self.last_move = chess_move;
        self
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::from(Board::starting_position())
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &BoardBuilder) -> Result<Self, Self::Error> {
        let mut board = Board::new();

        for sq in ALL_SQUARES.iter() {
            if let Some(piece) = builder[*sq] {
                board.set_content(*sq, piece)?;
            }
        }

        if let Some(chess_move) = builder.last_move {
            board.record_move(chess_move);
        }

        Ok(board)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&builder)
    }
}

impl TryFrom<&mut BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &mut BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&*builder)
    }
}

impl TryFrom<&BoardBuilder> for Game {
    type Error = Error;

    fn try_from(builder: &BoardBuilder) -> Result<Self, Self::Error> {
        Ok(Game::new_with_board(Board::try_from(builder)?))
    }
}

impl TryFrom<BoardBuilder> for Game {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Self, Self::Error> {
        Game::try_from(&builder)
    }
}

impl TryFrom<&mut BoardBuilder> for Game {
    type Error = Error;

    fn try_from(builder: &mut BoardBuilder) -> Result<Self, Self::Error> {
        Game::try_from(&*builder)
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut result = BoardBuilder::new();
        for (sq, piece) in board.pieces() {
            result[sq] = Some(*piece);
        }
        result.last_move(board.last_move());
        result
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}

#[test]
fn check_initial_position() {
    let initial: BoardBuilder = Board::starting_position().into();
    assert_eq!(initial, BoardBuilder::default());
    assert_eq!(
        initial[Square::E1],
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(initial.get_last_move(), None);

    // Same layout, though the piece records may be stored in another order.
    let game = Game::try_from(initial).expect("Valid Position");
    let expected = Game::new();
    assert!(game.pieces().eq(expected.pieces()));
    assert_eq!(game.to_string(), expected.to_string());
}

#[test]
fn too_many_pieces() {
    let mut builder = BoardBuilder::new();
    for sq in ALL_SQUARES.iter().take(33) {
        builder.piece(*sq, PieceKind::Knight, Color::White);
    }
    assert_eq!(Board::try_from(&builder), Err(Error::TooManyPieces));

    builder.clear_square(Square::A1);
    assert_eq!(Board::try_from(&builder).map(|b| b.pieces().count()), Ok(32));
}

#[test]
fn moved_pawn_has_single_step() {
    let game: Game = BoardBuilder::new()
        .moved_piece(Square::E2, PieceKind::Pawn, Color::White)
        .piece(Square::D2, PieceKind::Pawn, Color::White)
        .try_into()
        .expect("Valid Position");
    assert_eq!(game.valid_moves_for_piece_at(Square::E2).len(), 1);
    assert_eq!(game.valid_moves_for_piece_at(Square::D2).len(), 2);
}

#[test]
fn seeded_last_move_enables_en_passant() {
    let mut builder = BoardBuilder::setup(
        &[
            (Square::D4, PieceKind::Pawn, Color::Black),
            (Square::C4, PieceKind::Pawn, Color::White),
        ],
        Some(ChessMove::new(Square::C2, Square::C4)),
    );
    let game = Game::try_from(&builder).expect("Valid Position");
    assert!(game.valid_moves_for_piece_at(Square::D4).contains(Square::C3));
    assert_eq!(game.moves().len(), 1);

    builder.last_move(None);
    let game = Game::try_from(&builder).expect("Valid Position");
    assert!(!game.valid_moves_for_piece_at(Square::D4).contains(Square::C3));
}

#[test]
fn en_passant_needs_an_empty_square_behind_the_pawn() {
    let game = Game::try_from(BoardBuilder::setup(
        &[
            (Square::E5, PieceKind::Pawn, Color::White),
            (Square::D5, PieceKind::Pawn, Color::Black),
            (Square::D6, PieceKind::Knight, Color::Black),
        ],
        Some(ChessMove::new(Square::D7, Square::D5)),
    ))
    .expect("Valid Position");
    assert_eq!(
        PawnType::en_passant_target(game.board(), Square::E5, Color::White),
        None
    );

    // d6 is still an ordinary capture, and the d5 pawn stays.
    let mut game = game;
    assert!(game.valid_moves_for_piece_at(Square::E5).contains(Square::D6));
    assert_eq!(game.make_move(Square::E5, Square::D6), Ok(MoveKind::Capture));
    assert_eq!(
        game.get_content(Square::D5).map(|p| p.kind()),
        Some(PieceKind::Pawn)
    );
}

#[cfg(test)]
use crate::chess_move::MoveKind;
#[cfg(test)]
use crate::movegen::PawnType;
#[cfg(test)]
use std::convert::TryInto;
