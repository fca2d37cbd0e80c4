use crate::board::Board;
use crate::chess_move::{ChessMove, MoveKind};
use crate::color::Color;
use crate::error::Error;
use crate::movegen::{self, PawnType};
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::square_set::SquareSet;
use std::fmt;
use tracing::{debug, trace};

/// The single entry point for a GUI, AI or server embedding the rules.
///
/// A `Game` owns the authoritative `Board`.  It answers "where can this piece go?" and "what
/// does this piece attack?", and it applies moves.  It does not decide whose turn it is, and
/// it does not reject a move because it is illegal: callers check a destination against
/// `valid_moves_for_piece_at` first.
///
/// Concurrent hosts must serialize access to a `Game`; nothing inside it locks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// Create a new `Game` with the initial position.
    ///
    /// ```
    /// use chess_rules::{Game, Square};
    ///
    /// let game = Game::new();
    /// assert_eq!(
    ///     game.valid_moves_for_piece_at(Square::B1).collect::<Vec<_>>(),
    ///     vec![Square::A3, Square::C3]
    /// );
    /// ```
    pub fn new() -> Game {
        let mut game = Game {
            board: Board::new(),
        };
        game.reset();
        game
    }

    /// Create a new `Game` from an already set-up board.  See `BoardBuilder`.
    pub fn new_with_board(board: Board) -> Game {
        Game { board }
    }

    /// Throw away the current position and history and start over from the initial position.
    pub fn reset(&mut self) {
        self.board = Board::starting_position();
        debug!("reset to the initial position");
    }

    /// Where can the piece on `sq` go?  Empty if there is no piece there.
    ///
    /// Moves are pseudo-legal: a move that leaves the mover's king in check is still listed.
    ///
    /// ```
    /// use chess_rules::{Game, Square};
    ///
    /// let mut game = Game::new();
    /// game.make_move(Square::E2, Square::E4).expect("a pawn on e2");
    /// game.make_move(Square::F7, Square::F5).expect("a pawn on f7");
    ///
    /// let moves = game.valid_moves_for_piece_at(Square::E4);
    /// assert_eq!(moves.collect::<Vec<_>>(), vec![Square::E5, Square::F5]);
    /// assert!(game.valid_moves_for_piece_at(Square::E3).is_empty());
    /// ```
    pub fn valid_moves_for_piece_at(&self, sq: Square) -> SquareSet {
        movegen::valid_moves(&self.board, sq)
    }

    /// Which squares does the piece on `sq` attack?  Empty if there is no piece there.
    pub fn squares_attacked_by_piece_at(&self, sq: Square) -> SquareSet {
        movegen::squares_attacked(&self.board, sq)
    }

    /// Which squares does at least one piece of `color` attack?
    pub fn squares_attacked_by(&self, color: Color) -> SquareSet {
        movegen::squares_attacked_by(&self.board, color)
    }

    /// Move the piece on `origin` to `dest`.
    ///
    /// Whatever stood on `dest` is captured.  A pawn moving onto its en-passant square also
    /// removes the pawn it passed.  Pawns and kings are flagged as having moved.  The
    /// destination is not checked against the piece's valid moves, and castling is not
    /// performed: a king moved two files is applied as a plain king move.
    ///
    /// Fails only when `origin` is empty.
    ///
    /// ```
    /// use chess_rules::{Game, MoveKind, Square};
    ///
    /// let mut game = Game::new();
    /// assert_eq!(game.make_move(Square::E2, Square::E4), Ok(MoveKind::Quiet));
    /// assert!(game.make_move(Square::E2, Square::E4).is_err());
    /// ```
    pub fn make_move(&mut self, origin: Square, dest: Square) -> Result<MoveKind, Error> {
        let piece = self
            .board
            .get_content(origin)
            .ok_or(Error::EmptySquare { square: origin })?;
        let kind = self.classify(origin, dest, &piece);

        self.board.move_piece(origin, dest)?;
        if kind == MoveKind::EnPassant {
            if let Some(passed) = dest.backward(piece.color()) {
                self.board.remove(passed);
                trace!(square = %passed, "removed pawn captured en passant");
            }
        }
        if let Some(moved) = self.board.piece_on_mut(dest) {
            moved.mark_moved();
        }

        debug!(origin = %origin, dest = %dest, piece = %piece, kind = ?kind, "applied move");
        Ok(kind)
    }

    /// Apply a `ChessMove`.  Same as `make_move`.
    pub fn apply(&mut self, chess_move: ChessMove) -> Result<MoveKind, Error> {
        self.make_move(chess_move.get_source(), chess_move.get_dest())
    }

    fn classify(&self, origin: Square, dest: Square, piece: &Piece) -> MoveKind {
        if piece.kind() == PieceKind::Pawn
            && PawnType::en_passant_target(&self.board, origin, piece.color()) == Some(dest)
        {
            MoveKind::EnPassant
        } else if origin == dest || self.board.is_empty(dest) {
            MoveKind::Quiet
        } else {
            MoveKind::Capture
        }
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every move applied since the last reset, oldest first.
    #[inline]
    pub fn moves(&self) -> &[ChessMove] {
        self.board.moves()
    }

    /// The most recent move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<ChessMove> {
        self.board.last_move()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.board.is_empty(sq)
    }

    #[inline]
    pub fn get_content(&self, sq: Square) -> Option<Piece> {
        self.board.get_content(sq)
    }

    /// Every piece on the board with its square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.board.pieces()
    }
}

/// For debugging: one line per rank, eighth rank first.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
fn play(moves: &str) -> Game {
    moves.split_whitespace().fold(Game::new(), |mut g, m| {
        g.apply(m.parse().expect("Valid Move")).expect("Piece on source");
        g
    })
}

#[cfg(test)]
fn set(squares: &[Square]) -> SquareSet {
    squares.iter().cloned().collect()
}

#[test]
fn initial_pawns_have_one_and_two_steps() {
    let game = Game::new();
    for (sq, piece) in game.pieces() {
        if piece.kind() == PieceKind::Pawn {
            let color = piece.color();
            let one = sq.forward(color).unwrap();
            let two = one.forward(color).unwrap();
            assert_eq!(game.valid_moves_for_piece_at(sq), set(&[one, two]));
        }
    }
    assert_eq!(
        game.valid_moves_for_piece_at(Square::E2),
        set(&[Square::E3, Square::E4])
    );
}

#[test]
fn initial_knights_and_blocked_pieces() {
    let game = Game::new();
    assert_eq!(
        game.valid_moves_for_piece_at(Square::B1),
        set(&[Square::A3, Square::C3])
    );
    assert_eq!(
        game.valid_moves_for_piece_at(Square::G8),
        set(&[Square::F6, Square::H6])
    );
    for sq in [Square::A1, Square::C1, Square::D1, Square::E1, Square::F8].iter() {
        assert!(game.valid_moves_for_piece_at(*sq).is_empty());
    }
}

#[test]
fn empty_square_gives_no_moves() {
    let game = Game::new();
    assert!(game.valid_moves_for_piece_at(Square::E4).is_empty());
    assert!(game.squares_attacked_by_piece_at(Square::E4).is_empty());
}

#[test]
fn capture_diagonal_after_e4_f5() {
    let game = play("e2e4 f7f5");
    assert_eq!(
        game.valid_moves_for_piece_at(Square::E4),
        set(&[Square::E5, Square::F5])
    );
}

#[test]
fn moved_pawn_never_double_steps() {
    let game = play("e2e3 a7a6");
    assert_eq!(
        game.valid_moves_for_piece_at(Square::E3),
        set(&[Square::E4])
    );
    assert!(game.get_content(Square::E3).unwrap().has_moved());

    // Walk the pawn back to its home square; the flag stays set.
    let mut game = game;
    game.make_move(Square::E3, Square::E2).unwrap();
    assert_eq!(
        game.valid_moves_for_piece_at(Square::E2),
        set(&[Square::E3])
    );
}

#[test]
fn friendly_diagonal_is_never_offered() {
    let game = play("d2d3 a7a6 e2e3 a6a5 c2c4 a5a4 d3d4");
    // White pawns on c4, d4 and e3.
    let moves = game.valid_moves_for_piece_at(Square::E3);
    assert!(!moves.contains(Square::D4));
    assert!(game.squares_attacked_by_piece_at(Square::E3).contains(Square::D4));
}

#[test]
fn en_passant_is_offered_for_exactly_one_move() {
    let mut game = play("e2e4 a7a6 e4e5 f7f5");
    let moves = game.valid_moves_for_piece_at(Square::E5);
    assert!(moves.contains(Square::F6));
    assert!(moves.contains(Square::E6));
    assert_eq!(moves, set(&[Square::E6, Square::F6]));

    game.make_move(Square::H2, Square::H3).unwrap();
    assert_eq!(
        game.valid_moves_for_piece_at(Square::E5),
        set(&[Square::E6])
    );
    game.make_move(Square::A6, Square::A5).unwrap();
    assert_eq!(
        game.valid_moves_for_piece_at(Square::E5),
        set(&[Square::E6])
    );
}

#[test]
fn en_passant_for_black() {
    let game = play("a2a3 d7d5 a3a4 d5d4 e2e4");
    assert_eq!(
        game.valid_moves_for_piece_at(Square::D4),
        set(&[Square::D3, Square::E3])
    );
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let mut game = play("e2e4 a7a6 e4e5 f7f5");
    let passed = game.board().piece_id_on(Square::F5).unwrap();
    assert_eq!(
        game.make_move(Square::E5, Square::F6),
        Ok(MoveKind::EnPassant)
    );
    assert!(game.is_empty(Square::F5));
    assert!(game.is_empty(Square::E5));
    assert_eq!(game.board().piece(passed), None);
    assert_eq!(game.pieces().count(), 31);
    assert_eq!(game.last_move(), Some(ChessMove::new(Square::E5, Square::F6)));
}

#[test]
fn capture_discards_the_captured_piece() {
    let mut game = play("e2e4 d7d5");
    let before = game.pieces().count();
    let victim = game.board().piece_id_on(Square::D5).unwrap();
    assert_eq!(game.make_move(Square::E4, Square::D5), Ok(MoveKind::Capture));
    assert_eq!(game.board().piece(victim), None);
    assert_eq!(game.pieces().count(), before - 1);
    assert_eq!(game.board().color_combined(Color::Black).len(), 15);

    let capturer = game.get_content(Square::D5).unwrap();
    assert_eq!(capturer.color(), Color::White);
    assert!(capturer.has_moved());
    assert_eq!(capturer.kind(), PieceKind::Pawn);
    assert!(game.is_empty(Square::E4));
}

#[test]
fn king_and_pawn_flags_only() {
    let game = play("e2e4 e7e5 e1e2 g8f6");
    assert!(game.get_content(Square::E2).unwrap().has_moved());
    assert!(!game.get_content(Square::F6).unwrap().has_moved());
    assert!(!game.get_content(Square::D1).unwrap().has_moved());
}

#[test]
fn moving_onto_the_same_square_is_quiet() {
    let mut game = Game::new();
    assert_eq!(game.make_move(Square::G1, Square::G1), Ok(MoveKind::Quiet));
    assert_eq!(game.pieces().count(), 32);
    assert_eq!(
        game.get_content(Square::G1).map(|p| p.kind()),
        Some(PieceKind::Knight)
    );
}

#[test]
fn move_from_empty_square_fails() {
    let mut game = Game::new();
    assert_eq!(
        game.make_move(Square::E4, Square::E5),
        Err(Error::EmptySquare { square: Square::E4 })
    );
    assert!(game.moves().is_empty());
    assert_eq!(game, Game::new());
}

#[test]
fn sliding_pieces_after_opening_moves() {
    let game = play("e2e4 e7e5 d1h5 b8c6");
    // Queen on h5: blocked by f7 pawn (capture) and e5 pawn on the fifth rank.
    let moves = game.valid_moves_for_piece_at(Square::H5);
    assert!(moves.contains(Square::F7));
    assert!(!moves.contains(Square::E8));
    assert!(moves.contains(Square::G5));
    assert!(moves.contains(Square::F5));
    assert!(moves.contains(Square::E5));
    assert!(!moves.contains(Square::D5));
    assert!(moves.contains(Square::H7));
    assert!(!moves.contains(Square::H8));
    assert!(moves.contains(Square::D1));
    assert!(moves.contains(Square::E2));
}

#[test]
fn reset_is_idempotent() {
    let mut game = play("e2e4 e7e5 g1f3");
    game.reset();
    let first = game.clone();
    game.reset();
    assert_eq!(game, first);
    assert_eq!(game, Game::new());
    assert_eq!(game.to_string(), first.to_string());
    assert!(game.moves().is_empty());
}

#[test]
fn render() {
    let game = play("e2e4");
    let text = game.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "r n b q k b n r");
    assert_eq!(lines[4], ". . . . P . . .");
    assert_eq!(lines[6], "P P P P . P P P");
}
