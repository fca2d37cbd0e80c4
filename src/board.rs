use crate::chess_move::ChessMove;
use crate::color::{Color, ALL_COLORS};
use crate::direction::Direction;
use crate::error::Error;
use crate::file::File;
use crate::piece::{Piece, PieceKind};
use crate::rank::Rank;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use crate::square_set::{SquareSet, EMPTY};
use arrayvec::ArrayVec;
use std::fmt;

/// The most pieces a board can ever hold.
pub const MAX_PIECES: usize = 32;

/// The pieces on each color's back rank, from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A handle to one piece record in a `Board`.
///
/// Handles are stable for the life of the board: a piece keeps its handle as it moves.  Once
/// the piece is captured its handle appears on no square and resolves to no record.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
pub struct PieceId(u8);

impl PieceId {
    /// Convert this `PieceId` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }
}

/// The mechanical side of a chess game: which piece stands where, and which moves were made.
///
/// The board never judges whether a move is legal.  It keeps exactly one occupancy map,
/// `squares`, pointing into an arena of piece records, plus the full, ordered move log.  A
/// captured piece's record is cleared, so nothing about it can be read back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<PieceId>; NUM_SQUARES],
    pieces: ArrayVec<Option<Piece>, MAX_PIECES>,
    moves: Vec<ChessMove>,
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Board {
    /// An empty board with no history.
    pub fn new() -> Board {
        Board {
            squares: [None; NUM_SQUARES],
            pieces: ArrayVec::new(),
            moves: Vec::new(),
        }
    }

    /// The standard initial position, with no history.
    ///
    /// ```
    /// use chess_rules::{Board, Square};
    ///
    /// let board = Board::starting_position();
    /// assert_eq!(board.pieces().count(), 32);
    /// assert_eq!(board.get_content(Square::D8).map(|p| p.glyph()), Some('q'));
    /// ```
    pub fn starting_position() -> Board {
        let mut board = Board::new();
        for color in ALL_COLORS.iter() {
            let back = color.to_my_backrank();
            let second = color.to_second_rank();
            for (i, kind) in BACK_RANK.iter().enumerate() {
                let file = File::from_index(i);
                let pawn = Piece::new(*color, PieceKind::Pawn);
                board.place(Square::make_square(second, file), pawn);
                board.place(Square::make_square(back, file), Piece::new(*color, *kind));
            }
        }
        board
    }

    // Only for positions known to fit in the arena.
    fn place(&mut self, sq: Square, piece: Piece) {
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Some(piece));
        self.squares[sq.to_index()] = Some(id);
    }

    /// Is there no piece on `sq`?
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.to_index()].is_none()
    }

    /// The piece on `sq`, or `None` for an empty square.
    #[inline]
    pub fn get_content(&self, sq: Square) -> Option<Piece> {
        self.piece_id_on(sq).and_then(|id| self.piece(id)).copied()
    }

    /// The handle of the piece on `sq`, if any.
    #[inline]
    pub fn piece_id_on(&self, sq: Square) -> Option<PieceId> {
        self.squares[sq.to_index()]
    }

    /// Look up a piece record by handle.  `None` once the piece has been captured.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.to_index()).and_then(|p| p.as_ref())
    }

    /// The record of the piece standing on `sq`, for updating its first-move flag.
    #[inline]
    pub(crate) fn piece_on_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        let id = self.piece_id_on(sq)?;
        self.pieces.get_mut(id.to_index()).and_then(|p| p.as_mut())
    }

    // Drops the record of a piece taken off the board.
    fn discard(&mut self, id: PieceId) {
        if let Some(record) = self.pieces.get_mut(id.to_index()) {
            *record = None;
        }
    }

    /// The color of the piece on `sq`, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get_content(sq).map(|p| p.color())
    }

    /// Place `piece` on `sq`.  Used while setting up a position.
    ///
    /// A piece already on `sq` is replaced, and its record is reused for the new piece.
    pub fn set_content(&mut self, sq: Square, piece: Piece) -> Result<PieceId, Error> {
        if let Some(id) = self.squares[sq.to_index()] {
            self.pieces[id.to_index()] = Some(piece);
            return Ok(id);
        }
        let id = PieceId(self.pieces.len() as u8);
        self.pieces
            .try_push(Some(piece))
            .map_err(|_| Error::TooManyPieces)?;
        self.squares[sq.to_index()] = Some(id);
        Ok(id)
    }

    /// Move whatever stands on `origin` to `dest` and log the move.
    ///
    /// Anything on `dest` is captured: its handle is returned, it no longer appears on the
    /// board, and `piece` no longer resolves it.  Legality is not checked.
    pub fn move_piece(&mut self, origin: Square, dest: Square) -> Result<Option<PieceId>, Error> {
        let id = self.squares[origin.to_index()]
            .take()
            .ok_or(Error::EmptySquare { square: origin })?;
        let captured = self.squares[dest.to_index()].replace(id);
        if let Some(captured) = captured {
            self.discard(captured);
        }
        self.moves.push(ChessMove::new(origin, dest));
        Ok(captured)
    }

    /// Clear `sq` and discard the piece that stood there, returning its handle.  Not logged.
    pub fn remove(&mut self, sq: Square) -> Option<PieceId> {
        let id = self.squares[sq.to_index()].take()?;
        self.discard(id);
        Some(id)
    }

    // Seeds the log of a position built by hand, so en passant can be set up.
    pub(crate) fn record_move(&mut self, chess_move: ChessMove) {
        self.moves.push(chess_move);
    }

    /// Every move made on this board, oldest first.
    #[inline]
    pub fn moves(&self) -> &[ChessMove] {
        &self.moves
    }

    /// The most recent move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<ChessMove> {
        self.moves.last().copied()
    }

    /// The square next to `sq` in `direction`, or `None` off the edge.
    #[inline]
    pub fn neighbor(&self, sq: Square, direction: Direction) -> Option<Square> {
        sq.neighbor(direction)
    }

    /// All occupied squares.
    pub fn combined(&self) -> SquareSet {
        ALL_SQUARES
            .iter()
            .filter(|sq| !self.is_empty(**sq))
            .fold(EMPTY, |b, sq| b | SquareSet::from_square(*sq))
    }

    /// All squares occupied by `color`.
    pub fn color_combined(&self, color: Color) -> SquareSet {
        ALL_SQUARES
            .iter()
            .filter(|sq| self.color_on(**sq) == Some(color))
            .fold(EMPTY, |b, sq| b | SquareSet::from_square(*sq))
    }

    /// The board row by row, eighth rank first, each row from the a-file to the h-file.
    pub fn rows(&self) -> impl Iterator<Item = [Square; 8]> {
        (0..8).rev().map(|rank| {
            let mut row = [Square::A1; 8];
            for (file, sq) in row.iter_mut().enumerate() {
                *sq = Square::make_square(Rank::from_index(rank), File::from_index(file));
            }
            row
        })
    }

    /// Every piece on the board with the square it stands on, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(i, id)| {
                id.and_then(|id| self.piece(id))
                    .map(|piece| (ALL_SQUARES[i], piece))
            })
    }
}

/// Draws the board as eight lines of glyphs, eighth rank first, `.` for an empty square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|sq| match self.get_content(*sq) {
                    Some(piece) => piece.to_string(),
                    None => ".".to_owned(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn(color: Color) -> Piece {
        Piece::new(color, PieceKind::Pawn)
    }

    #[test]
    fn empty_board() {
        let board = Board::new();
        assert!(ALL_SQUARES.iter().all(|sq| board.is_empty(*sq)));
        assert_eq!(board.get_content(Square::E4), None);
        assert_eq!(board.last_move(), None);
        assert_eq!(board.combined(), EMPTY);
    }

    #[test]
    fn move_relocates_and_logs() {
        let mut board = Board::new();
        let id = board.set_content(Square::E2, pawn(Color::White)).unwrap();
        assert_eq!(board.move_piece(Square::E2, Square::E4), Ok(None));
        assert!(board.is_empty(Square::E2));
        assert_eq!(board.piece_id_on(Square::E4), Some(id));
        assert_eq!(board.moves(), &[ChessMove::new(Square::E2, Square::E4)]);
    }

    #[test]
    fn move_overwrites_destination() {
        let mut board = Board::new();
        board.set_content(Square::D4, pawn(Color::White)).unwrap();
        let victim = board.set_content(Square::E5, pawn(Color::Black)).unwrap();
        assert_eq!(board.move_piece(Square::D4, Square::E5), Ok(Some(victim)));
        assert_eq!(board.color_on(Square::E5), Some(Color::White));
        assert_eq!(board.pieces().count(), 1);
        assert!(board.pieces().all(|(sq, _)| board.piece_id_on(sq) != Some(victim)));
    }

    #[test]
    fn captured_handle_resolves_to_nothing() {
        let mut board = Board::new();
        board
            .set_content(Square::D4, Piece::new(Color::White, PieceKind::Queen))
            .unwrap();
        let king = board
            .set_content(Square::E6, Piece::new(Color::Black, PieceKind::King))
            .unwrap();
        board.move_piece(Square::E6, Square::E5).unwrap();
        board.piece_on_mut(Square::E5).unwrap().mark_moved();
        assert!(board.piece(king).unwrap().has_moved());

        assert_eq!(board.move_piece(Square::D4, Square::E5), Ok(Some(king)));
        assert_eq!(board.piece(king), None);
        assert_eq!(board.get_content(Square::E5).map(|p| p.kind()), Some(PieceKind::Queen));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn removed_handle_resolves_to_nothing() {
        let mut board = Board::new();
        let id = board.set_content(Square::F5, pawn(Color::Black)).unwrap();
        assert_eq!(board.remove(Square::F5), Some(id));
        assert_eq!(board.piece(id), None);
        assert_eq!(board.remove(Square::F5), None);
    }

    #[test]
    fn move_from_empty_square_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.move_piece(Square::A3, Square::A4),
            Err(Error::EmptySquare { square: Square::A3 })
        );
        assert!(board.moves().is_empty());
    }

    #[test]
    fn set_content_reuses_the_record_of_a_replaced_piece() {
        let mut board = Board::new();
        let first = board.set_content(Square::A1, pawn(Color::White)).unwrap();
        let second = board
            .set_content(Square::A1, Piece::new(Color::Black, PieceKind::Rook))
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(board.get_content(Square::A1).map(|p| p.glyph()), Some('r'));
    }

    #[test]
    fn arena_is_bounded() {
        let mut board = Board::new();
        for sq in ALL_SQUARES.iter().take(MAX_PIECES) {
            board.set_content(*sq, pawn(Color::White)).unwrap();
        }
        assert_eq!(
            board.set_content(Square::H8, pawn(Color::Black)),
            Err(Error::TooManyPieces)
        );
    }

    #[test]
    fn rows_start_at_the_eighth_rank() {
        let board = Board::new();
        let rows: Vec<[Square; 8]> = board.rows().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0][0], Square::A8);
        assert_eq!(rows[0][7], Square::H8);
        assert_eq!(rows[7][0], Square::A1);
        assert_eq!(rows[7][4], Square::E1);
    }

    #[test]
    fn color_sets() {
        let mut board = Board::new();
        board.set_content(Square::B2, pawn(Color::White)).unwrap();
        board.set_content(Square::G7, pawn(Color::Black)).unwrap();
        assert_eq!(board.color_combined(Color::White), SquareSet::from_square(Square::B2));
        assert_eq!(board.color_combined(Color::Black), SquareSet::from_square(Square::G7));
        assert_eq!(board.combined().len(), 2);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.color_combined(Color::White).len(), 16);
        assert_eq!(board.color_combined(Color::Black).len(), 16);
        assert!(board.moves().is_empty());
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[1], "p p p p p p p p");
        assert_eq!(lines[4], ". . . . . . . .");
        assert_eq!(lines[6], "P P P P P P P P");
        assert_eq!(lines[7], "R N B Q K B N R");
        assert!(board.pieces().all(|(_, p)| !p.has_moved()));
    }

    #[test]
    fn display() {
        let mut board = Board::new();
        board.set_content(Square::A8, pawn(Color::Black)).unwrap();
        board.set_content(Square::H1, pawn(Color::White)).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "p . . . . . . .");
        assert_eq!(lines[7], ". . . . . . . P");
    }
}
