//! # Chess rules for hosts that keep their own game loop
//!
//! This crate models a chessboard and the movement rules of every piece.  A GUI, an AI or a
//! server asks a `Game` where a piece may go, shows or filters those squares, and then applies
//! the chosen move.
//!
//! ```
//! use chess_rules::{Game, MoveKind, Square};
//!
//! let mut game = Game::new();
//! let moves = game.valid_moves_for_piece_at(Square::E2);
//! assert!(moves.contains(Square::E4));
//!
//! assert_eq!(game.make_move(Square::E2, Square::E4), Ok(MoveKind::Quiet));
//! assert!(game.is_empty(Square::E2));
//! ```
//!
//! Moves are pseudo-legal: check, checkmate, castling and promotion are left to the host.

mod board;
pub use crate::board::*;

mod board_builder;
pub use crate::board_builder::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod direction;
pub use crate::direction::*;

mod error;
pub use crate::error::*;

mod file;
pub use crate::file::*;

mod game;
pub use crate::game::*;

mod movegen;
pub use crate::movegen::*;

mod piece;
pub use crate::piece::*;

mod rank;
pub use crate::rank::*;

mod square;
pub use crate::square::*;

mod square_set;
pub use crate::square_set::*;
