#[macro_use]
extern crate bencher;
extern crate chess_rules;

use bencher::Bencher;
use chess_rules::{ChessMove, Color, Game, ALL_SQUARES};

const TWO_KNIGHTS: &str = "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6";

// This is a helper function to remove boilerplate code from the move counting benchmarks
fn count_moves(game: &Game, color: Color) -> u32 {
    ALL_SQUARES
        .iter()
        .filter(|sq| game.get_content(**sq).map(|p| p.color()) == Some(color))
        .map(|sq| game.valid_moves_for_piece_at(*sq).len())
        .sum()
}

fn parse_moves(moves: &str) -> Vec<ChessMove> {
    moves
        .split_whitespace()
        .map(|m| m.parse().expect("Valid Move"))
        .collect()
}

fn initial_position_moves(bench: &mut Bencher) {
    let game = Game::new();
    bench.iter(|| {
        assert_eq!(count_moves(&game, Color::White), 20);
        assert_eq!(count_moves(&game, Color::Black), 20);
    });
}

fn opening_position_moves(bench: &mut Bencher) {
    let mut game = Game::new();
    for m in parse_moves(TWO_KNIGHTS) {
        game.apply(m).expect("Piece on source");
    }
    bench.iter(|| count_moves(&game, Color::White));
}

fn squares_attacked(bench: &mut Bencher) {
    let game = Game::new();
    bench.iter(|| {
        assert!(game.squares_attacked_by(Color::White).contains(ALL_SQUARES[20]));
    });
}

fn play_opening(bench: &mut Bencher) {
    let moves = parse_moves(TWO_KNIGHTS);
    bench.iter(|| {
        let mut game = Game::new();
        for m in moves.iter() {
            game.apply(*m).expect("Piece on source");
        }
        assert_eq!(game.moves().len(), moves.len());
    });
}

fn reset(bench: &mut Bencher) {
    let mut game = Game::new();
    bench.iter(|| {
        game.reset();
        assert!(game.moves().is_empty());
    });
}

benchmark_group!(
    benches,
    initial_position_moves,
    opening_position_moves,
    squares_attacked,
    play_opening,
    reset
);

benchmark_main!(benches);
