//! Tests for the computer strategies playing full games.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::{
    Board, Difficulty, Game, Headless, Move, Outcome, Side, Strategy, create_strategy,
};

fn select(strategy: Strategy, board: &Board, seed: u64) -> Move {
    let mut rng = StdRng::seed_from_u64(seed);
    strategy
        .select_move(board, &mut rng, &mut Headless)
        .expect("strategy should find a move")
}

#[test]
fn test_heuristic_completes_top_row() {
    let board = Board::new()
        .apply(0, Side::X)
        .apply(6, Side::O)
        .apply(1, Side::X)
        .apply(7, Side::O);
    // O also threatens the bottom row; winning comes first.
    let mv = select(create_strategy("medium", Side::X), &board, 0);
    assert_eq!(mv.index(), Some(2));
}

#[test]
fn test_heuristic_blocks_top_row() {
    let board = Board::new()
        .apply(4, Side::X)
        .apply(0, Side::O)
        .apply(8, Side::X)
        .apply(1, Side::O);
    // X has no immediate win (0 is taken by O), so it must block at 2.
    for seed in 0..10 {
        let mv = select(create_strategy("medium", Side::X), &board, seed);
        assert_eq!(mv.index(), Some(2));
    }
}

#[test]
fn test_minimax_opens_center() {
    for seed in 0..5 {
        let mv = select(create_strategy("hard", Side::X), &Board::new(), seed);
        assert_eq!(mv, Move::new(1, 1));
    }
}

#[test]
fn test_minimax_never_loses_to_random() {
    for n in 0..200u64 {
        let (player_x, player_o, minimax_side) = if n % 2 == 0 {
            (Difficulty::Hard, Difficulty::Easy, Side::X)
        } else {
            (Difficulty::Easy, Difficulty::Hard, Side::O)
        };
        let mut game = Game::with_seed(player_x, player_o, n);
        let outcome = game.play(&mut Headless).unwrap();
        assert_ne!(
            outcome,
            Outcome::Win(minimax_side.opponent()),
            "minimax lost game {} as {}: {:?}",
            n,
            minimax_side,
            game.history()
        );
    }
}

#[test]
fn test_minimax_never_loses_to_heuristic() {
    for n in 0..40u64 {
        let mut game = Game::with_seed(Difficulty::Medium, Difficulty::Hard, n);
        let outcome = game.play(&mut Headless).unwrap();
        assert_ne!(outcome, Outcome::Win(Side::X), "game {}", n);
    }
}

#[test]
fn test_minimax_mirror_always_draws() {
    for seed in 0..10 {
        let mut game = Game::with_seed(Difficulty::Hard, Difficulty::Hard, seed);
        assert_eq!(game.play(&mut Headless).unwrap(), Outcome::Draw);
    }
}

#[test]
fn test_random_games_finish_legally() {
    for seed in 0..50 {
        let mut game = Game::with_seed(Difficulty::Easy, Difficulty::Easy, seed);
        let outcome = game.play(&mut Headless).unwrap();
        assert!(outcome.is_terminal());
        let board = game.board();
        let (x, o) = (board.count(Side::X), board.count(Side::O));
        assert!(x == o || x == o + 1, "x={} o={}", x, o);
        assert_eq!(game.history().len(), x + o);
    }
}
