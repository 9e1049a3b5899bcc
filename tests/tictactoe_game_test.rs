//! Tests for the game controller and console collaborators.

use std::io::Cursor;
use strictly_tictactoe::{
    Board, Difficulty, Game, GameError, Move, MoveSource, Outcome, Renderer, Side, TextConsole,
};

/// Plays a fixed list of moves for interactive sides and records output.
#[derive(Default)]
struct Script {
    moves: Vec<Move>,
    shown: usize,
    announced: Vec<(Side, Difficulty)>,
    reports: Vec<Outcome>,
}

impl Script {
    fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().rev().map(|&(r, c)| Move::new(r, c)).collect(),
            ..Self::default()
        }
    }
}

impl MoveSource for Script {
    fn request_move(&mut self, _board: &Board, side: Side) -> Result<Move, GameError> {
        self.moves.pop().ok_or(GameError::InputClosed(side))
    }
}

impl Renderer for Script {
    fn display(&mut self, _board: &Board) {
        self.shown += 1;
    }

    fn announce(&mut self, side: Side, difficulty: Difficulty) {
        self.announced.push((side, difficulty));
    }

    fn report(&mut self, outcome: Outcome) {
        self.reports.push(outcome);
    }
}

#[test]
fn test_scripted_win_for_x() {
    let mut game = Game::with_seed(Difficulty::Interactive, Difficulty::Interactive, 0);
    let mut script = Script::new(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    let outcome = game.play(&mut script).unwrap();

    assert_eq!(outcome, Outcome::Win(Side::X));
    assert_eq!(script.reports, vec![Outcome::Win(Side::X)]);
    assert_eq!(script.shown, 6);
    assert!(script.announced.is_empty());
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_scripted_draw() {
    let mut game = Game::with_seed(Difficulty::Interactive, Difficulty::Interactive, 0);
    let mut script = Script::new(&[
        (0, 0),
        (1, 1),
        (0, 2),
        (0, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);

    assert_eq!(game.play(&mut script).unwrap(), Outcome::Draw);
    assert!(game.board().is_full());
}

#[test]
fn test_automated_sides_are_announced() {
    let mut game = Game::with_seed(Difficulty::Interactive, Difficulty::Hard, 3);
    let mut script = Script::new(&[(0, 0)]);

    let err = game.play(&mut script).unwrap_err();

    assert_eq!(err, GameError::InputClosed(Side::X));
    assert_eq!(script.announced, vec![(Side::O, Difficulty::Hard)]);
    assert_eq!(game.board().count(Side::O), 1);
}

#[test]
fn test_no_moves_after_terminal() {
    let mut game = Game::with_seed(Difficulty::Interactive, Difficulty::Interactive, 0);
    let mut script = Script::new(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    game.play(&mut script).unwrap();

    assert!(game.is_terminal());
    assert_eq!(game.next_move(&mut script), Err(GameError::GameOver));
    assert_eq!(game.board().count(Side::O), 2);
}

#[test]
fn test_unchecked_win_still_blocks_moves() {
    let mut game = Game::with_seed(Difficulty::Interactive, Difficulty::Interactive, 0);
    let mut script = Script::new(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    for _ in 0..5 {
        game.next_move(&mut script).unwrap();
    }

    assert!(!game.is_terminal());
    assert_eq!(game.next_move(&mut script), Err(GameError::GameOver));
    assert_eq!(game.check_terminal(&mut script), Outcome::Win(Side::X));
    assert!(game.is_terminal());
}

#[test]
fn test_console_session_human_vs_hard() {
    // Human X walks the board top-left to bottom-right, skipping taken squares.
    // Lines left over once the game ends are rejected as commands.
    let script = "start user hard\n1 3\n2 3\n3 3\n1 2\n2 2\n3 2\n1 1\n2 1\n3 1\nexit\n";
    let mut console = TextConsole::new(Cursor::new(script), Vec::new());
    console.run_session(Some(5)).unwrap();
    let output = String::from_utf8(console.into_writer()).unwrap();

    assert!(output.starts_with("Input command: ---------\n"));
    assert!(output.contains("Making move level \"hard\""));
    assert!(!output.contains("X wins"));
    assert!(output.trim_end().ends_with("Input command:"));
}
