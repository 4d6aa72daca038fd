//! Tests for win/draw detection and minimax search.

use oxo_engine::{
    Board, DRAW_SCORE, EngineError, Mark, O_WIN_SCORE, Outcome, Position, WIN_LINES, best_move,
    X_WIN_SCORE, has_won, is_draw, is_finished,
};

fn board_with_line(line: [usize; 3], mark: Mark) -> Board {
    line.iter().fold(Board::new(), |board, &i| {
        board.place_index(i, mark).expect("empty cell")
    })
}

/// Plays both sides with the search until the game ends.
fn self_play(mut board: Board, mut to_move: Mark) -> (Board, Outcome) {
    loop {
        let outcome = is_finished(&board);
        if outcome.is_terminal() {
            return (board, outcome);
        }
        let choice = best_move(&board, to_move).expect("board in progress");
        board = board
            .place(choice.position(), to_move)
            .expect("search picks empty cells");
        to_move = to_move.opponent();
    }
}

#[test]
fn test_every_line_wins_for_its_mark_only() {
    for line in WIN_LINES {
        for mark in [Mark::X, Mark::O] {
            let board = board_with_line(line, mark);
            assert!(has_won(&board, mark), "{:?} on {:?}", mark, line);
            assert!(!has_won(&board, mark.opponent()), "{:?} on {:?}", mark, line);
            assert_eq!(is_finished(&board), Outcome::Win(mark));
        }
    }
}

#[test]
fn test_empty_board_is_a_forced_draw() {
    let board = Board::new();
    assert_eq!(is_finished(&board), Outcome::InProgress);

    let result = best_move(&board, Mark::O).expect("empty board in progress");
    assert_eq!(result.score(), DRAW_SCORE);
    // Every opening is worth a draw, so the first cell wins the tie-break.
    assert_eq!(result.position(), Position::TopLeft);
}

#[test]
fn test_detection_is_idempotent() {
    let board: Board = "XO.OX....".parse().unwrap();
    assert_eq!(has_won(&board, Mark::X), has_won(&board, Mark::X));
    assert_eq!(is_finished(&board), is_finished(&board));
    assert_eq!(is_draw(&board), is_draw(&board));
}

#[test]
fn test_search_does_not_mutate_board() {
    let board: Board = "X...O...X".parse().unwrap();
    let before = board;
    let _ = best_move(&board, Mark::O).unwrap();
    let _ = best_move(&board, Mark::X).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_search_is_deterministic() {
    let board: Board = "X........".parse().unwrap();
    let first = best_move(&board, Mark::O).unwrap();
    let second = best_move(&board, Mark::O).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fork_preferred_over_immediate_win() {
    // X X . / O O . / . . .
    // O at 5 wins now; O at 2 blocks X and forks (rows 3-4-5 and diagonal
    // 2-4-6). Both are worth a win and scores carry no depth discount, so the
    // lower index is chosen.
    let board: Board = "XX.OO....".parse().unwrap();
    let result = best_move(&board, Mark::O).unwrap();
    assert_eq!(result.position().index(), 2);
    assert_eq!(result.score(), O_WIN_SCORE);
}

#[test]
fn test_x_completes_anti_diagonal() {
    // X O X / O X O / . . .
    let board: Board = "XOXOXO...".parse().unwrap();
    assert_eq!(is_finished(&board), Outcome::InProgress);

    let after = board.place_index(6, Mark::X).unwrap();
    assert_eq!(is_finished(&after), Outcome::Win(Mark::X));

    let result = best_move(&board, Mark::X).unwrap();
    assert_eq!(result.score(), X_WIN_SCORE);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert!(is_draw(&board));
    assert_eq!(is_finished(&board), Outcome::Draw);
}

#[test]
fn test_self_play_from_empty_board_draws() {
    let (board, outcome) = self_play(Board::new(), Mark::X);
    assert_eq!(outcome, Outcome::Draw);
    assert!(board.empty_positions().next().is_none());
}

#[test]
fn test_self_play_after_any_opening_draws() {
    for opening in Position::ALL {
        let board = Board::new().place(opening, Mark::X).unwrap();
        let (_, outcome) = self_play(board, Mark::O);
        assert_eq!(outcome, Outcome::Draw, "opening at {}", opening);
    }
}

#[test]
fn test_rejects_finished_board() {
    let board: Board = "OOOXX.X..".parse().unwrap();
    assert!(matches!(
        best_move(&board, Mark::X),
        Err(EngineError::TerminalBoard(Outcome::Win(Mark::O)))
    ));
}

#[test]
fn test_board_serializes_as_squares() {
    let board: Board = "X...O....".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
    assert!(json.contains("Occupied"));
}
