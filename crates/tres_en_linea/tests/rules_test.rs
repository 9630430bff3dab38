//! Tests for board evaluation and positions.

use tres_en_linea::rules::LINES;
use tres_en_linea::{Board, Mark, Outcome, Position, evaluate, is_draw, is_full, winning_line};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = Board::new()
        .with_mark(Position::TopLeft, Mark::X)
        .with_mark(Position::Center, Mark::O);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_lines_in_scan_order() {
    let indices: Vec<[usize; 3]> = LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_full_line_wins_regardless_of_other_cells() {
    let o = Some(Mark::O);
    let x = Some(Mark::X);
    // O O O / X X _ / X _ _
    let board = Board::from_cells([o, o, o, x, x, None, x, None, None]);
    assert_eq!(evaluate(&board), Outcome::Winner(Mark::O));
    assert_eq!(
        winning_line(&board),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert!(!is_full(&board));
}

#[test]
fn test_full_board_without_line_is_undecided() {
    let o = Some(Mark::O);
    let x = Some(Mark::X);
    // X O X / X O O / O X X
    let board = Board::from_cells([x, o, x, x, o, o, o, x, x]);
    assert_eq!(evaluate(&board), Outcome::Undecided);
    assert!(is_draw(&board));
}
