use super::board::Board;
use super::types::{BoardStatus, Cell, Mark, WinningLine};

/// Rows, then columns, then diagonals. The first complete line in this order is reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinningLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Cell::Marked(mark) = board.get(a)
            && board.get(b) == Cell::Marked(mark)
            && board.get(c) == Cell::Marked(mark)
        {
            return Some((mark, WinningLine(line)));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// Classifies any board, including hypothetical ones built during search.
pub fn evaluate_board(board: &Board) -> BoardStatus {
    if let Some((mark, line)) = check_win_with_line(board) {
        return BoardStatus::Won(mark, line);
    }
    if board.is_full() {
        return BoardStatus::Draw;
    }
    BoardStatus::InProgress
}
