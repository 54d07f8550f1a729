use super::board::Board;
use super::types::{CELL_COUNT, Mark, WinningLine};
use super::win_detector::check_win_with_line;

/// State of a single round. Mutated in place move by move and reset between rounds.
///
/// Illegal moves (occupied cell, finished game) are ignored rather than reported,
/// since they come from ordinary UI races such as double clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Mark,
    winner: Option<Mark>,
    is_over: bool,
    winning_line: Option<WinningLine>,
    move_count: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(Mark::default())
    }
}

impl TicTacToeGameState {
    pub fn new(start_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            current_player: start_mark,
            winner: None,
            is_over: false,
            winning_line: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.board.get(index).is_empty()
    }

    /// Places the current player's mark at `index`. No-op if the game is over or the cell
    /// is taken.
    ///
    /// # Panics
    /// If `index` is not in `0..9`.
    pub fn play(&mut self, index: usize) -> &mut Self {
        assert!(
            index < CELL_COUNT,
            "cell index {index} out of range 0..{CELL_COUNT}"
        );

        if self.is_over || !self.board.get(index).is_empty() {
            return self;
        }

        self.board.place(index, self.current_player);
        self.move_count += 1;

        self.check_game_over();

        if !self.is_over {
            self.current_player = self.current_player.opponent();
        }

        self
    }

    /// Replaces every field with a fresh round started by `start_mark`.
    pub fn reset(&mut self, start_mark: Mark) -> &mut Self {
        *self = Self::new(start_mark);
        self
    }

    fn check_game_over(&mut self) {
        if let Some((mark, line)) = check_win_with_line(&self.board) {
            self.winner = Some(mark);
            self.winning_line = Some(line);
            self.is_over = true;
            return;
        }

        if self.move_count == CELL_COUNT {
            self.is_over = true;
        }
    }
}
