mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    BotType, DRAW_SCORE, LOSS_SCORE, WIN_SCORE, best_move, calculate_move, minimax,
};
pub use game_state::TicTacToeGameState;
pub use types::{BOARD_SIZE, BoardStatus, CELL_COUNT, Cell, Mark, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line, evaluate_board};
