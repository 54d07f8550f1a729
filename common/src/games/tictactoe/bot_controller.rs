use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{BoardStatus, Mark};
use super::win_detector::evaluate_board;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotType {
    /// Uniformly random empty cell.
    Random,
    /// Exhaustive minimax, never loses.
    Minimax,
}

pub fn calculate_move(
    bot_type: BotType,
    state: &TicTacToeGameState,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    if state.is_over() {
        return None;
    }
    match bot_type {
        BotType::Random => calculate_random_move(state.board(), rng),
        BotType::Minimax => best_move(state, bot_mark),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&get_available_moves(board))
}

/// Picks the move with the highest minimax score for `bot_mark`, lowest index on ties.
/// Returns `None` once the game is over. Search runs on a copy of the board.
pub fn best_move(state: &TicTacToeGameState, bot_mark: Mark) -> Option<usize> {
    if state.is_over() {
        return None;
    }

    let mut board = *state.board();
    let mut best_score = i32::MIN;
    let mut best = None;

    for index in get_available_moves(&board) {
        board.place(index, bot_mark);
        let score = minimax(&mut board, false, bot_mark);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best = Some(index);
        }
    }

    best
}

/// Full-depth minimax without pruning. Terminal boards score `WIN_SCORE` for `bot_mark`,
/// `LOSS_SCORE` for the opponent and `DRAW_SCORE` for a tie, regardless of depth.
/// `board` is restored before returning.
pub fn minimax(board: &mut Board, is_maximizing: bool, bot_mark: Mark) -> i32 {
    match evaluate_board(board) {
        BoardStatus::Won(winner, _) if winner == bot_mark => return WIN_SCORE,
        BoardStatus::Won(_, _) => return LOSS_SCORE,
        BoardStatus::Draw => return DRAW_SCORE,
        BoardStatus::InProgress => {}
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.place(index, bot_mark);
            let eval = minimax(board, false, bot_mark);
            board.clear(index);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent_mark = bot_mark.opponent();
        let mut min_eval = i32::MAX;
        for index in moves {
            board.place(index, opponent_mark);
            let eval = minimax(board, true, bot_mark);
            board.clear(index);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell;

    fn state_after(start: Mark, moves: &[usize]) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new(start);
        for &index in moves {
            state.play(index);
        }
        state
    }

    fn self_play(state: &mut TicTacToeGameState) {
        while !state.is_over() {
            let mark = state.current_player();
            let index = best_move(state, mark).unwrap();
            assert!(state.is_cell_empty(index));
            state.play(index);
        }
    }

    #[test]
    fn test_blocks_row_threat() {
        let state = state_after(Mark::X, &[0, 4, 1]);
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(best_move(&state, Mark::O), Some(2));
    }

    #[test]
    fn test_blocks_column_threat() {
        // X at 0 and 3, O at 4; O must take 6.
        let state = state_after(Mark::X, &[0, 4, 3]);
        assert_eq!(best_move(&state, Mark::O), Some(6));
    }

    #[test]
    fn test_takes_win_over_block() {
        // X: 0, 1, 6   O: 3, 4. O can win at 5 while X threatens 2.
        let state = state_after(Mark::X, &[0, 3, 1, 4, 6]);
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(best_move(&state, Mark::O), Some(5));
    }

    #[test]
    fn test_takes_first_winning_cell_in_index_order() {
        // X: 0, 1, 3   O: 4, 7, 8. X wins at 2 or at 6; both score the same.
        let state = state_after(Mark::X, &[0, 4, 1, 8, 3, 7]);
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(best_move(&state, Mark::X), Some(2));
    }

    #[test]
    fn test_none_when_game_over() {
        let state = state_after(Mark::X, &[0, 3, 1, 4, 2]);
        assert!(state.is_over());
        assert_eq!(best_move(&state, Mark::O), None);
        assert_eq!(
            calculate_move(BotType::Random, &state, Mark::O, &mut SessionRng::new(3)),
            None
        );
    }

    #[test]
    fn test_search_does_not_touch_live_state() {
        let state = state_after(Mark::X, &[4, 0]);
        let before = state.clone();
        best_move(&state, Mark::X);
        assert_eq!(state, before);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board = Board::parse("X.. .O. ...");
        let before = board;
        minimax(&mut board, true, Mark::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_terminal_scores() {
        let mut won = Board::parse("OOO XX. X..");
        assert_eq!(minimax(&mut won, true, Mark::O), WIN_SCORE);
        assert_eq!(minimax(&mut won, true, Mark::X), LOSS_SCORE);

        let mut draw = Board::parse("XOX XOO OXX");
        assert_eq!(minimax(&mut draw, false, Mark::X), DRAW_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_best_play() {
        let mut board = Board::new();
        assert_eq!(minimax(&mut board, true, Mark::X), DRAW_SCORE);
    }

    #[test]
    fn test_self_play_from_every_opening_ties() {
        for opening in 0..9 {
            for start in [Mark::X, Mark::O] {
                let mut state = TicTacToeGameState::new(start);
                state.play(opening);
                self_play(&mut state);
                assert!(state.is_over());
                assert_eq!(state.winner(), None, "opening {opening} by {start}");
            }
        }
    }

    #[test]
    fn test_self_play_from_empty_board_ties() {
        let mut state = TicTacToeGameState::new(Mark::X);
        self_play(&mut state);
        assert_eq!(state.winner(), None);
        assert_eq!(state.move_count(), 9);
    }

    #[test]
    fn test_minimax_bot_never_loses_to_random() {
        let mut rng = SessionRng::new(2024);
        for _ in 0..30 {
            let mut state = TicTacToeGameState::new(Mark::X);
            while !state.is_over() {
                let bot_type = if state.current_player() == Mark::O {
                    BotType::Minimax
                } else {
                    BotType::Random
                };
                let mark = state.current_player();
                let index = calculate_move(bot_type, &state, mark, &mut rng).unwrap();
                state.play(index);
            }
            assert_ne!(state.winner(), Some(Mark::X));
        }
    }

    #[test]
    fn test_random_move_picks_empty_cell() {
        let state = state_after(Mark::X, &[0, 1, 2, 3, 5, 4, 6]);
        let mut rng = SessionRng::new(11);
        for _ in 0..20 {
            let index = calculate_move(BotType::Random, &state, Mark::O, &mut rng).unwrap();
            assert_eq!(state.board().get(index), Cell::Empty);
        }
    }
}
