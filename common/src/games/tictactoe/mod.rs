mod board;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use session::{GameSession, MoveEntry};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Cell, GameStatus, MoveError, Player, Position, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
