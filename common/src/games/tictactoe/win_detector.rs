use super::board::Board;
use super::types::{Cell, Player, WinningLine};

/// Rows, then columns, then diagonals. The first satisfied line wins.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Cell::Mark(player) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(WinningLine::new(player, line));
        }
    }

    None
}
