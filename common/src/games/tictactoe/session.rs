use super::board::Board;
use super::types::{CELL_COUNT, GameStatus, MoveError, Player, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    pub index: usize,
    pub label: String,
    pub is_current: bool,
}

/// Move history plus the index currently being viewed and played from.
///
/// `history` is never empty and `current_move` always points into it.
/// Whose turn it is follows from the parity of `current_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: Vec<Board>,
    current_move: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            history: vec![Board::empty()],
            current_move: 0,
        }
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self.current_board())
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|line| line.player)
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Marks `index` for the player to move. Any snapshots after the
    /// current move are dropped before the new board is appended.
    pub fn play_move(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::InvalidIndex {
                index,
                len: CELL_COUNT,
            });
        }

        let current = *self.current_board();

        if let Some(winner) = self.winner() {
            return Err(MoveError::GameOver { winner });
        }

        if !current.is_empty_at(index) {
            return Err(MoveError::CellOccupied { index });
        }

        let next = current.with_mark(index, self.next_player());

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        Ok(())
    }

    pub fn jump_to(&mut self, move_index: usize) -> Result<(), MoveError> {
        if move_index >= self.history.len() {
            return Err(MoveError::InvalidIndex {
                index: move_index,
                len: self.history.len(),
            });
        }

        self.current_move = move_index;
        Ok(())
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Winner(winner),
            None => GameStatus::NextPlayer(self.next_player()),
        }
    }

    pub fn current_status(&self) -> String {
        self.status().to_string()
    }

    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len()).map(move_label).collect()
    }

    pub fn move_entries(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|index| MoveEntry {
                index,
                label: move_label(index),
                is_current: index == self.current_move,
            })
            .collect()
    }
}

fn move_label(move_index: usize) -> String {
    if move_index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", move_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell;

    fn play_all(session: &mut GameSession, moves: &[usize]) {
        for &index in moves {
            session.play_move(index).unwrap();
        }
    }

    #[test]
    fn test_new_session_starts_empty() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_move(), 0);
        assert_eq!(*session.current_board(), Board::empty());
        assert_eq!(session.current_status(), "Next player: X");
        assert_eq!(session.move_labels(), vec!["Go to game start".to_string()]);
    }

    #[test]
    fn test_row_win_freezes_game() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4, 1, 3, 2]);

        assert_eq!(session.current_status(), "Winner: X");
        assert_eq!(session.winner(), Some(Player::X));
        assert_eq!(session.winning_line().unwrap().cells, [0, 1, 2]);

        let board_before = *session.current_board();
        let len_before = session.history().len();

        let result = session.play_move(5);
        assert_eq!(result, Err(MoveError::GameOver { winner: Player::X }));
        assert_eq!(*session.current_board(), board_before);
        assert_eq!(session.history().len(), len_before);
        assert_eq!(session.current_move(), 5);
    }

    #[test]
    fn test_jump_back_to_start_reverts_view() {
        let mut session = GameSession::new();
        session.play_move(0).unwrap();
        session.jump_to(0).unwrap();

        assert_eq!(session.current_status(), "Next player: X");
        assert_eq!(session.current_board().cell(0), Some(Cell::Empty));
        // future snapshot is kept until the next move
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.move_labels().len(), 2);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_state_change() {
        let mut session = GameSession::new();
        session.play_move(4).unwrap();
        let snapshot = session.clone();

        assert_eq!(
            session.play_move(4),
            Err(MoveError::CellOccupied { index: 4 })
        );
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_out_of_range_indices_are_rejected() {
        let mut session = GameSession::new();
        session.play_move(0).unwrap();
        let snapshot = session.clone();

        assert_eq!(
            session.play_move(9),
            Err(MoveError::InvalidIndex { index: 9, len: 9 })
        );
        assert_eq!(
            session.jump_to(2),
            Err(MoveError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_turns_alternate_by_parity() {
        let mut session = GameSession::new();
        let moves = [4, 0, 2, 6, 3, 5, 1, 7];
        for (played, &index) in moves.iter().enumerate() {
            let expected = if played % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(session.next_player(), expected);
            session.play_move(index).unwrap();
            assert_eq!(
                session.current_board().cell(index),
                Some(Cell::Mark(expected))
            );
        }
        assert_eq!(session.next_player(), Player::X);
    }

    #[test]
    fn test_play_after_jump_discards_future() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 1, 2, 3]);
        assert_eq!(session.history().len(), 5);
        let discarded = session.history()[2];

        session.jump_to(1).unwrap();
        assert_eq!(session.next_player(), Player::O);
        session.play_move(8).unwrap();

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.current_move(), 2);
        assert_ne!(session.history()[2], discarded);
        assert_eq!(
            session.current_board().cell(8),
            Some(Cell::Mark(Player::O))
        );
        assert_eq!(session.current_board().cell(1), Some(Cell::Empty));
    }

    #[test]
    fn test_each_snapshot_adds_exactly_one_mark() {
        let mut session = GameSession::new();
        play_all(&mut session, &[4, 0, 8, 2, 1]);
        session.jump_to(2).unwrap();
        play_all(&mut session, &[6, 3]);

        for pair in session.history().windows(2) {
            let (before, after) = (pair[0], pair[1]);
            let changed: Vec<usize> = (0..CELL_COUNT)
                .filter(|&i| before.cell(i) != after.cell(i))
                .collect();
            assert_eq!(changed.len(), 1);
            assert!(before.is_empty_at(changed[0]));
        }
    }

    #[test]
    fn test_jump_to_winning_position_then_earlier_allows_play() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4, 1, 3, 2]);
        assert!(session.is_game_over());

        session.jump_to(4).unwrap();
        assert!(!session.is_game_over());
        assert_eq!(session.current_status(), "Next player: X");
        session.play_move(5).unwrap();
        assert_eq!(session.history().len(), 6);
        assert_eq!(session.current_status(), "Next player: O");
    }

    #[test]
    fn test_move_labels_and_entries() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 1]);
        session.jump_to(1).unwrap();

        assert_eq!(
            session.move_labels(),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );

        let entries = session.move_entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[1].is_current);
        assert!(!entries[0].is_current && !entries[2].is_current);
        assert_eq!(entries[2].label, "Go to move #2");
    }

    #[test]
    fn test_restart() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 4, 1, 3, 2]);
        session.restart();
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_full_board_without_winner() {
        let mut session = GameSession::new();
        play_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert!(session.current_board().is_full());
        assert_eq!(session.winner(), None);
        assert_eq!(
            session.play_move(0),
            Err(MoveError::CellOccupied { index: 0 })
        );
    }
}
