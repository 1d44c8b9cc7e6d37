use eframe::egui;
use tictactoe_common::games::tictactoe::{GameSession, GameStatus, MoveError};
use tictactoe_common::log;

use super::board_view::render_board;
use super::move_list::render_move_list;
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    PlaceMark { index: usize },
    JumpTo { move_index: usize },
    Restart,
}

pub struct TicTacToeApp {
    session: GameSession,
    config: Config,
}

impl TicTacToeApp {
    pub fn new(config: Config) -> Self {
        Self {
            session: GameSession::new(),
            config,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Rejected moves are logged and otherwise ignored.
    pub fn apply(&mut self, action: UiAction) -> Result<(), MoveError> {
        match action {
            UiAction::PlaceMark { index } => {
                let player = self.session.next_player();
                match self.session.play_move(index) {
                    Ok(()) => {
                        log!("{} played cell {}", player, index);
                        if let Some(winner) = self.session.winner() {
                            log!("{} wins after {} moves", winner, self.session.current_move());
                        } else if self.session.current_board().is_full() {
                            log!("Board is full with no winner");
                        }
                        Ok(())
                    }
                    Err(e) => {
                        log!("Ignored click on cell {}: {}", index, e);
                        Err(e)
                    }
                }
            }
            UiAction::JumpTo { move_index } => match self.session.jump_to(move_index) {
                Ok(()) => {
                    log!("Jumped to move {}", move_index);
                    Ok(())
                }
                Err(e) => {
                    log!("Failed to jump to move {}: {}", move_index, e);
                    Err(e)
                }
            },
            UiAction::Restart => {
                self.session.restart();
                log!("Game restarted");
                Ok(())
            }
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let status = self.session.status();
        let text = egui::RichText::new(status.to_string()).size(20.0);
        match status {
            GameStatus::Winner(_) => {
                ui.heading(text.color(egui::Color32::GREEN).strong());
            }
            GameStatus::NextPlayer(_) => {
                ui.heading(text);
            }
        }
    }

    fn render(&mut self, ui: &mut egui::Ui) -> Option<UiAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                self.render_status(ui);
                ui.add_space(10.0);

                let winning_line = if self.config.board.show_winning_line {
                    self.session.winning_line()
                } else {
                    None
                };
                if let Some(index) = render_board(
                    ui,
                    self.session.current_board(),
                    winning_line,
                    self.config.board.cell_size,
                    !self.session.is_game_over(),
                ) {
                    action = Some(UiAction::PlaceMark { index });
                }

                ui.add_space(10.0);
                if ui.button("Restart").clicked() {
                    action = Some(UiAction::Restart);
                }
            });

            if self.config.move_list.visible {
                ui.separator();
                ui.vertical(|ui| {
                    ui.heading("Moves");
                    ui.separator();
                    if let Some(move_index) = render_move_list(ui, &self.session.move_entries()) {
                        action = Some(UiAction::JumpTo { move_index });
                    }
                });
            }
        });

        action
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = self.render(ui) {
                // Rejections are already logged by apply.
                self.apply(action).ok();
            }
        });
    }
}
