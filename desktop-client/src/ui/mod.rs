mod app;
mod board_view;
mod move_list;

pub use app::TicTacToeApp;
