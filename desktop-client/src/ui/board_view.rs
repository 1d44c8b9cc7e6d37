use eframe::egui;
use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Board, CELL_COUNT, Cell, Player, Position, WinningLine,
};

const LINE_WIDTH: f32 = 2.0;
const MARK_WIDTH: f32 = 4.0;
const WINNING_LINE_WIDTH: f32 = 6.0;

/// Draws the board and returns the index of a clicked empty cell.
/// Clicks are ignored while `accepting_moves` is false.
pub fn render_board(
    ui: &mut egui::Ui,
    board: &Board,
    winning_line: Option<WinningLine>,
    cell_size: f32,
    accepting_moves: bool,
) -> Option<usize> {
    let board_side = cell_size * BOARD_SIZE as f32;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

    if let Some(line) = winning_line {
        for index in 0..CELL_COUNT {
            if line.contains(index) {
                painter.rect_filled(
                    cell_rect(rect, cell_size, index),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(50, 200, 50, 60),
                );
            }
        }
    }

    for i in 0..=BOARD_SIZE {
        let offset = i as f32 * cell_size;
        let stroke = egui::Stroke::new(LINE_WIDTH, egui::Color32::BLACK);
        painter.line_segment(
            [
                egui::pos2(rect.left() + offset, rect.top()),
                egui::pos2(rect.left() + offset, rect.bottom()),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left(), rect.top() + offset),
                egui::pos2(rect.right(), rect.top() + offset),
            ],
            stroke,
        );
    }

    for (row, cells) in board.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let cell_rect = cell_rect(rect, cell_size, row * BOARD_SIZE + col);
            match cell {
                Cell::Mark(Player::X) => draw_x(painter, cell_rect),
                Cell::Mark(Player::O) => draw_o(painter, cell_rect),
                Cell::Empty => {}
            }
        }
    }

    if let Some(line) = winning_line {
        let start = cell_rect(rect, cell_size, line.cells[0]).center();
        let end = cell_rect(rect, cell_size, line.cells[2]).center();
        painter.line_segment(
            [start, end],
            egui::Stroke::new(
                WINNING_LINE_WIDTH,
                egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200),
            ),
        );
    }

    if !accepting_moves {
        return None;
    }

    let mut hovered = None;
    if let Some(hover_pos) = response.hover_pos()
        && let Some(position) = position_at(rect.min, cell_size, hover_pos)
        && board.is_empty_at(position.to_index())
    {
        let index = position.to_index();
        painter.rect_filled(
            cell_rect(rect, cell_size, index),
            0.0,
            egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
        );
        hovered = Some(index);
    }

    if response.clicked() { hovered } else { None }
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(MARK_WIDTH, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let radius = (rect.width() / 2.0) - padding;
    let stroke = egui::Stroke::new(MARK_WIDTH, egui::Color32::from_rgb(50, 50, 220));

    painter.circle_stroke(rect.center(), radius, stroke);
}

fn cell_rect(board_rect: egui::Rect, cell_size: f32, index: usize) -> egui::Rect {
    let row = index / BOARD_SIZE;
    let col = index % BOARD_SIZE;
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.left() + col as f32 * cell_size,
            board_rect.top() + row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

/// Maps a screen point to the board cell under it.
pub fn position_at(origin: egui::Pos2, cell_size: f32, point: egui::Pos2) -> Option<Position> {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    if dx < 0.0 || dy < 0.0 || cell_size <= 0.0 {
        return None;
    }
    Position::new((dy / cell_size) as usize, (dx / cell_size) as usize)
}
