use eframe::egui;
use tictactoe_common::games::tictactoe::MoveEntry;

/// Returns the history index whose button was clicked, if any.
pub fn render_move_list(ui: &mut egui::Ui, entries: &[MoveEntry]) -> Option<usize> {
    let mut clicked = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in entries {
            ui.horizontal(|ui| {
                ui.label(format!("{}.", entry.index + 1));
                let button = egui::Button::new(&entry.label);
                if ui.add_enabled(!entry.is_current, button).clicked() {
                    clicked = Some(entry.index);
                }
            });
        }
    });

    clicked
}
